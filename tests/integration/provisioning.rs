//! Integration tests: delegated identity provisioning against a stubbed
//! Abyss service.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use abyss_auth::crypto::signing;
use abyss_auth::{provision, AuthError, KeyMaterial, TransportClient};

const CHALLENGE_B64: &str = "AAAA";

#[tokio::test]
async fn create_provisions_independent_keypair() {
    let server = MockServer::start().await;
    let authority_key = KeyMaterial::generate();

    Mock::given(method("GET"))
        .and(path("/api/user/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!("\"{CHALLENGE_B64}\"")))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/user/alice"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let transport = TransportClient::new(&server.uri()).unwrap();
    let identity = provision::create(
        &transport,
        "alice",
        &authority_key.private_key_base64(),
        "bob",
        1,
    )
    .await
    .unwrap();

    // The new material is syntactically valid and self-consistent
    let private = BASE64.decode(&identity.private_key_base64).unwrap();
    let public = BASE64.decode(&identity.public_key_base64).unwrap();
    assert_eq!(private.len(), 64);
    assert_eq!(public.len(), 32);
    assert_eq!(&private[32..], &public[..]);

    // ...and never equal to the authority's material
    assert_ne!(identity.private_key_base64, authority_key.private_key_base64());
    assert_ne!(identity.public_key_base64, authority_key.public_key_base64());

    // Inspect the PATCH request the service actually received
    let requests = server.received_requests().await.unwrap();
    let patch = requests
        .iter()
        .find(|r| r.method.to_string() == "PATCH")
        .expect("a PATCH request should have been submitted");
    let body: serde_json::Value = serde_json::from_slice(&patch.body).unwrap();

    assert_eq!(body["Name"], "bob");
    assert_eq!(body["Parent"], "alice");
    assert_eq!(body["Privilege"], 1);
    assert_eq!(body["PublicKey"], identity.public_key_base64.as_str());
    // The proof is the authority's signature over the decoded challenge
    let expected_sig = signing::sign_to_base64(authority_key.signing_key(), &[0u8; 3]);
    assert_eq!(body["Response"], expected_sig.as_str());
}

#[tokio::test]
async fn create_returns_no_keys_on_service_failure() {
    let server = MockServer::start().await;
    let authority_key = KeyMaterial::generate();

    Mock::given(method("GET"))
        .and(path("/api/user/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CHALLENGE_B64))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/user/alice"))
        .respond_with(ResponseTemplate::new(403).set_body_string("privilege ceiling"))
        .mount(&server)
        .await;

    let transport = TransportClient::new(&server.uri()).unwrap();
    let err = provision::create(
        &transport,
        "alice",
        &authority_key.private_key_base64(),
        "bob",
        99,
    )
    .await
    .unwrap_err();

    match err {
        AuthError::ProvisioningFailed { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "privilege ceiling");
        }
        other => panic!("expected ProvisioningFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn create_fails_before_generating_when_challenge_unavailable() {
    let server = MockServer::start().await;
    let authority_key = KeyMaterial::generate();

    Mock::given(method("GET"))
        .and(path("/api/user/alice"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let transport = TransportClient::new(&server.uri()).unwrap();
    let err = provision::create(
        &transport,
        "alice",
        &authority_key.private_key_base64(),
        "bob",
        1,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AuthError::ChallengeUnavailable { status: 503, .. }));

    // No PATCH should ever have been attempted
    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.method.to_string() != "PATCH"));
}
