//! Abyss CLI — `abyss` command.
//!
//! Drives the challenge-response protocol against an Abyss service:
//! open a session, validate or destroy a token, provision a delegated
//! identity, or generate a standalone keypair.

use anyhow::Result;
use clap::{Parser, Subcommand};

use abyss_auth::session::{self, AuthSession, SessionToken, Validation};
use abyss_auth::{provision, KeyMaterial, TransportClient};

/// Abyss CLI — authenticate against an Abyss service and manage sessions
/// and delegated identities.
#[derive(Parser, Debug)]
#[command(
    name = "abyss",
    about = "Abyss authentication CLI",
    version,
    long_about = "abyss — Abyss authentication CLI\n\nProve ownership of an identity's private key, manage the resulting\nsession token, and provision delegated identities."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open a session: prove key ownership and print the session token
    Open {
        /// Service base URL (e.g. https://abyss.example)
        base_url: String,
        /// Username to authenticate as
        user: String,
        /// Private key, base64 (32-byte seed or 64-byte seed+public)
        private_key: String,
    },

    /// Check whether a token is live; prints the bound username
    Valid {
        /// Service base URL
        base_url: String,
        /// Session token to validate
        token: String,
    },

    /// Revoke a session token
    Destroy {
        /// Service base URL
        base_url: String,
        /// Session token to revoke
        token: String,
    },

    /// Provision a new identity under an existing one's delegation
    Create {
        /// Service base URL
        base_url: String,
        /// Authority username performing the delegation
        user: String,
        /// Authority's private key, base64
        private_key: String,
        /// Username for the new identity
        new_username: String,
        /// Privilege level for the new identity (server-defined meaning)
        privilege: i64,
    },

    /// Generate a fresh Ed25519 keypair without touching the network
    Keygen,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::init();
    }

    match cli.command {
        Commands::Open {
            base_url,
            user,
            private_key,
        } => {
            let transport = TransportClient::new(&base_url)?;
            let token = AuthSession::new(&transport, &user).open(&private_key).await?;
            println!("{token}");
        }

        Commands::Valid { base_url, token } => {
            let transport = TransportClient::new(&base_url)?;
            match session::validate(&transport, &SessionToken(token)).await? {
                Validation::Valid { username } => println!("{username}"),
                Validation::Invalid => {
                    println!("Invalid");
                    std::process::exit(1);
                }
            }
        }

        Commands::Destroy { base_url, token } => {
            let transport = TransportClient::new(&base_url)?;
            session::destroy(&transport, &SessionToken(token)).await?;
            println!("Success");
        }

        Commands::Create {
            base_url,
            user,
            private_key,
            new_username,
            privilege,
        } => {
            let transport = TransportClient::new(&base_url)?;
            let identity =
                provision::create(&transport, &user, &private_key, &new_username, privilege)
                    .await?;
            println!("Success");
            println!("NewUserPrivateKeyBase64:");
            println!("{}", identity.private_key_base64);
            println!("NewUserPublicKeyBase64:");
            println!("{}", identity.public_key_base64);
        }

        Commands::Keygen => {
            let key = KeyMaterial::generate();
            println!("PrivateKeyBase64:");
            println!("{}", key.private_key_base64());
            println!("PublicKeyBase64:");
            println!("{}", key.public_key_base64());
        }
    }

    Ok(())
}
