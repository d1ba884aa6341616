//! # URL Signer CLI
//!
//! Composition root: loads the signing key once, then issues or checks links.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (stderr)
//! 2. Load configuration from `URL_SIGNER_SECRET_KEY`, else from the key file
//!    (generated on first run)
//! 3. Run the requested command
//!
//! ```text
//! url-signer sign https://host/download id=42 --expire 600
//! url-signer sign-file https://host/download /srv/files/report.zip
//! url-signer verify 'https://host/download?id=42&_t=...&_e=600&_sign=...'
//! url-signer decrypt '%2BhD8kmUOqGEyF5ghLHKQUlaDL%2F1j3Dw5AdPE2U%2FpMQM%3D'
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use signer_telemetry::{init_telemetry, TelemetryConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use url_signer::{
    FileKeyStore, IvStrategy, SignedParams, SignedUrlApi, SignerConfig, UrlSigner,
    DEFAULT_KEY_FILE,
};

#[derive(Debug, Parser)]
#[command(name = "url-signer", version, about = "Issue and check signed download links")]
struct Cli {
    /// Key file used when URL_SIGNER_SECRET_KEY is not set
    #[arg(long, global = true, default_value = DEFAULT_KEY_FILE)]
    key_file: PathBuf,

    /// Use a random per-message IV for encrypted payloads
    #[arg(long, global = true)]
    random_iv: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign a URL with key=value parameters
    Sign {
        /// Base URL
        url: String,
        /// Parameters as key=value
        #[arg(value_parser = parse_pair)]
        params: Vec<(String, String)>,
        /// Validity window in seconds
        #[arg(long)]
        expire: Option<u64>,
    },
    /// Sign a URL carrying an encrypted file path
    SignFile {
        /// Base URL
        url: String,
        /// Resource path to embed
        path: String,
        /// Validity window in seconds
        #[arg(long)]
        expire: Option<u64>,
    },
    /// Check a signed URL; exits non-zero when invalid
    Verify {
        /// Signed URL as received
        url: String,
    },
    /// Decrypt a `file` parameter value
    Decrypt {
        /// Encrypted value, percent-encoded or not
        value: String,
    },
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {:?}", raw))
}

fn load_signer(cli: &Cli) -> Result<UrlSigner> {
    let signer = match SignerConfig::from_env().context("reading signer environment")? {
        Some(config) => {
            tracing::debug!("Using signing key from environment");
            UrlSigner::new(config)?
        }
        None => UrlSigner::from_provider(&FileKeyStore::new(&cli.key_file))
            .with_context(|| format!("provisioning key file {}", cli.key_file.display()))?,
    };

    let strategy = if cli.random_iv {
        IvStrategy::Random
    } else {
        IvStrategy::Derived
    };
    Ok(signer.with_iv_strategy(strategy))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_telemetry(&TelemetryConfig::from_env())?;

    let signer = load_signer(&cli)?;

    match cli.command {
        Command::Sign {
            url,
            params,
            expire,
        } => {
            let params: SignedParams = params.into_iter().collect();
            println!("{}", signer.sign(&url, params, expire)?);
        }
        Command::SignFile { url, path, expire } => {
            println!("{}", signer.sign_payload(&url, &path, expire)?);
        }
        Command::Verify { url } => {
            let valid = signer.validate_url(&url);
            println!("{}", if valid { "valid" } else { "invalid" });
            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Decrypt { value } => {
            println!("{}", signer.decrypt_file_param(&value)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
