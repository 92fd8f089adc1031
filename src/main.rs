use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tt_core::verification::DocumentType;

use truetribe_lib::bootstrap::{self, AppRuntime};
use truetribe_lib::commands::{self, dto::SubmitVerificationRequest};

#[derive(Parser)]
#[command(name = "truetribe")]
#[command(about = "TrueTribe identity verification client", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "TRUETRIBE_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show verification status
    Status,
    /// Walk the verification wizard and submit
    Submit {
        /// ID document image
        #[arg(long)]
        document: PathBuf,
        /// Selfie image
        #[arg(long)]
        selfie: PathBuf,
        /// passport, drivers_license or national_id
        #[arg(long, default_value = "passport")]
        document_type: DocumentType,
        #[arg(long)]
        document_number: String,
        /// Name as shown on the document
        #[arg(long)]
        full_name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date_of_birth: String,
        #[arg(long)]
        address: String,
    },
    /// Manage the stored session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Store tokens issued by the backend
    Set {
        #[arg(long, env = "TRUETRIBE_ACCESS_TOKEN", hide_env_values = true)]
        access_token: String,
        #[arg(long)]
        refresh_token: Option<String>,
    },
    /// Forget the stored session
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env-backed args and before the
    // profile-dependent data directory is resolved.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let paths = bootstrap::resolve_app_paths()?;
    let config = bootstrap::load_app_config(&paths, cli.api_url)?;
    if let Err(err) = bootstrap::tracing::init_tracing_subscriber(&config.log_dir) {
        eprintln!("Failed to initialize tracing: {err}");
    }
    tracing::debug!(config_path = %paths.config_path.display(), "configuration resolved");

    let runtime = bootstrap::create_runtime(&config)?;

    match cli.command {
        Commands::Status => run_status(&runtime).await?,
        Commands::Submit {
            document,
            selfie,
            document_type,
            document_number,
            full_name,
            date_of_birth,
            address,
        } => {
            let request = SubmitVerificationRequest {
                document_path: document,
                selfie_path: selfie,
                document_type,
                document_number,
                full_name,
                date_of_birth,
                address,
            };
            run_submit(&runtime, request).await?;
        }
        Commands::Session { action } => match action {
            SessionAction::Set {
                access_token,
                refresh_token,
            } => {
                commands::session::set_session(&runtime, access_token, refresh_token)
                    .await
                    .map_err(|e| anyhow!(e))?;
                println!("session stored");
            }
            SessionAction::Clear => {
                commands::session::clear_session(&runtime)
                    .await
                    .map_err(|e| anyhow!(e))?;
                println!("session cleared");
            }
        },
    }

    Ok(())
}

async fn run_status(runtime: &AppRuntime) -> Result<()> {
    let overview = commands::verification::get_verification_status(runtime)
        .await
        .map_err(|e| anyhow!(e))?;
    println!("{}", serde_json::to_string_pretty(&overview)?);
    Ok(())
}

async fn run_submit(runtime: &AppRuntime, request: SubmitVerificationRequest) -> Result<()> {
    let response = commands::verification::submit_verification(runtime, request)
        .await
        .map_err(|e| anyhow!(e))?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
