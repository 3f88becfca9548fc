use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod dashboard;
mod export;
mod output;
mod session;

#[derive(Debug, Parser)]
#[command(name = "bizlens")]
#[command(about = "Business Profile analytics: insights, review sentiment, and exports")]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,

    #[command(subcommand)]
    command: Commands,
}

/// How the session authenticates.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct SessionArgs {
    /// Use built-in sample data instead of the live APIs
    #[arg(long, global = true)]
    pub demo: bool,
    /// OAuth client-secrets JSON downloaded from the cloud console
    #[arg(long, global = true)]
    pub credentials: Option<PathBuf>,
    /// Authorization code from the consent page (see `auth-url`)
    #[arg(long, global = true)]
    pub code: Option<String>,
    /// Bearer token for the Business Profile APIs (overrides `BIZLENS_ACCESS_TOKEN`)
    #[arg(long, global = true)]
    pub access_token: Option<String>,
}

/// Brand, location, and date window narrowing.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct SelectionArgs {
    /// Only locations of this brand
    #[arg(long)]
    pub brand: Option<String>,
    /// A single location by name
    #[arg(long)]
    pub location: Option<String>,
    /// First day of the window (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Last day of the window (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    Pdf,
    Xlsx,
    All,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the OAuth consent URL for `--credentials`
    AuthUrl,
    /// Summary metrics, location breakdowns, and review sentiment
    Overview {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Sentiment summaries and the most recent reviews
    Reviews {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Number of recent reviews to list
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Write timestamped PDF and/or XLSX reports
    Export {
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long, value_enum, default_value = "all")]
        format: ExportFormat,
        /// Output directory (defaults to `BIZLENS_EXPORT_DIR`)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = bizlens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if matches!(cli.command, Commands::AuthUrl) {
        return session::run_auth_url(&cli.session, &config);
    }

    let session = session::open_session(&cli.session, &config).await?;
    let result = run(cli.command, &session, &config).await;
    session.end();
    result
}

async fn run(
    command: Commands,
    session: &bizlens_core::SessionContext,
    config: &bizlens_core::AppConfig,
) -> anyhow::Result<()> {
    let source = bizlens_source::Source::for_session(session, config)?;
    let today = chrono::Local::now().date_naive();

    match command {
        Commands::AuthUrl => anyhow::bail!("auth-url runs without a session"),
        Commands::Overview { selection } => {
            let request = dashboard::Request::from_args(&selection, today, config)?;
            let dash = dashboard::load(&source, &request).await?;
            output::print_overview(&dash);
        }
        Commands::Reviews { selection, limit } => {
            let request = dashboard::Request::from_args(&selection, today, config)?;
            let dash = dashboard::load(&source, &request).await?;
            output::print_reviews(&dash, limit);
        }
        Commands::Export {
            selection,
            format,
            out_dir,
        } => {
            let request = dashboard::Request::from_args(&selection, today, config)?;
            let dash = dashboard::load(&source, &request).await?;
            let dir = out_dir.unwrap_or_else(|| config.export_dir.clone());
            let generated_at = chrono::Local::now().naive_local();
            let written = export::write_exports(&dash, format, &dir, generated_at)?;
            for path in &written {
                println!("wrote {}", path.display());
            }
        }
    }

    Ok(())
}
