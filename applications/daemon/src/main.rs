/// Cloudscope - SoundCloud search connector, driven from the command line
use clap::{Parser, Subcommand};
use cloudscope_api::SoundCloudClient;
use cloudscope_core::{Scope, SearchQuery};
use cloudscope_daemon::{
    config::DaemonConfig, output::JsonLinesReply, settle::settle_accounts, DaemonError,
};
use cloudscope_scope::accounts::{CredentialRegistry, CredentialWatcher, SessionStore};
use cloudscope_scope::SoundCloudScope;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cloudscope")]
#[command(about = "Search and preview SoundCloud tracks as a host would", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a search and print categories and results
    Search {
        /// Query text; omit for the home feed
        query: Option<String>,
    },
    /// Run a search, then preview one of its track results
    Preview {
        /// Query text; omit for the home feed
        query: Option<String>,
        /// Position of the track result to preview
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the JSON lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cloudscope=info,cloudscope_scope=info,cloudscope_api=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = DaemonConfig::load(cli.config.as_deref())?;
    config.validate()?;
    tracing::info!("Base URL: {}", config.api.base_url);

    let client = SoundCloudClient::new(config.api.clone())?;
    let settings = config.scope_settings();

    let watcher = CredentialWatcher::start(CredentialRegistry::new());
    let session = SessionStore::new();
    settle_accounts(&watcher, &session, &settings.provider, &config.accounts).await;

    let scope = SoundCloudScope::new(settings, Arc::new(client), Arc::new(session));

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling");
            ctrl_c.cancel();
        }
    });

    let outcome = run(cli.command, &scope, &cancel).await;

    watcher.shutdown().await;
    outcome.map_err(Into::into)
}

async fn run(
    command: Commands,
    scope: &SoundCloudScope,
    cancel: &CancellationToken,
) -> Result<(), DaemonError> {
    let reply = JsonLinesReply::new(std::io::stdout());

    match command {
        Commands::Search { query } => {
            let query = SearchQuery::new(query.unwrap_or_default());
            scope.search(&query, &reply, cancel).await?;
        }
        Commands::Preview { query, index } => {
            let query = SearchQuery::new(query.unwrap_or_default());
            scope.search(&query, &reply, cancel).await?;

            let tracks = reply.tracks();
            let result = tracks.get(index).ok_or(DaemonError::NoSuchResult {
                index,
                available: tracks.len(),
            })?;
            scope.preview(result, &reply, cancel).await?;
        }
    }

    Ok(())
}
