//! testlab CLI entry point

use clap::Parser;
use testlab::config::{self, mask};
use testlab::upload::UploadOptions;
use testlab::{predict, upload};
use testlab::{Cli, Commands, Config, Error, PIPELINE_DEADLINE, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    run(cli).await?;
    Ok(())
}

/// Log to stderr so pipeline output on stdout stays machine-readable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let env = config::snapshot_env();
    let config = Config::from_env(&env)?;
    debug!(
        server = config.server,
        key = mask(&config.api_key),
        "resolved api config"
    );

    match cli.command {
        Commands::Upload {
            reports,
            started,
            max_reports,
        } => {
            let started = started.as_deref().map(config::parse_started).transpose()?;
            let options = UploadOptions {
                repo: cli.repo,
                reports,
                max_reports,
                started,
            };

            deadline("upload", upload::run(&config, &env, options)).await
        }

        Commands::Predict { runner } => {
            let runner = runner.parse()?;
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();

            deadline(
                "predict",
                predict::run(&config, &env, cli.repo, runner, stdin, stdout),
            )
            .await
        }
    }
}

/// Bound a pipeline by the global deadline. Expiry is terminal.
async fn deadline(operation: &str, fut: impl Future<Output = Result<()>>) -> Result<()> {
    tokio::time::timeout(PIPELINE_DEADLINE, fut)
        .await
        .map_err(|_| Error::deadline(operation, PIPELINE_DEADLINE.as_secs()))?
}
