//! truthline CLI
//!
//! One invocation performs one monitoring run; scheduling (cron or
//! similar) is external and must not overlap invocations.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use truthline::{
    config::Secrets,
    error::Result,
    extract::Extractor,
    fetch::CascadeFetcher,
    models::Config,
    notify::LinePush,
    pipeline,
    store::{LocalStore, PostStore},
    translate::DeepSeekTranslator,
};

/// truthline - Truth Social to LINE monitor
#[derive(Parser, Debug)]
#[command(
    name = "truthline",
    version,
    about = "Watches a Truth Social profile and forwards new posts to a LINE group"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the data directory from the configuration
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute one monitoring run
    Run,

    /// Validate configuration, secrets, and selector cascades
    Validate,

    /// Show durable store state
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    config.validate()?;

    let data_dir = cli
        .data_dir
        .unwrap_or_else(|| PathBuf::from(&config.storage.data_dir));
    let store = LocalStore::new(&data_dir);

    match cli.command {
        Command::Run => {
            log::info!("truthline run starting");

            let secrets = Secrets::from_env()?;
            let source = CascadeFetcher::new(&config)?;
            let translator = DeepSeekTranslator::new(&config.translate, &secrets.deepseek_api_key)?;
            let notifier = LinePush::new(
                &config.notify,
                &secrets.line_channel_access_token,
                &secrets.line_group_id,
            )?;

            let outcome =
                pipeline::run_once(&config, &source, &translator, &notifier, &store).await?;
            log::info!("Run finished: {outcome:?}");
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            log::info!("✓ Config OK ({})", cli.config.display());

            // A bad selector must fail here, not mid-run.
            Extractor::new(&config.extract, &config.fetch.origin)?;
            log::info!(
                "✓ Extraction cascade OK ({} container selectors, {} content selectors)",
                config.extract.container_selectors.len(),
                config.extract.content_selectors.len()
            );

            Secrets::from_env()?;
            log::info!("✓ Secrets OK");

            log::info!("All validations passed!");
        }

        Command::Info => {
            log::info!("Data directory: {}", data_dir.display());
            log::info!(
                "First run completed: {}",
                store.first_run_completed().await?
            );
            log::info!("Seen posts: {}", store.post_count().await?);
        }
    }

    Ok(())
}
