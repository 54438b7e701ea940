mod audit;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hubclean-cli")]
#[command(about = "HubSpot contact audit command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the audit once and post the report to Slack
    Analyze {
        /// Post to this channel instead of `SLACK_CHANNEL`
        #[arg(long)]
        channel: Option<String>,
    },
    /// Run the audit and print the report blocks as JSON without posting
    ///
    /// Nothing is sent to Slack, but the full configuration is still loaded,
    /// so `SLACK_ACCESS_TOKEN` and `SLACK_CHANNEL` must be set.
    Preview {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = hubclean_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout is reserved for `preview` output.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match command {
        Commands::Analyze { channel } => audit::run_analyze(&config, channel.as_deref()).await,
        Commands::Preview { pretty } => audit::run_preview(&config, pretty).await,
    }
}

#[cfg(test)]
mod tests;
