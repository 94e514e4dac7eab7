//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use thoughtbox_core::{Complaint, config};

mod commands;

#[derive(Parser)]
#[command(name = "thoughtbox")]
#[command(version)]
#[command(about = "Share what's troubling you, what's behind it, and a ray of hope")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Collector endpoint (overrides config and THOUGHTBOX_COLLECTOR_URL)
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Seconds to wait for the collector (0 disables the bound)
    #[arg(long, global = true, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Submit one thought without opening the form
    Submit {
        /// What's troubling you
        #[arg(long)]
        concern: String,

        /// What's behind it
        #[arg(long)]
        cause: String,

        /// A ray of hope
        #[arg(long)]
        solution: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Print the effective configuration
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        url,
        timeout_secs,
    } = cli;

    // Config subcommands work even when the file on disk is broken.
    if let Some(Commands::Config { command }) = &command {
        match command {
            ConfigCommands::Path => {
                commands::config::path();
                return Ok(());
            }
            ConfigCommands::Init => return commands::config::init(),
            ConfigCommands::Show => {}
        }
    }

    let mut config = config::Config::load().context("load config")?;
    if let Some(url) = url {
        config.collector.url = url;
    }
    if let Some(secs) = timeout_secs {
        config.collector.timeout_secs = secs;
    }

    // default to the interactive form
    let Some(command) = command else {
        return commands::form::run(&config).await;
    };

    match command {
        Commands::Submit {
            concern,
            cause,
            solution,
        } => commands::submit::run(&config, Complaint::new(concern, cause, solution)).await,
        Commands::Config { .. } => commands::config::show(&config),
    }
}
