use clap::{Parser, Subcommand};
use favicon_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "favicon")]
#[command(version)]
#[command(about = "Favicon resolver for timeline activities")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Directory holding bundled icons
    #[arg(long, value_name = "DIR", global = true)]
    assets: Option<String>,

    /// Maximum number of cached host icons
    #[arg(long, global = true)]
    cache_capacity: Option<usize>,

    /// Do not emit failure telemetry
    #[arg(long, global = true)]
    no_telemetry: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the icon for an activity
    Resolve {
        /// Primary label: app name, URL or domain
        primary: String,

        /// Secondary label tried after the primary
        secondary: Option<String>,

        /// Write the resolved icon as PNG
        #[arg(short, long, value_name = "FILE")]
        out: Option<String>,
    },
    /// Print the normalized host for each label
    Normalize {
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Resolve overlapping timeline cards read as JSON (`-` for stdin)
    Overlaps {
        file: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        asset_directory: cli.assets.clone(),
        cache_capacity: cli.cache_capacity,
        disable_telemetry: cli.no_telemetry,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting favicon v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Resolve {
            primary,
            secondary,
            out,
        } => {
            let services = di::FaviconServices::new(&config);
            let resolved = commands::run_resolve(
                &services,
                &primary,
                secondary.as_deref(),
                out.as_deref(),
            )
            .await;
            services.shutdown().await;

            if !resolved? {
                std::process::exit(1);
            }
        }
        Command::Normalize { labels } => commands::run_normalize(&labels),
        Command::Overlaps { file } => commands::run_overlaps(&file)?,
    }

    Ok(())
}
