/// Beacon Devkit - run the device power-on sequence on a workstation
use beacon_core::BuildConfig;
use beacon_devkit::{DevkitConfig, PlanReport};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "beacon-devkit")]
#[command(about = "Beacon firmware power-on harness", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the boot sequence against host stand-ins
    Boot {
        /// Configuration file path
        #[arg(short, long, env = "BEACON_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the boot order this build resolves to
    Plan {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let build = BuildConfig::current();

    match cli.command {
        Commands::Boot { config } => {
            let settings = DevkitConfig::load(config.as_deref())?;
            init_tracing(&settings.logging.filter);

            let board = beacon_devkit::boot(&settings, build, std::io::stdout())?;
            tracing::info!(report = ?board.report(), "Boot complete");
        }
        Commands::Plan { json } => {
            let report = PlanReport::new(build);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render());
            }
        }
    }

    Ok(())
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
