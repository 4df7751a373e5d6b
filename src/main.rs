use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use incubator::config::Config;
use incubator::menu::{run_interactive, MenuExit};
use incubator::refresh::{ctrl_c, watch};
use incubator::session::Session;
use incubator_core::SlotIndex;

const DATE_HELP: &str = "Date formats:
  YYYY-MM-DD
  MM-DD-YYYY
  MM/DD/YYYY
  MM-DD        (current year)
  MM/DD        (current year)";

#[derive(Parser)]
#[command(name = "incubator")]
#[command(about = "Track eggs in an eight-slot incubator")]
#[command(after_help = DATE_HELP)]
struct Cli {
    /// Config file (default: <config dir>/egg-incubator/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// State file holding the eight slots
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Append-only audit log
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the incubator grid once
    Show,
    /// Add an egg to a slot
    #[command(after_help = DATE_HELP)]
    Add {
        /// Slot number (1-8)
        slot: SlotIndex,
        /// Date the egg was placed (default: today)
        date: Option<String>,
    },
    /// Remove the egg from a slot
    Remove {
        /// Slot number (1-8)
        slot: SlotIndex,
    },
    /// Re-render the grid periodically until Ctrl+C
    Watch {
        /// Seconds between renders (default: from config, one hour)
        #[arg(short, long)]
        interval: Option<u64>,
    },
}

/// Initialize tracing on stderr so stdout stays the rendered grid
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }
    if let Some(path) = cli.log_file {
        config.log_file = path;
    }
    if cli.no_color {
        config.color = false;
    }
    if let Some(Commands::Watch {
        interval: Some(secs),
    }) = &cli.command
    {
        config.refresh_interval_secs = *secs;
    }
    tracing::debug!(?config, "configuration loaded");

    let session = Session::from_config(&config);
    let mut out = io::stdout().lock();

    match cli.command {
        Some(Commands::Show) => session.show(&mut out)?,
        Some(Commands::Add { slot, date }) => session.add(&mut out, slot, date.as_deref())?,
        Some(Commands::Remove { slot }) => session.remove(&mut out, slot)?,
        Some(Commands::Watch { .. }) => {
            watch(&session, &mut out, ctrl_c()).await?;
        }
        None => {
            let mut input = tokio::io::BufReader::new(tokio::io::stdin());
            let exit = run_interactive(&session, &mut input, &mut out, ctrl_c()).await?;
            if exit == MenuExit::Interrupted {
                // tokio's stdin reader thread stays blocked until the next line
                // and runtime shutdown would wait for it
                drop(out);
                std::process::exit(0);
            }
        }
    }

    Ok(())
}
