//! Terminal front end for Stranded.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stranded",
    about = "Stranded — a crash-landed text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal
    Play {
        /// Game definition file (default: the built-in crash site)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Validate a game definition file
    Check {
        /// Game definition file
        file: PathBuf,
    },

    /// List the rooms of a game definition
    Rooms {
        /// Game definition file (default: the built-in crash site)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Print the built-in game definition as JSON
    Dump,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play { world } => commands::play::run(world.as_deref()),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Rooms { world } => commands::rooms::run(world.as_deref()),
        Commands::Dump => commands::dump::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
