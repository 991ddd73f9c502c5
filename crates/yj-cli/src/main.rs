//! CLI frontend for the Yijing divination engine.

mod commands;
mod logger;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

const DEFAULT_DATA: &str = "data/iching_basic.json";

/// Shown under `show`, `line` and `cast` help.
const DATA_COVERAGE: &str = "The bundled data/iching_basic.json carries texts for hexagrams \
1, 2, 11, 12, 63 and 64 only. Any other hexagram prints placeholder texts \
unless --data points at a complete table.";

#[derive(Parser)]
#[command(
    name = "yj",
    about = "Yijing: three-coin I Ching divination",
    version,
    propagate_version = true
)]
struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Reference data file
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Directory served under /static
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// JSON configuration file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Cast a hexagram with three coins per line
    #[command(after_help = DATA_COVERAGE)]
    Cast {
        /// Seed for a reproducible cast
        #[arg(short, long)]
        seed: Option<String>,

        /// The question being asked
        #[arg(short, long)]
        topic: Option<String>,

        /// Print the cast as JSON
        #[arg(long)]
        json: bool,

        /// Reference data file, for the judgement text
        #[arg(short, long, default_value = DEFAULT_DATA)]
        data: PathBuf,
    },

    /// Show the reference texts of a hexagram
    #[command(after_help = DATA_COVERAGE)]
    Show {
        /// King Wen ordinal (1-64)
        #[arg(allow_negative_numbers = true)]
        ordinal: i64,

        /// Reference data file
        #[arg(short, long, default_value = DEFAULT_DATA)]
        data: PathBuf,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the statement of one line
    #[command(after_help = DATA_COVERAGE)]
    Line {
        /// King Wen ordinal (1-64)
        #[arg(allow_negative_numbers = true)]
        ordinal: i64,

        /// Line index, 0 = bottom
        #[arg(allow_negative_numbers = true)]
        index: i64,

        /// Reference data file
        #[arg(short, long, default_value = DEFAULT_DATA)]
        data: PathBuf,
    },

    /// Print the King Wen lookup table
    Table,
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose, cli.log_json);

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            data,
            static_dir,
            config,
        } => commands::serve::run(commands::serve::Overrides {
            host,
            port,
            data,
            static_dir,
            config,
        }),
        Commands::Cast {
            seed,
            topic,
            json,
            data,
        } => commands::cast::run(seed.as_deref(), topic.as_deref(), json, &data),
        Commands::Show {
            ordinal,
            data,
            json,
        } => commands::show::run(&data, ordinal, json),
        Commands::Line {
            ordinal,
            index,
            data,
        } => commands::line::run(&data, ordinal, index),
        Commands::Table => commands::table::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
