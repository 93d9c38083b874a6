use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use seqview_core::{Position, SortMode};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::Config;
use error::CliResult;

#[derive(Parser)]
#[command(name = "seqview")]
#[command(about = "SeqView - alignment geometry for sequence maps and alignment panels")]
#[command(version)]
#[command(long_about = "
SeqView turns alignment hits into forward-strand map fragments, ordered
tracks, alignment statistics and wrapped alignment lines.

Examples:
  seqview layout --input hits.json --sort by-longest --pin 0
  seqview align --input hits.json --track 'NP_000001 kinase' --hsp 1
  seqview stats --first ACGT-A --second ACGTTA
  seqview config --example > seqview.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Order hit tracks and place their fragments on the sequence map
    Layout {
        /// JSON file with hits and their HSPs
        #[arg(short, long)]
        input: PathBuf,

        /// Track ordering (defaults to the configured one)
        #[arg(long)]
        sort: Option<SortArg>,

        /// Input index of the track to keep on the first row
        #[arg(long)]
        pin: Option<usize>,

        /// Reference sequence length (defaults to the rightmost fragment end)
        #[arg(long)]
        length: Option<Position>,

        /// Signed ORF start; fragments are marked as in or out of its frame
        #[arg(long, allow_hyphen_values = true)]
        orf: Option<Position>,

        /// Print the placement as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the alignment panel for one HSP
    Align {
        /// JSON file with hits and their HSPs
        #[arg(short, long)]
        input: PathBuf,

        /// Title of the hit to show
        #[arg(long)]
        track: String,

        /// Index of the HSP within the hit
        #[arg(long, default_value = "0")]
        hsp: usize,

        /// Alignment columns per line
        #[arg(long)]
        line_length: Option<usize>,

        /// Print summary and blocks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Identity and gap statistics for two aligned sequences
    Stats {
        /// First gapped sequence
        #[arg(long)]
        first: String,

        /// Second gapped sequence
        #[arg(long)]
        second: String,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration helpers
    Config {
        /// Print a default configuration
        #[arg(long)]
        example: bool,

        /// Write the active configuration to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SortArg {
    None,
    ByName,
    ByLeftmost,
    ByLongest,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::None => SortMode::None,
            SortArg::ByName => SortMode::ByName,
            SortArg::ByLeftmost => SortMode::ByLeftmostStart,
            SortArg::ByLongest => SortMode::ByLongestFeature,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli, config: &Config) -> CliResult<()> {
    match cli.command {
        Commands::Layout {
            input,
            sort,
            pin,
            length,
            orf,
            json,
        } => commands::layout::execute(config, input, sort.map(SortMode::from), pin, length, orf, json),

        Commands::Align {
            input,
            track,
            hsp,
            line_length,
            json,
        } => commands::align::execute(config, input, track, hsp, line_length, json),

        Commands::Stats { first, second, json } => commands::stats::execute(first, second, json),

        Commands::Config { example, output } => {
            if let Some(path) = output {
                config
                    .save_to_file(&path)
                    .map_err(|e| error::CliError::config(format!("{:#}", e)))?;
                log::info!("Configuration written to {}", path.display());
            } else if example {
                let example = Config::example_toml().map_err(|e| error::CliError::config(format!("{:#}", e)))?;
                print!("{}", example);
            } else {
                print!("{}", toml::to_string_pretty(config)?);
            }
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref())?;

    if let Err(err) = run(cli, &config) {
        error::print_error_and_exit(&err);
    }

    Ok(())
}
