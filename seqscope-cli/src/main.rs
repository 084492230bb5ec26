use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::Config;

#[derive(Parser)]
#[command(name = "seqscope")]
#[command(about = "Seqscope - DNA sequence exploration toolkit")]
#[command(version)]
#[command(long_about = "
Seqscope is a small toolkit for exploring DNA sequences: k-mer
enumeration and statistics, windowed dotplots, and Smith-Waterman local
alignment.

Examples:
  seqscope kmers --seq ATCGATCG -k 3 --frequencies
  seqscope stats --fasta genome.fa -k 4 --json
  seqscope validate --seq ATCGX -k 3
  seqscope dotplot --query ATCGA --target TTCGT --window 3 --min-matches 3
  seqscope align --fasta pair.fa --matrix
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (defaults to ./seqscope.toml when present)
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
    /// Enumerate overlapping k-mers of a sequence
    Kmers {
        /// Inline input sequence
        #[arg(long)]
        seq: Option<String>,

        /// FASTA file input (first record is used)
        #[arg(long)]
        fasta: Option<PathBuf>,

        /// K-mer length
        #[arg(short)]
        k: Option<usize>,

        /// Include per-k-mer frequency and uniqueness columns
        #[arg(long)]
        frequencies: bool,

        /// Only the first occurrence of each distinct k-mer
        #[arg(long)]
        unique: bool,

        /// Output order
        #[arg(long, value_enum, default_value = "position")]
        sort: SortOrder,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summary statistics over the k-mer set of a sequence
    Stats {
        /// Inline input sequence
        #[arg(long)]
        seq: Option<String>,

        /// FASTA file input (first record is used)
        #[arg(long)]
        fasta: Option<PathBuf>,

        /// K-mer length
        #[arg(short)]
        k: Option<usize>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check a sequence and k-mer length before analysis
    Validate {
        /// Inline input sequence
        #[arg(long)]
        seq: Option<String>,

        /// FASTA file input (first record is used)
        #[arg(long)]
        fasta: Option<PathBuf>,

        /// K-mer length
        #[arg(short)]
        k: Option<usize>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Windowed dotplot comparison of two sequences
    Dotplot {
        /// Inline query sequence
        #[arg(long)]
        query: Option<String>,

        /// Inline target sequence
        #[arg(long)]
        target: Option<String>,

        /// FASTA file input (first two records are used)
        #[arg(long)]
        fasta: Option<PathBuf>,

        /// Comparison window length
        #[arg(short, long)]
        window: Option<usize>,

        /// Matches required within a window to emit a dot
        #[arg(long)]
        min_matches: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Smith-Waterman local alignment of two sequences
    Align {
        /// Inline query sequence
        #[arg(long)]
        query: Option<String>,

        /// Inline target sequence
        #[arg(long)]
        target: Option<String>,

        /// FASTA file input (first two records are used)
        #[arg(long)]
        fasta: Option<PathBuf>,

        /// Match score (positive)
        #[arg(long)]
        match_score: Option<i32>,

        /// Mismatch penalty (non-positive)
        #[arg(long)]
        mismatch_penalty: Option<i32>,

        /// Linear gap penalty (non-positive)
        #[arg(long)]
        gap_penalty: Option<i32>,

        /// Print the full scoring matrix before the alignment
        #[arg(long)]
        matrix: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SortOrder {
    Position,
    Sequence,
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

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Kmers {
            seq,
            fasta,
            k,
            frequencies,
            unique,
            sort,
            json,
        } => {
            commands::kmers::execute(&config, seq, fasta, k, frequencies, unique, sort, json)?;
        }

        Commands::Stats { seq, fasta, k, json } => {
            commands::stats::execute(&config, seq, fasta, k, json)?;
        }

        Commands::Validate { seq, fasta, k, json } => {
            commands::validate::execute(&config, seq, fasta, k, json)?;
        }

        Commands::Dotplot {
            query,
            target,
            fasta,
            window,
            min_matches,
            json,
        } => {
            commands::dotplot::execute(&config, query, target, fasta, window, min_matches, json)?;
        }

        Commands::Align {
            query,
            target,
            fasta,
            match_score,
            mismatch_penalty,
            gap_penalty,
            matrix,
            json,
        } => {
            commands::align::execute(
                &config,
                query,
                target,
                fasta,
                match_score,
                mismatch_penalty,
                gap_penalty,
                matrix,
                json,
            )?;
        }
    }

    Ok(())
}
