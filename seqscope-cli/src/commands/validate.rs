//! Validate command implementation - pre-flight input checking

use anyhow::Result;
use std::path::PathBuf;

use seqscope_core::KmerAnalyzer;

use crate::commands::load_sequence;
use crate::config::Config;
use crate::error::CliError;

pub fn execute(
    config: &Config,
    seq: Option<String>,
    fasta: Option<PathBuf>,
    k: Option<usize>,
    json: bool,
) -> Result<()> {
    let sequence = load_sequence(seq, fasta.as_ref())?;
    let k = k.unwrap_or(config.general.k);

    let report = KmerAnalyzer::validate_parameters(&sequence, k);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_valid {
        println!("ok: sequence of {} bases, k={}", sequence.chars().count(), k);
    } else {
        for error in &report.errors {
            println!("error: {}", error);
        }
    }

    if report.is_valid {
        Ok(())
    } else {
        Err(CliError::validation(report.errors.join("; ")).into())
    }
}
