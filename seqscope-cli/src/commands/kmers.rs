//! Kmers command implementation - enumerate windows and print them

use anyhow::Result;
use std::path::PathBuf;

use seqscope_core::{Kmer, KmerAnalyzer};

use crate::commands::load_sequence;
use crate::config::Config;
use crate::SortOrder;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    config: &Config,
    seq: Option<String>,
    fasta: Option<PathBuf>,
    k: Option<usize>,
    frequencies: bool,
    unique: bool,
    sort: SortOrder,
    json: bool,
) -> Result<()> {
    let sequence = load_sequence(seq, fasta.as_ref())?;
    let k = k.unwrap_or(config.general.k);

    let report = KmerAnalyzer::validate_parameters(&sequence, k);
    for error in &report.errors {
        log::warn!("input check: {}", error);
    }

    let mut analyzer = KmerAnalyzer::new();
    analyzer.generate(&sequence, k);
    log::info!("Generated {} k-mers with k={}", analyzer.kmers().len(), k);

    let mut kmers: Vec<Kmer> = if unique {
        analyzer.unique_kmers()
    } else if frequencies {
        analyzer.with_frequency_metadata()
    } else {
        match sort {
            SortOrder::Position => analyzer.by_position(),
            SortOrder::Sequence => analyzer.by_sequence(),
        }
    };

    if unique || frequencies {
        if let SortOrder::Sequence = sort {
            kmers.sort_by(|a, b| a.sequence.cmp(&b.sequence));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&kmers)?);
        return Ok(());
    }

    if kmers.is_empty() {
        println!("no k-mers (sequence shorter than k)");
        return Ok(());
    }

    let has_metadata = kmers.first().map_or(false, |kmer| kmer.frequency.is_some());
    if has_metadata {
        println!("{:<8} {:<8} {:<12} {:<6} UNIQUE", "START", "END", "KMER", "FREQ");
    } else {
        println!("{:<8} {:<8} KMER", "START", "END");
    }
    for kmer in &kmers {
        match (kmer.frequency, kmer.is_unique) {
            (Some(freq), Some(is_unique)) => println!(
                "{:<8} {:<8} {:<12} {:<6} {}",
                kmer.position, kmer.end_position, kmer.sequence, freq, is_unique
            ),
            _ => println!(
                "{:<8} {:<8} {}",
                kmer.position, kmer.end_position, kmer.sequence
            ),
        }
    }

    Ok(())
}
