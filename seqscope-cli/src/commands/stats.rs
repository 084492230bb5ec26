//! Stats command implementation - summary statistics over a k-mer set

use anyhow::Result;
use std::path::PathBuf;

use seqscope_core::KmerAnalyzer;

use crate::commands::load_sequence;
use crate::config::Config;

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
    for error in &report.errors {
        log::warn!("input check: {}", error);
    }

    let mut analyzer = KmerAnalyzer::new();
    analyzer.generate(&sequence, k);
    let stats = analyzer.statistics();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("total k-mers:      {}", stats.total_kmers);
    println!("distinct k-mers:   {}", stats.unique_kmers);
    println!("duplicates:        {}", stats.duplicate_kmers);
    println!("max frequency:     {}", stats.max_frequency);
    println!("most common:       {}", stats.most_common_kmers.join(", "));
    match stats.average_frequency {
        Some(avg) => println!("average frequency: {:.3}", avg),
        None => println!("average frequency: n/a"),
    }
    match stats.complexity_ratio {
        Some(ratio) => println!("complexity ratio:  {:.3}", ratio),
        None => println!("complexity ratio:  n/a"),
    }

    Ok(())
}
