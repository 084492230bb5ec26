//! Align command implementation - Smith-Waterman local alignment

use anyhow::Result;
use std::path::PathBuf;

use seqscope_core::{AlignParams, LocalAlignment, SmithWaterman};

use crate::commands::load_pair;
use crate::config::Config;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    config: &Config,
    query: Option<String>,
    target: Option<String>,
    fasta: Option<PathBuf>,
    match_score: Option<i32>,
    mismatch_penalty: Option<i32>,
    gap_penalty: Option<i32>,
    show_matrix: bool,
    json: bool,
) -> Result<()> {
    let (query, target) = load_pair(query, target, fasta.as_ref())?;

    let params = AlignParams {
        match_score: match_score.unwrap_or(config.align.match_score),
        mismatch_penalty: mismatch_penalty.unwrap_or(config.align.mismatch_penalty),
        gap_penalty: gap_penalty.unwrap_or(config.align.gap_penalty),
    };
    log::info!(
        "Aligning {} x {} bases (match={}, mismatch={}, gap={})",
        query.chars().count(),
        target.chars().count(),
        params.match_score,
        params.mismatch_penalty,
        params.gap_penalty
    );

    let aligner = SmithWaterman::new(params);

    if show_matrix {
        let matrix = aligner.score_matrix(&query, &target)?;
        for row in &matrix {
            let cells: Vec<String> = row.iter().map(|score| format!("{:>4}", score)).collect();
            println!("{}", cells.join(" "));
        }
        println!();
    }

    let alignment = aligner.align(&query, &target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&alignment)?);
        return Ok(());
    }

    print_alignment(&alignment);
    Ok(())
}

fn print_alignment(alignment: &LocalAlignment) {
    if alignment.alignment_length() == 0 {
        println!("no local alignment (score 0)");
        return;
    }

    println!(
        "query  {:>4}  {}",
        alignment.query_start, alignment.aligned_query
    );
    println!("             {}", midline(alignment));
    println!(
        "target {:>4}  {}",
        alignment.target_start, alignment.aligned_target
    );
    println!(
        "score {}  identity {:.1}%  ({} match, {} mismatch, {} gap)",
        alignment.score,
        alignment.identity(),
        alignment.matches,
        alignment.mismatches,
        alignment.gaps
    );
}

fn midline(alignment: &LocalAlignment) -> String {
    alignment
        .aligned_query
        .chars()
        .zip(alignment.aligned_target.chars())
        .map(|(q, t)| {
            if q == '-' || t == '-' {
                ' '
            } else if q == t {
                '|'
            } else {
                '.'
            }
        })
        .collect()
}
