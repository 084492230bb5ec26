//! Dotplot command implementation - windowed comparison of two sequences

use anyhow::Result;
use std::path::PathBuf;

use seqscope_core::{DotPlotParams, DotPlotter};

use crate::commands::load_pair;
use crate::config::Config;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    config: &Config,
    query: Option<String>,
    target: Option<String>,
    fasta: Option<PathBuf>,
    window: Option<usize>,
    min_matches: Option<usize>,
    json: bool,
) -> Result<()> {
    let (query, target) = load_pair(query, target, fasta.as_ref())?;

    let params = DotPlotParams {
        window: window.unwrap_or(config.dotplot.window),
        min_matches: min_matches.unwrap_or(config.dotplot.min_matches),
    };
    log::info!(
        "Comparing {} x {} bases (window={}, min_matches={})",
        query.chars().count(),
        target.chars().count(),
        params.window,
        params.min_matches
    );

    let plotter = DotPlotter::new(params);
    let dots = plotter.generate_dots(&query, &target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dots)?);
        return Ok(());
    }

    println!("{} dots", dots.len());
    println!("{:<10} {:<10} MATCHES", "QUERY", "TARGET");
    for dot in &dots {
        println!("{:<10} {:<10} {}", dot.query_pos, dot.target_pos, dot.matches);
    }

    Ok(())
}
