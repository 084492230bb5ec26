//! Windowed dotplot generation
//!
//! Compares every window of one sequence against every window of another
//! and emits a dot for each pair that agrees at enough positions. Window 1
//! with one required match is the classic identity dotplot; larger windows
//! filter noise the way sliding-window dotplot tools do.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during dotplot generation
#[derive(Debug, Error)]
pub enum DotPlotError {
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

pub type DotPlotResult<T> = Result<T, DotPlotError>;

/// Parameters for windowed dotplot comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DotPlotParams {
    /// Window length compared at each coordinate pair
    pub window: usize,
    /// Minimum matching positions within a window to emit a dot
    pub min_matches: usize,
}

impl Default for DotPlotParams {
    fn default() -> Self {
        Self {
            window: 1,
            min_matches: 1,
        }
    }
}

/// One plotted coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dot {
    /// Window start in the query sequence
    pub query_pos: usize,
    /// Window start in the target sequence
    pub target_pos: usize,
    /// Number of agreeing positions within the window
    pub matches: usize,
}

/// Dotplot generation engine
pub struct DotPlotter {
    params: DotPlotParams,
}

impl DotPlotter {
    pub fn new(params: DotPlotParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DotPlotParams {
        &self.params
    }

    /// Generate dots between query and target sequences.
    ///
    /// Both inputs are uppercased before comparison. Sequences shorter
    /// than the window produce no dots. Dots come back in row-major
    /// order: ascending query position, then ascending target position.
    pub fn generate_dots(&self, query: &str, target: &str) -> DotPlotResult<Vec<Dot>> {
        let window = self.params.window;
        let min_matches = self.params.min_matches;

        if window < 1 {
            return Err(DotPlotError::InvalidParams(
                "window must be at least 1".to_string(),
            ));
        }
        if min_matches < 1 || min_matches > window {
            return Err(DotPlotError::InvalidParams(format!(
                "min_matches must be between 1 and the window length {}",
                window
            )));
        }

        let query_chars: Vec<char> = query.to_uppercase().chars().collect();
        let target_chars: Vec<char> = target.to_uppercase().chars().collect();

        let mut dots = Vec::new();
        if query_chars.len() < window || target_chars.len() < window {
            return Ok(dots);
        }

        for query_pos in 0..=query_chars.len() - window {
            for target_pos in 0..=target_chars.len() - window {
                let matches = (0..window)
                    .filter(|&offset| {
                        query_chars[query_pos + offset] == target_chars[target_pos + offset]
                    })
                    .count();
                if matches >= min_matches {
                    dots.push(Dot {
                        query_pos,
                        target_pos,
                        matches,
                    });
                }
            }
        }

        log::debug!(
            "dotplot produced {} dots (window={}, min_matches={})",
            dots.len(),
            window,
            min_matches
        );
        Ok(dots)
    }
}

impl Default for DotPlotter {
    fn default() -> Self {
        Self::new(DotPlotParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_dotplot_contains_main_diagonal() {
        let plotter = DotPlotter::default();
        let dots = plotter.generate_dots("ATCG", "ATCG").unwrap();

        for i in 0..4 {
            assert!(dots.contains(&Dot {
                query_pos: i,
                target_pos: i,
                matches: 1
            }));
        }
    }

    #[test]
    fn test_identity_dotplot_single_base_matches() {
        let plotter = DotPlotter::default();
        let dots = plotter.generate_dots("AT", "TA").unwrap();

        // A matches A at (0,1), T matches T at (1,0)
        assert_eq!(dots.len(), 2);
        assert_eq!(dots[0], Dot { query_pos: 0, target_pos: 1, matches: 1 });
        assert_eq!(dots[1], Dot { query_pos: 1, target_pos: 0, matches: 1 });
    }

    #[test]
    fn test_windowed_comparison_filters_noise() {
        let params = DotPlotParams {
            window: 3,
            min_matches: 3,
        };
        let plotter = DotPlotter::new(params);
        let dots = plotter.generate_dots("ATCGA", "TTCGT").unwrap();

        // Only the TCG windows agree at all 3 positions
        assert_eq!(dots.len(), 1);
        assert_eq!(dots[0], Dot { query_pos: 1, target_pos: 1, matches: 3 });
    }

    #[test]
    fn test_case_insensitive_comparison() {
        let plotter = DotPlotter::default();
        let dots = plotter.generate_dots("a", "A").unwrap();
        assert_eq!(dots.len(), 1);
    }

    #[test]
    fn test_short_sequences_produce_no_dots() {
        let params = DotPlotParams {
            window: 5,
            min_matches: 3,
        };
        let plotter = DotPlotter::new(params);
        assert!(plotter.generate_dots("ATC", "ATCGATCG").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let zero_window = DotPlotter::new(DotPlotParams {
            window: 0,
            min_matches: 1,
        });
        assert!(zero_window.generate_dots("ATCG", "ATCG").is_err());

        let threshold_too_high = DotPlotter::new(DotPlotParams {
            window: 3,
            min_matches: 4,
        });
        assert!(threshold_too_high.generate_dots("ATCG", "ATCG").is_err());
    }
}
