//! Smith-Waterman local alignment
//!
//! Full dynamic-programming implementation with traceback, sized for
//! teaching inputs. The scoring matrix is exposed so consumers can show
//! the table the algorithm filled in, not just the final alignment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during alignment
#[derive(Debug, Error)]
pub enum AlignError {
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

pub type AlignResult<T> = Result<T, AlignError>;

/// Scoring parameters: positive match reward, non-positive penalties,
/// linear gap cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignParams {
    pub match_score: i32,
    pub mismatch_penalty: i32,
    pub gap_penalty: i32,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            match_score: 2,
            mismatch_penalty: -1,
            gap_penalty: -2,
        }
    }
}

/// Result of a local alignment
///
/// Start offsets are zero-based; end offsets are exclusive, so
/// `query[query_start..query_end]` is the aligned region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalAlignment {
    pub score: i32,
    pub query_start: usize,
    pub query_end: usize,
    pub target_start: usize,
    pub target_end: usize,
    /// Aligned query with '-' at gap positions
    pub aligned_query: String,
    /// Aligned target with '-' at gap positions
    pub aligned_target: String,
    pub matches: u32,
    pub mismatches: u32,
    pub gaps: u32,
}

impl LocalAlignment {
    /// Identity over aligned columns, as a percentage
    pub fn identity(&self) -> f32 {
        let columns = self.matches + self.mismatches + self.gaps;
        if columns == 0 {
            return 0.0;
        }
        (self.matches as f32 / columns as f32) * 100.0
    }

    /// Number of aligned columns, gaps included
    pub fn alignment_length(&self) -> usize {
        self.aligned_query.chars().count()
    }
}

/// Smith-Waterman alignment engine
pub struct SmithWaterman {
    params: AlignParams,
}

impl SmithWaterman {
    pub fn new(params: AlignParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AlignParams {
        &self.params
    }

    fn validate(&self, query: &str, target: &str) -> AlignResult<()> {
        if query.is_empty() {
            return Err(AlignError::InvalidSequence(
                "query sequence is empty".to_string(),
            ));
        }
        if target.is_empty() {
            return Err(AlignError::InvalidSequence(
                "target sequence is empty".to_string(),
            ));
        }
        if self.params.match_score <= 0 {
            return Err(AlignError::InvalidParams(
                "match score must be positive".to_string(),
            ));
        }
        if self.params.mismatch_penalty > 0 || self.params.gap_penalty > 0 {
            return Err(AlignError::InvalidParams(
                "mismatch and gap penalties must not be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Fill the full (query+1) x (target+1) score matrix.
    ///
    /// Row 0 and column 0 are the zero boundary; cell [i][j] is the best
    /// local score ending at query base i-1 and target base j-1.
    pub fn score_matrix(&self, query: &str, target: &str) -> AlignResult<Vec<Vec<i32>>> {
        self.validate(query, target)?;
        let query_chars: Vec<char> = query.to_uppercase().chars().collect();
        let target_chars: Vec<char> = target.to_uppercase().chars().collect();
        Ok(self.fill_matrix(&query_chars, &target_chars))
    }

    fn fill_matrix(&self, query: &[char], target: &[char]) -> Vec<Vec<i32>> {
        let n = query.len();
        let m = target.len();
        let mut matrix = vec![vec![0i32; m + 1]; n + 1];

        for i in 1..=n {
            for j in 1..=m {
                let substitution = if query[i - 1] == target[j - 1] {
                    self.params.match_score
                } else {
                    self.params.mismatch_penalty
                };
                let diagonal = matrix[i - 1][j - 1] + substitution;
                let up = matrix[i - 1][j] + self.params.gap_penalty;
                let left = matrix[i][j - 1] + self.params.gap_penalty;
                matrix[i][j] = diagonal.max(up).max(left).max(0);
            }
        }

        matrix
    }

    /// Align query against target and trace back the best local alignment.
    ///
    /// Deterministic: the alignment ends at the first highest-scoring cell
    /// in row-major order, and traceback prefers diagonal over up over
    /// left on ties. A best score of zero (nothing aligns) comes back as
    /// an empty alignment at offset zero.
    pub fn align(&self, query: &str, target: &str) -> AlignResult<LocalAlignment> {
        self.validate(query, target)?;

        let query_chars: Vec<char> = query.to_uppercase().chars().collect();
        let target_chars: Vec<char> = target.to_uppercase().chars().collect();
        let matrix = self.fill_matrix(&query_chars, &target_chars);

        let mut best_score = 0;
        let mut best_i = 0;
        let mut best_j = 0;
        for (i, row) in matrix.iter().enumerate() {
            for (j, &score) in row.iter().enumerate() {
                if score > best_score {
                    best_score = score;
                    best_i = i;
                    best_j = j;
                }
            }
        }

        let mut aligned_query = Vec::new();
        let mut aligned_target = Vec::new();
        let mut matches = 0u32;
        let mut mismatches = 0u32;
        let mut gaps = 0u32;

        let mut i = best_i;
        let mut j = best_j;
        while i > 0 && j > 0 && matrix[i][j] > 0 {
            let substitution = if query_chars[i - 1] == target_chars[j - 1] {
                self.params.match_score
            } else {
                self.params.mismatch_penalty
            };

            if matrix[i][j] == matrix[i - 1][j - 1] + substitution {
                aligned_query.push(query_chars[i - 1]);
                aligned_target.push(target_chars[j - 1]);
                if query_chars[i - 1] == target_chars[j - 1] {
                    matches += 1;
                } else {
                    mismatches += 1;
                }
                i -= 1;
                j -= 1;
            } else if matrix[i][j] == matrix[i - 1][j] + self.params.gap_penalty {
                aligned_query.push(query_chars[i - 1]);
                aligned_target.push('-');
                gaps += 1;
                i -= 1;
            } else {
                aligned_query.push('-');
                aligned_target.push(target_chars[j - 1]);
                gaps += 1;
                j -= 1;
            }
        }

        aligned_query.reverse();
        aligned_target.reverse();

        log::debug!(
            "local alignment score {} over {} columns",
            best_score,
            aligned_query.len()
        );

        Ok(LocalAlignment {
            score: best_score,
            query_start: i,
            query_end: best_i,
            target_start: j,
            target_end: best_j,
            aligned_query: aligned_query.into_iter().collect(),
            aligned_target: aligned_target.into_iter().collect(),
            matches,
            mismatches,
            gaps,
        })
    }
}

impl Default for SmithWaterman {
    fn default() -> Self {
        Self::new(AlignParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_align_fully() {
        let aligner = SmithWaterman::default();
        let alignment = aligner.align("ACGT", "ACGT").unwrap();

        assert_eq!(alignment.score, 8);
        assert_eq!(alignment.aligned_query, "ACGT");
        assert_eq!(alignment.aligned_target, "ACGT");
        assert_eq!(alignment.matches, 4);
        assert_eq!(alignment.mismatches, 0);
        assert_eq!(alignment.gaps, 0);
        assert_eq!(alignment.query_start, 0);
        assert_eq!(alignment.query_end, 4);
        assert_eq!(alignment.identity(), 100.0);
    }

    #[test]
    fn test_textbook_alignment_with_gap() {
        // The classic worked example: match +3, mismatch -3, gap -2
        let aligner = SmithWaterman::new(AlignParams {
            match_score: 3,
            mismatch_penalty: -3,
            gap_penalty: -2,
        });
        let alignment = aligner.align("TGTTACGG", "GGTTGACTA").unwrap();

        assert_eq!(alignment.score, 13);
        assert_eq!(alignment.aligned_query, "GTT-AC");
        assert_eq!(alignment.aligned_target, "GTTGAC");
        assert_eq!(alignment.matches, 5);
        assert_eq!(alignment.mismatches, 0);
        assert_eq!(alignment.gaps, 1);
        assert_eq!(alignment.query_start, 1);
        assert_eq!(alignment.target_start, 1);
    }

    #[test]
    fn test_local_alignment_ignores_flanks() {
        let aligner = SmithWaterman::default();
        let alignment = aligner.align("TTTTACGTTTT", "CCCCACGCCCC").unwrap();

        assert_eq!(alignment.aligned_query, "ACG");
        assert_eq!(alignment.aligned_target, "ACG");
        assert_eq!(alignment.query_start, 4);
        assert_eq!(alignment.target_start, 4);
    }

    #[test]
    fn test_case_insensitive_alignment() {
        let aligner = SmithWaterman::default();
        let alignment = aligner.align("acgt", "ACGT").unwrap();
        assert_eq!(alignment.matches, 4);
    }

    #[test]
    fn test_nothing_aligns_gives_empty_alignment() {
        let aligner = SmithWaterman::default();
        let alignment = aligner.align("AAAA", "TTTT").unwrap();

        assert_eq!(alignment.score, 0);
        assert!(alignment.aligned_query.is_empty());
        assert_eq!(alignment.alignment_length(), 0);
        assert_eq!(alignment.identity(), 0.0);
    }

    #[test]
    fn test_score_matrix_dimensions_and_boundary() {
        let aligner = SmithWaterman::default();
        let matrix = aligner.score_matrix("ACG", "AC").unwrap();

        assert_eq!(matrix.len(), 4);
        assert_eq!(matrix[0].len(), 3);
        assert!(matrix[0].iter().all(|&score| score == 0));
        assert!(matrix.iter().all(|row| row[0] == 0));
        assert_eq!(matrix[1][1], 2); // A vs A
        assert_eq!(matrix[2][2], 4); // AC vs AC
    }

    #[test]
    fn test_empty_sequences_rejected() {
        let aligner = SmithWaterman::default();
        assert!(aligner.align("", "ACGT").is_err());
        assert!(aligner.align("ACGT", "").is_err());
    }

    #[test]
    fn test_invalid_scoring_rejected() {
        let aligner = SmithWaterman::new(AlignParams {
            match_score: 0,
            mismatch_penalty: -1,
            gap_penalty: -2,
        });
        assert!(aligner.align("ACGT", "ACGT").is_err());

        let aligner = SmithWaterman::new(AlignParams {
            match_score: 2,
            mismatch_penalty: 1,
            gap_penalty: -2,
        });
        assert!(aligner.align("ACGT", "ACGT").is_err());
    }
}
