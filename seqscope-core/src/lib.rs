//! Seqscope Core Library
//!
//! K-mer analysis, windowed dotplot generation, and Smith-Waterman local
//! alignment for seqscope.

pub mod align;
pub mod analyzer;
pub mod dotplot;
pub mod fasta;
pub mod types;

// Re-export commonly used types and functions
pub use align::{AlignError, AlignParams, LocalAlignment, SmithWaterman};
pub use analyzer::{KmerAnalyzer, DEFAULT_K};
pub use dotplot::{Dot, DotPlotError, DotPlotParams, DotPlotter};
pub use fasta::{read_fasta, FastaRecord};
pub use types::{Kmer, KmerStats, ValidationReport, DNA_ALPHABET};

/// Version information for the seqscope core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
