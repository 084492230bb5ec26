use serde::{Deserialize, Serialize};

/// Zero-based offset into a sequence
pub type SeqPos = usize;

/// The accepted nucleotide alphabet (uppercase; N is the ambiguity code)
pub const DNA_ALPHABET: [char; 5] = ['A', 'C', 'G', 'T', 'N'];

/// A fixed-length window extracted from a sequence at a known offset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kmer {
    /// The k-mer string, uppercase, exactly k characters
    pub sequence: String,
    /// Zero-based start offset in the source sequence
    pub position: SeqPos,
    /// Inclusive end offset: position + k - 1
    pub end_position: SeqPos,
    /// Occurrence count across the generated set, filled on demand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
    /// True iff this k-mer string occurs exactly once, filled on demand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unique: Option<bool>,
}

impl Kmer {
    /// Build a k-mer from an already-normalized window string.
    /// The sequence must be non-empty.
    pub fn new(sequence: String, position: SeqPos) -> Self {
        let end_position = position + sequence.chars().count() - 1;
        Self {
            sequence,
            position,
            end_position,
            frequency: None,
            is_unique: None,
        }
    }

    /// Window length k
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// True if the inclusive interval [position, end_position] covers the offset
    pub fn spans(&self, offset: SeqPos) -> bool {
        offset >= self.position && offset <= self.end_position
    }

    /// Case-insensitive single-character membership test
    pub fn contains_base(&self, base: char) -> bool {
        self.sequence.contains(base.to_ascii_uppercase())
    }
}

/// Outcome of parameter validation: all applicable errors, not just the first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Summary statistics over a generated k-mer set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KmerStats {
    /// Total k-mers generated
    pub total_kmers: usize,
    /// Count of distinct k-mer strings
    pub unique_kmers: usize,
    /// total_kmers - unique_kmers
    pub duplicate_kmers: usize,
    /// Highest occurrence count among distinct k-mer strings
    pub max_frequency: u32,
    /// All distinct strings at max_frequency, sorted lexicographically
    pub most_common_kmers: Vec<String>,
    /// total_kmers / unique_kmers; None when the set is empty
    pub average_frequency: Option<f64>,
    /// unique_kmers / total_kmers, lower means more repetitive; None when empty
    pub complexity_ratio: Option<f64>,
}

impl KmerStats {
    /// Statistics for the empty state. Ratios are None rather than NaN.
    pub fn empty() -> Self {
        Self {
            total_kmers: 0,
            unique_kmers: 0,
            duplicate_kmers: 0,
            max_frequency: 0,
            most_common_kmers: Vec::new(),
            average_frequency: None,
            complexity_ratio: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kmer_interval() {
        let kmer = Kmer::new("ATC".to_string(), 4);
        assert_eq!(kmer.len(), 3);
        assert_eq!(kmer.end_position, 6);
        assert!(kmer.spans(4));
        assert!(kmer.spans(6));
        assert!(!kmer.spans(3));
        assert!(!kmer.spans(7));
    }

    #[test]
    fn test_contains_base_is_case_insensitive() {
        let kmer = Kmer::new("ATC".to_string(), 0);
        assert!(kmer.contains_base('t'));
        assert!(kmer.contains_base('T'));
        assert!(!kmer.contains_base('g'));
    }

    #[test]
    fn test_validation_report_from_errors() {
        let ok = ValidationReport::from_errors(Vec::new());
        assert!(ok.is_valid);

        let bad = ValidationReport::from_errors(vec!["sequence cannot be empty".to_string()]);
        assert!(!bad.is_valid);
        assert_eq!(bad.errors.len(), 1);
    }

    #[test]
    fn test_empty_stats_have_no_ratios() {
        let stats = KmerStats::empty();
        assert_eq!(stats.total_kmers, 0);
        assert!(stats.average_frequency.is_none());
        assert!(stats.complexity_ratio.is_none());
    }
}
