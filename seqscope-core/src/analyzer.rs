//! K-mer generation and analysis
//!
//! This module provides windowed k-mer enumeration over a DNA sequence,
//! with frequency statistics and position-based queries. It is the
//! computational core behind the k-mer exploration views; callers handle
//! presentation and collect user input.

use std::collections::{HashMap, HashSet};

use crate::types::{Kmer, KmerStats, SeqPos, ValidationReport, DNA_ALPHABET};

/// Default window length used after construction or `clear`
pub const DEFAULT_K: usize = 3;

/// K-mer analysis engine
///
/// Holds one generated set at a time: the current sequence, the current
/// window length, and the k-mers produced from them. `generate` replaces
/// the set wholesale; queries never hand out mutable access to it.
#[derive(Debug, Clone)]
pub struct KmerAnalyzer {
    sequence: String,
    k: usize,
    kmers: Vec<Kmer>,
}

impl KmerAnalyzer {
    pub fn new() -> Self {
        Self {
            sequence: String::new(),
            k: DEFAULT_K,
            kmers: Vec::new(),
        }
    }

    /// The stored sequence (uppercase-normalized by the last `generate`)
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// The stored window length
    pub fn k(&self) -> usize {
        self.k
    }

    /// Read-only view of the stored k-mer collection, in generation order
    pub fn kmers(&self) -> &[Kmer] {
        &self.kmers
    }

    /// True when no k-mers are stored (initial state, post-clear, or no fit)
    pub fn is_empty(&self) -> bool {
        self.kmers.is_empty()
    }

    /// Enumerate all overlapping windows of length `k` and store them.
    ///
    /// The sequence is uppercased before slicing so k-mer identity is
    /// case-insensitive. A sequence shorter than `k` (or `k == 0`) is the
    /// "no windows fit" case and stores an empty collection; it is not an
    /// error. Characters outside the alphabet are accepted here; use
    /// `validate_parameters` to pre-check input.
    pub fn generate(&mut self, sequence: &str, k: usize) -> &[Kmer] {
        let normalized = sequence.to_uppercase();
        let chars: Vec<char> = normalized.chars().collect();

        let mut kmers = Vec::new();
        if k >= 1 && chars.len() >= k {
            kmers.reserve(chars.len() - k + 1);
            for start in 0..=chars.len() - k {
                let window: String = chars[start..start + k].iter().collect();
                kmers.push(Kmer::new(window, start));
            }
        }

        log::debug!(
            "generated {} k-mers (k={}) from {} bases",
            kmers.len(),
            k,
            chars.len()
        );

        self.sequence = normalized;
        self.k = k;
        self.kmers = kmers;
        &self.kmers
    }

    /// The stored collection with `frequency` and `is_unique` filled in.
    ///
    /// Same order and length as `kmers()`; the stored state is not touched,
    /// so repeated calls stay consistent with the latest `generate`.
    pub fn with_frequency_metadata(&self) -> Vec<Kmer> {
        let counts = self.frequencies();
        self.kmers
            .iter()
            .cloned()
            .map(|mut kmer| {
                let freq = counts.get(&kmer.sequence).copied().unwrap_or(0);
                kmer.frequency = Some(freq);
                kmer.is_unique = Some(freq == 1);
                kmer
            })
            .collect()
    }

    /// First occurrence of each distinct k-mer string, in first-seen order
    pub fn unique_kmers(&self) -> Vec<Kmer> {
        let mut seen = HashSet::new();
        self.kmers
            .iter()
            .filter(|kmer| seen.insert(kmer.sequence.as_str()))
            .cloned()
            .collect()
    }

    /// Total occurrence count per distinct k-mer string
    pub fn frequencies(&self) -> HashMap<String, u32> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for kmer in &self.kmers {
            *counts.entry(kmer.sequence.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Stored collection sorted ascending by position.
    ///
    /// Generation order already satisfies this; the sort guards callers
    /// that reorder a copy elsewhere.
    pub fn by_position(&self) -> Vec<Kmer> {
        let mut kmers = self.kmers.clone();
        kmers.sort_by_key(|kmer| kmer.position);
        kmers
    }

    /// Stored collection sorted lexicographically by k-mer string.
    /// Equal strings keep their relative generation order.
    pub fn by_sequence(&self) -> Vec<Kmer> {
        let mut kmers = self.kmers.clone();
        kmers.sort_by(|a, b| a.sequence.cmp(&b.sequence));
        kmers
    }

    /// K-mers whose string contains the given character, case-insensitive,
    /// in stored order
    pub fn containing(&self, base: char) -> Vec<Kmer> {
        self.kmers
            .iter()
            .filter(|kmer| kmer.contains_base(base))
            .cloned()
            .collect()
    }

    /// The k-mer starting at exactly the given offset, if any
    pub fn at_position(&self, position: SeqPos) -> Option<&Kmer> {
        self.kmers.iter().find(|kmer| kmer.position == position)
    }

    /// All k-mers whose inclusive interval covers the given offset,
    /// in stored order
    pub fn overlapping(&self, position: SeqPos) -> Vec<Kmer> {
        self.kmers
            .iter()
            .filter(|kmer| kmer.spans(position))
            .cloned()
            .collect()
    }

    /// Pure input validation; accumulates every applicable error.
    ///
    /// Checks, in order: empty sequence, `k < 1`, sequence shorter than
    /// `k` (non-empty sequences only), and characters outside
    /// `{A, C, G, T, N}` (one error listing the offending characters).
    pub fn validate_parameters(sequence: &str, k: usize) -> ValidationReport {
        let mut errors = Vec::new();

        if sequence.is_empty() {
            errors.push("sequence cannot be empty".to_string());
        }

        if k < 1 {
            errors.push("k-mer length must be at least 1".to_string());
        }

        let n = sequence.chars().count();
        if !sequence.is_empty() && n < k {
            errors.push(format!(
                "sequence length {} is shorter than k-mer length {}",
                n, k
            ));
        }

        let mut invalid: Vec<char> = sequence
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| !DNA_ALPHABET.contains(c))
            .collect();
        invalid.sort_unstable();
        invalid.dedup();
        if !invalid.is_empty() {
            let listed: String = invalid.iter().collect();
            errors.push(format!(
                "sequence contains characters outside A/C/G/T/N: {}",
                listed
            ));
        }

        ValidationReport::from_errors(errors)
    }

    /// Summary statistics over the raw stored collection.
    ///
    /// On the empty state every count is zero and the two ratios are
    /// `None`; division by a zero distinct-count never happens.
    /// `most_common_kmers` is sorted lexicographically so tied maxima
    /// come back in a deterministic order.
    pub fn statistics(&self) -> KmerStats {
        let counts = self.frequencies();
        let total_kmers = self.kmers.len();
        let unique_kmers = counts.len();

        if total_kmers == 0 {
            return KmerStats::empty();
        }

        let max_frequency = counts.values().copied().max().unwrap_or(0);
        let mut most_common_kmers: Vec<String> = counts
            .iter()
            .filter(|(_, &count)| count == max_frequency)
            .map(|(kmer, _)| kmer.clone())
            .collect();
        most_common_kmers.sort_unstable();

        KmerStats {
            total_kmers,
            unique_kmers,
            duplicate_kmers: total_kmers - unique_kmers,
            max_frequency,
            most_common_kmers,
            average_frequency: Some(total_kmers as f64 / unique_kmers as f64),
            complexity_ratio: Some(unique_kmers as f64 / total_kmers as f64),
        }
    }

    /// Reset to the empty state: no sequence, default window length,
    /// no k-mers
    pub fn clear(&mut self) {
        self.sequence.clear();
        self.k = DEFAULT_K;
        self.kmers.clear();
    }
}

impl Default for KmerAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
