//! Command implementations for the seqscope CLI

pub mod align;
pub mod dotplot;
pub mod kmers;
pub mod stats;
pub mod validate;

use anyhow::Result;
use std::path::PathBuf;

use crate::error::CliError;
use seqscope_core::read_fasta;

/// Resolve a single input sequence from `--seq` or the first record of
/// `--fasta`.
pub fn load_sequence(seq: Option<String>, fasta: Option<&PathBuf>) -> Result<String> {
    match (seq, fasta) {
        (Some(sequence), None) => Ok(sequence),
        (None, Some(path)) => {
            let records = read_fasta(path)?;
            if records.len() > 1 {
                log::warn!(
                    "{} contains {} records; using the first ({})",
                    path.display(),
                    records.len(),
                    records[0].id
                );
            }
            Ok(records.into_iter().next().map(|r| r.sequence).unwrap_or_default())
        }
        (Some(_), Some(_)) => {
            Err(CliError::invalid_input("use either --seq or --fasta, not both").into())
        }
        (None, None) => Err(CliError::invalid_input("provide a sequence with --seq or --fasta").into()),
    }
}

/// Resolve a query/target pair from `--query`/`--target` or the first two
/// records of `--fasta`.
pub fn load_pair(
    query: Option<String>,
    target: Option<String>,
    fasta: Option<&PathBuf>,
) -> Result<(String, String)> {
    match (query, target, fasta) {
        (Some(q), Some(t), None) => Ok((q, t)),
        (None, None, Some(path)) => {
            let mut records = read_fasta(path)?;
            if records.len() < 2 {
                return Err(CliError::invalid_input(format!(
                    "{} must contain at least two records",
                    path.display()
                ))
                .into());
            }
            let target = records.swap_remove(1).sequence;
            let query = records.swap_remove(0).sequence;
            Ok((query, target))
        }
        (None, None, None) => {
            Err(CliError::invalid_input("provide --query and --target, or --fasta").into())
        }
        _ => Err(CliError::invalid_input(
            "use either --query/--target or --fasta, not a mix",
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_sequence_prefers_inline() {
        let seq = load_sequence(Some("ATCG".to_string()), None).unwrap();
        assert_eq!(seq, "ATCG");
    }

    #[test]
    fn test_load_sequence_requires_exactly_one_source() {
        assert!(load_sequence(None, None).is_err());
    }

    #[test]
    fn test_load_pair_from_fasta() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">a\nATCG\n>b\nGGCC").unwrap();

        let (query, target) = load_pair(None, None, Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(query, "ATCG");
        assert_eq!(target, "GGCC");
    }

    #[test]
    fn test_load_pair_rejects_single_record_fasta() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">only\nATCG").unwrap();
        assert!(load_pair(None, None, Some(&file.path().to_path_buf())).is_err());
    }
}
