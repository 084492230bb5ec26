//! Minimal FASTA input reading
//!
//! Line-oriented parsing sized for teaching inputs; sequences are read
//! whole into memory. Only the first whitespace-delimited token of a
//! header is kept as the record id.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: String,
}

/// Read all records from a FASTA file.
///
/// Blank lines are skipped; sequence lines belonging to one record are
/// concatenated. Sequence data before the first header and files with no
/// records are errors.
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open FASTA file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for line in reader.lines() {
        let line =
            line.with_context(|| format!("failed to read FASTA file: {}", path.display()))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }
            let id = header
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string();
            current = Some(FastaRecord {
                id,
                sequence: String::new(),
            });
        } else {
            match current.as_mut() {
                Some(record) => record.sequence.push_str(line),
                None => {
                    return Err(anyhow!(
                        "sequence data before first header in {}",
                        path.display()
                    ))
                }
            }
        }
    }

    if let Some(record) = current.take() {
        records.push(record);
    }

    if records.is_empty() {
        return Err(anyhow!("no FASTA records found in {}", path.display()));
    }

    log::debug!("read {} FASTA records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fasta(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_two_records_with_wrapped_lines() {
        let file = write_fasta(">seq1 first sequence\nATCG\nATCG\n\n>seq2\nGGCC\n");
        let records = read_fasta(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].sequence, "ATCGATCG");
        assert_eq!(records[1].id, "seq2");
        assert_eq!(records[1].sequence, "GGCC");
    }

    #[test]
    fn test_empty_file_is_error() {
        let file = write_fasta("");
        assert!(read_fasta(file.path()).is_err());
    }

    #[test]
    fn test_data_before_header_is_error() {
        let file = write_fasta("ATCG\n>seq1\nATCG\n");
        assert!(read_fasta(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(read_fasta("/nonexistent/path.fa").is_err());
    }
}
