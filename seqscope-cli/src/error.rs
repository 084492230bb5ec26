//! Error handling for the seqscope CLI

use thiserror::Error;

/// Main error type for seqscope CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },
}

impl CliError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CliError::invalid_input("provide --seq or --fasta");
        assert!(err.to_string().contains("provide --seq or --fasta"));

        let err = CliError::validation("sequence cannot be empty");
        assert!(err.to_string().starts_with("Validation failed"));
    }
}
