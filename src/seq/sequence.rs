use crate::seq::Nucleotide;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Invalid character '{symbol}' at position {position}. Only A, T, C, G are allowed.")]
    InvalidNucleotide { symbol: char, position: usize },

    #[error("Unable to read sequence from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An immutable DNA sequence. Once constructed, every element is guaranteed to be one of
/// `{A, T, C, G}`.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct Seq(Vec<Nucleotide>);

impl Seq {
    /// Parses raw text into a `Seq`. Surrounding whitespace is removed and the text is
    /// upper-cased before validation, so positions in errors refer to the normalised text.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::InvalidNucleotide` for the first character outside of the
    /// alphabet.
    pub fn parse(raw: &str) -> Result<Self, SequenceError> {
        let normalised = raw.trim().to_uppercase();

        normalised
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Nucleotide::from_char(symbol)
                    .ok_or(SequenceError::InvalidNucleotide { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Seq)
    }

    /// Reads and validates a sequence from a text file.
    ///
    /// # Errors
    ///
    /// * `SequenceError::Io` if the file cannot be read.
    /// * `SequenceError::InvalidNucleotide` if the contents fail validation.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SequenceError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SequenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&raw)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.0.iter().copied()
    }
}

impl FromStr for Seq {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Seq::parse(s)
    }
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|n| write!(f, "{}", n))
    }
}
