use std::fmt;

/// Error type for strand construction and strand-level configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum StrandError {
    /// A character outside of the {A, C, G, T} alphabet.
    InvalidBase(char),

    /// The sequences do not form a legal single or double strand.
    InvalidStrand {
        primary: String,
        secondary: Option<String>,
        offset: isize,
    },

    /// A probability outside of [0, 1].
    InvalidProbability(f64),
}

impl fmt::Display for StrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrandError::InvalidBase(c) => 
                write!(f, "Invalid nucleotide '{c}' (expected one of A, C, G, T)."),
            StrandError::InvalidStrand { primary, secondary: None, .. } => 
                write!(f, "Invalid single strand '{primary}'."),
            StrandError::InvalidStrand { primary, secondary: Some(s), offset } => 
                write!(f, "Invalid double strand '{primary}' / '{s}' at offset {offset}."),
            StrandError::InvalidProbability(p) => 
                write!(f, "Probability {p} is outside of [0, 1]."),
        }
    }
}

impl std::error::Error for StrandError {}
