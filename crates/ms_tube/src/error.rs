use std::fmt;
use ms_strand::StrandError;

/// Error type for test tube configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum TubeError {
    /// The lower bound of a size range exceeds the upper bound.
    InvalidSizeRange { min: usize, max: usize },

    /// The convergence window must cover at least one pass.
    InvalidWindow,

    /// The pass cap must leave room for a full convergence window.
    InvalidPassCap { window: usize, max_passes: usize },

    /// The quiet fraction must be in [0, 1).
    InvalidQuietFraction(f64),

    /// A strand-level configuration error.
    Strand(StrandError),
}

impl fmt::Display for TubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TubeError::InvalidSizeRange { min, max } => 
                write!(f, "Invalid size range [{min}, {max}]."),
            TubeError::InvalidWindow => 
                write!(f, "Convergence window must be at least one pass."),
            TubeError::InvalidPassCap { window, max_passes } => 
                write!(f, "Pass cap {max_passes} is smaller than the convergence window {window}."),
            TubeError::InvalidQuietFraction(q) => 
                write!(f, "Quiet fraction {q} is outside of [0, 1)."),
            TubeError::Strand(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TubeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TubeError::Strand(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StrandError> for TubeError {
    fn from(e: StrandError) -> Self {
        TubeError::Strand(e)
    }
}
