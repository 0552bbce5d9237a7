use std::fmt;

use crate::TubeError;

/// A closed interval of strand sizes, as selected by a gel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    min: usize,
    max: usize,
}

impl SizeRange {
    pub fn new(min: usize, max: usize) -> Result<Self, TubeError> {
        if min > max {
            return Err(TubeError::InvalidSizeRange { min, max });
        }
        Ok(SizeRange { min, max })
    }

    pub fn exactly(size: usize) -> Self {
        SizeRange { min: size, max: size }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, size: usize) -> bool {
        self.min <= size && size <= self.max
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
