//! Nucleotides and nucleotide sequences.
//!
//! All sequences are stored 5' to 3' unless a function states
//! otherwise. The one exception is the secondary sequence of a
//! `Strand`, which is stored position-aligned to its primary
//! (i.e. 3' to 5').
//!

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use rand::Rng;

use crate::StrandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::A, Base::T, Base::G, Base::C];

    /// The Watson-Crick partner.
    pub fn complement(self) -> Base {
        match self {
            Base::A => Base::T,
            Base::T => Base::A,
            Base::C => Base::G,
            Base::G => Base::C,
        }
    }

    pub fn pairs_with(self, other: Base) -> bool {
        self.complement() == other
    }
}

impl TryFrom<char> for Base {
    type Error = StrandError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' | 'a' => Ok(Base::A),
            'C' | 'c' => Ok(Base::C),
            'G' | 'g' => Ok(Base::G),
            'T' | 't' => Ok(Base::T),
            _ => Err(StrandError::InvalidBase(c)),
        }
    }
}

impl From<Base> for char {
    fn from(b: Base) -> Self {
        match b {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// An owned nucleotide sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BaseVec(pub Vec<Base>);

impl BaseVec {
    /// A uniformly random sequence of the given length.
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        (0..length)
            .map(|_| Base::ALL[rng.random_range(0..Base::ALL.len())])
            .collect()
    }

    pub fn concat(&self, other: &[Base]) -> BaseVec {
        let mut v = Vec::with_capacity(self.len() + other.len());
        v.extend_from_slice(self);
        v.extend_from_slice(other);
        BaseVec(v)
    }
}

impl Deref for BaseVec {
    type Target = [Base];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Base>> for BaseVec {
    fn from(v: Vec<Base>) -> Self {
        BaseVec(v)
    }
}

impl From<&[Base]> for BaseVec {
    fn from(s: &[Base]) -> Self {
        BaseVec(s.to_vec())
    }
}

impl FromIterator<Base> for BaseVec {
    fn from_iter<I: IntoIterator<Item = Base>>(iter: I) -> Self {
        BaseVec(iter.into_iter().collect())
    }
}

impl TryFrom<&str> for BaseVec {
    type Error = StrandError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars().map(Base::try_from).collect()
    }
}

impl FromStr for BaseVec {
    type Err = StrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaseVec::try_from(s)
    }
}

impl fmt::Display for BaseVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.iter() {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

/// The sequence read in the opposite direction.
pub fn reverse(seq: &[Base]) -> BaseVec {
    seq.iter().rev().copied().collect()
}

/// The Watson-Crick complement of a 5'-3' sequence, again read 5' to 3'.
pub fn complement(seq: &[Base]) -> BaseVec {
    seq.iter().rev().map(|b| b.complement()).collect()
}

/// Position of the first occurrence of `needle` in `haystack`.
/// An empty needle is found at position 0.
pub fn find(haystack: &[Base], needle: &[Base]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
