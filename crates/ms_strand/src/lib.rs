//! The ms_strand crate.
//!
//! Provides the strand model of molsat's molecular computer:
//!  - Nucleotides and sequences (`Base`, `BaseVec`)
//!  - Single and double strands with sticky ends (`Strand`)
//!  - Pairwise joins (annealing, extension, sticky-end ligation)
//!  - Probe detection
//!
//! Every stochastic operation takes an explicit random source, so
//! a seeded generator makes a simulation reproducible.
//!

mod error;
mod base;
mod probability;
mod strand;
mod join;
mod probe;

pub use error::*;
pub use base::*;
pub use probability::*;
pub use strand::*;
pub use join::*;
pub use probe::*;
