//! The ms_tube crate.
//!
//! Provides the population-level operations of molsat's molecular
//! computer, each modelled after a lab procedure:
//!  - amplification (PCR)
//!  - hybridization (annealing and ligation)
//!  - size separation (gel electrophoresis)
//!  - probe separation (magnetic bead affinity)
//!

mod error;
mod size_range;
mod population;
mod hybridize;

pub use error::*;
pub use size_range::*;
pub use population::*;
pub use hybridize::*;
