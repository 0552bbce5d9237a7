//! # molsat
//!
//! Solve Boolean satisfiability in a simulated test tube, following
//! Adleman's molecular computing approach.
//!
//! This crate re-exports the core simulation crates and provides
//! the protocol that drives them:
//!  - `strand`: the strand model and pairwise joins (`ms_strand`)
//!  - `tube`: population-level lab operations (`ms_tube`)
//!  - CNF input, the random sequence encoding, decoding and the solver.
//!

pub mod strand {
    pub use ::ms_strand::*;
}

pub mod tube {
    pub use ::ms_tube::*;
}

mod error;
mod cnf;
mod encoding;
mod config;
mod solver;

pub use error::*;
pub use cnf::*;
pub use encoding::*;
pub use config::*;
pub use solver::*;
