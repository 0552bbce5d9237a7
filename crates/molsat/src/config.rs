//! Solver configuration.
//!
//! `SolverConfig` is the user-facing, serializable form (a JSON file
//! and/or command line flags). `SolverConfig::validate` turns it into
//! typed `Parameters`, so that every invalid value is rejected
//! before any simulation starts.
//!

use std::fs;
use std::path::Path;
use serde::Deserialize;
use serde::Serialize;

use ms_strand::Detection;
use ms_strand::Probability;
use ms_tube::Hybridization;

use crate::SolverError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Length of every node and literal sequence.
    pub node_length: usize,
    /// PCR rounds of the first amplification (the second uses half).
    pub pcr_rounds: usize,
    /// Chance that PCR copies a strand in one round.
    pub p_copy: f64,
    /// Chance that two colliding strands actually join.
    pub p_join: f64,
    /// Chance that a probe binds to a strand carrying its target.
    pub p_detect: f64,
    /// Use error-free probes (ignores `p_detect`).
    pub exact_detection: bool,
    /// Consecutive quiet passes that end a hybridization.
    pub window: usize,
    /// Hard cap on hybridization passes.
    pub max_passes: usize,
    /// Seed of the random source. Random if absent.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            node_length: 20,
            pcr_rounds: 10,
            p_copy: 0.95,
            p_join: 0.9,
            p_detect: 0.9,
            exact_detection: false,
            window: 10,
            max_passes: 10_000,
            seed: None,
        }
    }
}

/// Validated solver parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub node_length: usize,
    pub pcr_rounds: usize,
    pub copy: Probability,
    pub hybridization: Hybridization,
    pub detection: Detection,
}

impl SolverConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, SolverError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn validate(&self) -> Result<Parameters, SolverError> {
        let detection = if self.exact_detection {
            Detection::Exact
        } else {
            Detection::Stochastic { success: Probability::new(self.p_detect)? }
        };
        let hybridization = Hybridization::new(
            Probability::new(self.p_join)?, 
            self.window, 
            self.max_passes
        )?;
        Ok(Parameters {
            node_length: self.node_length,
            pcr_rounds: self.pcr_rounds,
            copy: Probability::new(self.p_copy)?,
            hybridization,
            detection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_strand::StrandError;
    use ms_tube::TubeError;

    #[test]
    fn test_defaults_are_valid() {
        let params = SolverConfig::default().validate().unwrap();
        assert_eq!(params.node_length, 20);
        assert_eq!(params.hybridization.window(), 10);
        assert_eq!(
            params.detection, 
            Detection::Stochastic { success: Probability::new(0.9).unwrap() }
        );
    }

    #[test]
    fn test_partial_json() {
        let cfg: SolverConfig = serde_json::from_str(
            r#"{ "pcr_rounds": 6, "exact_detection": true, "seed": 42 }"#
        ).unwrap();
        assert_eq!(cfg.pcr_rounds, 6);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.node_length, 20);
        assert_eq!(cfg.validate().unwrap().detection, Detection::Exact);
        assert!(serde_json::from_str::<SolverConfig>(r#"{ "rounds": 6 }"#).is_err());
    }

    #[test]
    fn test_invalid_values() {
        let cfg = SolverConfig { p_copy: 1.2, ..Default::default() };
        assert!(matches!(
            cfg.validate(), 
            Err(SolverError::Strand(StrandError::InvalidProbability(_)))
        ));
        let cfg = SolverConfig { window: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(SolverError::Tube(TubeError::InvalidWindow))));
        // Ignored with exact detection.
        let cfg = SolverConfig { p_detect: 7.0, exact_detection: true, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let r = SolverConfig::from_json_file(Path::new("/nonexistent/molsat.json"));
        assert!(matches!(r, Err(SolverError::Io(_))));
    }
}
