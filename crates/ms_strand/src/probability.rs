use std::fmt;
use rand::Rng;

use crate::StrandError;

/// Default chance that a single molecular event (a collision, a
/// probe binding) succeeds.
pub const SUCCESS_CHANCE: Probability = Probability(0.9);

/// A validated success probability in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    pub const ALWAYS: Probability = Probability(1.0);
    pub const NEVER: Probability = Probability(0.0);

    pub fn new(p: f64) -> Result<Self, StrandError> {
        if (0.0..=1.0).contains(&p) {
            Ok(Probability(p))
        } else {
            Err(StrandError::InvalidProbability(p))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Draw one Bernoulli trial.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.random_bool(self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = StrandError;

    fn try_from(p: f64) -> Result<Self, Self::Error> {
        Probability::new(p)
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_bounds() {
        assert!(Probability::new(0.0).is_ok());
        assert!(Probability::new(1.0).is_ok());
        assert_eq!(Probability::new(1.5), Err(StrandError::InvalidProbability(1.5)));
        assert!(Probability::new(-0.1).is_err());
        assert!(Probability::new(f64::NAN).is_err());
    }

    #[test]
    fn test_extremes_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(Probability::ALWAYS.sample(&mut rng));
            assert!(!Probability::NEVER.sample(&mut rng));
        }
    }
}
