//! Hybridization: randomized pairwise joining until the tube settles.
//!
//! Each pass shuffles the tube (Brownian mixing) and then walks it
//! left to right, trying to join every strand with its right
//! neighbor. A successful join consumes both strands, a failed one
//! leaves the right neighbor to be tried against the next strand.
//!
//! The process stops once `window` consecutive passes were quiet
//! (at most `quiet_fraction` of the tube joined), or after
//! `max_passes` passes.
//!

use log::debug;
use log::trace;
use log::warn;
use rand::Rng;
use rand::seq::SliceRandom;

use ms_strand::Probability;
use ms_strand::SUCCESS_CHANCE;
use ms_strand::Strand;

use crate::Population;
use crate::TubeError;

/// Parameters of the hybridization process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hybridization {
    chance: Probability,
    window: usize,
    max_passes: usize,
    quiet_fraction: f64,
}

impl Default for Hybridization {
    fn default() -> Self {
        Hybridization {
            chance: SUCCESS_CHANCE,
            window: 10,
            max_passes: 10_000,
            quiet_fraction: 0.0,
        }
    }
}

impl Hybridization {
    pub fn new(chance: Probability, window: usize, max_passes: usize) -> Result<Self, TubeError> {
        if window == 0 {
            return Err(TubeError::InvalidWindow);
        }
        if max_passes < window {
            return Err(TubeError::InvalidPassCap { window, max_passes });
        }
        Ok(Hybridization { chance, window, max_passes, quiet_fraction: 0.0 })
    }

    /// Count a pass as quiet if at most this fraction of the tube joined.
    pub fn with_quiet_fraction(self, quiet_fraction: f64) -> Result<Self, TubeError> {
        if !(0.0..1.0).contains(&quiet_fraction) {
            return Err(TubeError::InvalidQuietFraction(quiet_fraction));
        }
        Ok(Hybridization { quiet_fraction, ..self })
    }

    pub fn chance(&self) -> Probability {
        self.chance
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    pub fn quiet_fraction(&self) -> f64 {
        self.quiet_fraction
    }
}

/// What a call to `Population::hybridize` did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HybridizationReport {
    pub passes: usize,
    pub joins: usize,
    /// False if the pass cap was hit before the tube settled.
    pub converged: bool,
}

impl Population {
    pub fn hybridize<R: Rng + ?Sized>(
        &mut self, 
        config: &Hybridization, 
        rng: &mut R
    ) -> HybridizationReport {
        let before = self.len();
        let mut report = HybridizationReport::default();
        let mut quiet_streak = 0;

        while report.passes < config.max_passes {
            let size = self.len();
            let joins = self.hybridization_pass(config.chance, rng);
            report.passes += 1;
            report.joins += joins;
            trace!("hybridization pass {}: {joins} joins, {} strands", report.passes, self.len());

            if joins as f64 <= config.quiet_fraction * size as f64 {
                quiet_streak += 1;
            } else {
                quiet_streak = 0;
            }
            if quiet_streak >= config.window {
                report.converged = true;
                break;
            }
        }

        if !report.converged {
            warn!("hybridization stopped after {} passes without settling", report.passes);
        }
        debug!("hybridization ({} passes, {} joins): {before} -> {} strands", 
            report.passes, report.joins, self.len());
        report
    }

    /// One shuffle-and-scan pass. Returns the number of joins.
    fn hybridization_pass<R: Rng + ?Sized>(&mut self, chance: Probability, rng: &mut R) -> usize {
        let mut shuffled = std::mem::take(&mut self.strands);
        shuffled.shuffle(rng);

        let mut joins = 0;
        let mut next: Vec<Strand> = Vec::with_capacity(shuffled.len());
        let mut iter = shuffled.into_iter();
        let mut current = iter.next();
        while let Some(left) = current {
            let Some(right) = iter.next() else {
                next.push(left);
                break;
            };
            match left.join(&right, chance, rng) {
                Some(joined) => {
                    joins += 1;
                    next.push(joined);
                    current = iter.next();
                }
                None => {
                    next.push(left);
                    current = Some(right);
                }
            }
        }
        self.strands = next;
        joins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ms_strand::BaseVec;
    use ms_strand::complement;

    fn ss(p: &str) -> Strand {
        Strand::try_from(p).unwrap()
    }

    /// Three strands and their complements. Only complementary
    /// partners anneal, and only into blunt (inert) double strands.
    fn three_pairs() -> Population {
        let seqs = ["TCTACTTC", "GCCTGATA", "CGAGTCGG"];
        let mut tube = Population::new();
        for s in seqs {
            let bv = BaseVec::try_from(s).unwrap();
            tube.add(Strand::single(complement(&bv)).unwrap());
            tube.add(Strand::single(bv).unwrap());
        }
        tube
    }

    #[test]
    fn test_config_validation() {
        let p = Probability::ALWAYS;
        assert!(Hybridization::new(p, 10, 100).is_ok());
        assert_eq!(Hybridization::new(p, 0, 100), Err(TubeError::InvalidWindow));
        assert_eq!(
            Hybridization::new(p, 10, 5), 
            Err(TubeError::InvalidPassCap { window: 10, max_passes: 5 })
        );
        let h = Hybridization::default();
        assert!(h.with_quiet_fraction(0.05).is_ok());
        assert!(h.with_quiet_fraction(1.0).is_err());
        assert!(h.with_quiet_fraction(-0.5).is_err());
    }

    #[test]
    fn test_three_disjoint_pairs() {
        let config = Hybridization::new(Probability::ALWAYS, 25, 10_000).unwrap();
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut tube = three_pairs();
            let report = tube.hybridize(&config, &mut rng);
            assert_eq!(tube.len(), 3);
            assert_eq!(report.joins, 3);
            assert!(report.converged);
            assert!(report.passes >= 25);
            assert!(tube.iter().all(|s| s.is_double() && s.size() == 8));
            assert!(tube.iter().all(|s| s.offset() == 0 && s.overhang() == 0));

            let settled = tube.clone();
            let again = tube.hybridize(&config, &mut rng);
            assert_eq!(again.joins, 0);
            assert_eq!(again.passes, 25);
            assert_eq!(tube.len(), settled.len());
            assert!(settled.iter().all(|s| tube.iter().any(|t| t == s)));
        }
    }

    #[test]
    fn test_pass_cap() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = Hybridization::new(Probability::ALWAYS, 1, 1).unwrap();
        let mut tube = Population::from(vec![ss("AATT"), ss("AATT")]);
        let report = tube.hybridize(&config, &mut rng);
        assert_eq!(report, HybridizationReport { passes: 1, joins: 1, converged: false });
        assert_eq!(tube.len(), 1);
        assert_eq!(tube.extract_one().map(|s| s.size()), Some(4));
    }

    #[test]
    fn test_failed_collisions_never_join() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = Hybridization::new(Probability::NEVER, 4, 100).unwrap();
        let mut tube = three_pairs();
        let report = tube.hybridize(&config, &mut rng);
        assert_eq!(report, HybridizationReport { passes: 4, joins: 0, converged: true });
        assert_eq!(tube.len(), 6);
    }

    #[test]
    fn test_quiet_fraction() {
        // With a generous quiet fraction, the very first passes already count as quiet.
        let mut rng = StdRng::seed_from_u64(3);
        let config = Hybridization::new(Probability::ALWAYS, 2, 100)
            .unwrap()
            .with_quiet_fraction(0.9)
            .unwrap();
        let mut tube = three_pairs();
        let report = tube.hybridize(&config, &mut rng);
        assert_eq!(report.passes, 2);
        assert!(report.converged);
    }

    #[test]
    fn test_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = Hybridization::default();
        let mut tube = Population::new();
        let report = tube.hybridize(&config, &mut rng);
        assert!(report.converged);
        assert_eq!(report.joins, 0);
        assert!(tube.is_empty());

        tube.add(ss("ACGT"));
        tube.hybridize(&config, &mut rng);
        assert_eq!(tube.strands(), &[ss("ACGT")]);
    }

    #[test]
    fn test_seeded_reproducibility() {
        let config = Hybridization::default();
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut tube = three_pairs();
            tube.amplify(3, Probability::new(0.8).unwrap(), &mut rng);
            let report = tube.hybridize(&config, &mut rng);
            (tube, report)
        };
        assert_eq!(run(21), run(21));
    }
}
