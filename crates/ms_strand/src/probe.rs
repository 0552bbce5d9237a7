//! Probe detection, the basis of affinity separation.

use rand::Rng;

use crate::Base;
use crate::Probability;
use crate::Strand;
use crate::base::find;
use crate::base::reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Primary,
    Secondary,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Primary => Side::Secondary,
            Side::Secondary => Side::Primary,
        }
    }
}

/// Where a probe was found. For the secondary, `index` counts
/// from its 5' end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeHit {
    pub side: Side,
    pub index: usize,
}

/// How reliably probes stick to their targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detection {
    /// Exact substring search, primary first.
    Exact,
    /// A present probe is only detected with probability `success`,
    /// and the side that is searched first is chosen at random.
    Stochastic { success: Probability },
}

impl Strand {
    /// Search one side of the strand for `probe` (given 5' to 3').
    pub fn locate(&self, probe: &[Base], side: Side) -> Option<ProbeHit> {
        let index = match side {
            Side::Primary => find(self.primary(), probe)?,
            Side::Secondary => find(&reverse(self.secondary()?), probe)?,
        };
        Some(ProbeHit { side, index })
    }

    /// Exact search of the primary, then of the secondary.
    pub fn contains(&self, probe: &[Base]) -> Option<ProbeHit> {
        self.locate(probe, Side::Primary)
            .or_else(|| self.locate(probe, Side::Secondary))
    }

    pub fn detect<R: Rng + ?Sized>(
        &self,
        probe: &[Base],
        detection: Detection,
        rng: &mut R,
    ) -> Option<ProbeHit> {
        match detection {
            Detection::Exact => self.contains(probe),
            Detection::Stochastic { success } => {
                if !success.sample(rng) {
                    return None;
                }
                let first = if rng.random_bool(0.5) { Side::Primary } else { Side::Secondary };
                self.locate(probe, first)
                    .or_else(|| self.locate(probe, first.other()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use crate::BaseVec;

    fn bv(s: &str) -> BaseVec {
        BaseVec::try_from(s).unwrap()
    }

    #[test]
    fn test_contains() {
        let s = Strand::double(bv("ACCTGA"), bv("TGGACTAG"), 0).unwrap();
        assert_eq!(s.contains(&bv("CTG")), Some(ProbeHit { side: Side::Primary, index: 2 }));
        assert_eq!(s.contains(&bv("GATC")), Some(ProbeHit { side: Side::Secondary, index: 0 }));
        assert_eq!(s.contains(&bv("TTT")), None);
        // The secondary is searched 5' to 3', not in its stored direction.
        assert_eq!(s.contains(&bv("TGGA")), None);
    }

    #[test]
    fn test_contains_single() {
        let s = Strand::try_from("ACGTTG").unwrap();
        assert_eq!(s.locate(&bv("TTG"), Side::Primary).map(|h| h.index), Some(3));
        assert_eq!(s.locate(&bv("AC"), Side::Secondary), None);
    }

    #[test]
    fn test_detection() {
        let s = Strand::double(bv("ACCTGA"), bv("TGGACTAG"), 0).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let never = Detection::Stochastic { success: Probability::NEVER };
        let always = Detection::Stochastic { success: Probability::ALWAYS };
        for _ in 0..50 {
            assert!(s.detect(&bv("CTG"), Detection::Exact, &mut rng).is_some());
            assert!(s.detect(&bv("CTG"), never, &mut rng).is_none());
            let hit = s.detect(&bv("CTG"), always, &mut rng).unwrap();
            assert_eq!(hit, ProbeHit { side: Side::Primary, index: 2 });
            let hit = s.detect(&bv("GATC"), always, &mut rng).unwrap();
            assert_eq!(hit.side, Side::Secondary);
            assert!(s.detect(&bv("TTT"), always, &mut rng).is_none());
        }
    }
}
