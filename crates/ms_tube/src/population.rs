//! The test tube: a multiset of strands and the bulk operations on it.

use log::debug;
use nohash_hasher::IntMap;
use rand::Rng;

use ms_strand::BaseVec;
use ms_strand::Detection;
use ms_strand::Probability;
use ms_strand::Strand;

use crate::SizeRange;

/// An owned population of strands.
///
/// The order of strands carries no meaning beyond the pairing order
/// during hybridization, which is reshuffled on every pass anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    pub(crate) strands: Vec<Strand>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, strand: Strand) {
        self.strands.push(strand);
    }

    pub fn len(&self) -> usize {
        self.strands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Strand> {
        self.strands.iter()
    }

    pub fn strands(&self) -> &[Strand] {
        &self.strands
    }

    /// PCR: in each round, every strand present at the start of the
    /// round is duplicated with probability `p_copy`.
    pub fn amplify<R: Rng + ?Sized>(&mut self, rounds: usize, p_copy: Probability, rng: &mut R) {
        let before = self.len();
        for _ in 0..rounds {
            let copies: Vec<Strand> = self.strands
                .iter()
                .filter(|_| p_copy.sample(rng))
                .cloned()
                .collect();
            self.strands.extend(copies);
        }
        debug!("amplify ({rounds} rounds, p = {p_copy}): {before} -> {} strands", self.len());
    }

    /// Gel electrophoresis: keep exactly the strands with a size in `range`.
    pub fn size_separate(&mut self, range: SizeRange) {
        let before = self.len();
        self.strands.retain(|s| range.contains(s.size()));
        debug!("size separation {range}: {before} -> {} strands", self.len());
    }

    /// Affinity separation: keep the strands on which at least one of
    /// the `probes` is detected. An empty probe set keeps nothing.
    pub fn probe_separate<R: Rng + ?Sized>(
        &mut self,
        probes: &[BaseVec],
        detection: Detection,
        rng: &mut R,
    ) {
        let before = self.len();
        self.strands.retain(|s| {
            probes.iter().any(|p| s.detect(p, detection, rng).is_some())
        });
        debug!("probe separation ({} probes): {before} -> {} strands", probes.len(), self.len());
    }

    /// The first strand in the tube, if any.
    pub fn extract_one(&self) -> Option<&Strand> {
        self.strands.first()
    }

    /// Number of strands per strand size.
    pub fn size_histogram(&self) -> IntMap<usize, usize> {
        let mut hist = IntMap::default();
        for s in &self.strands {
            *hist.entry(s.size()).or_insert(0) += 1;
        }
        hist
    }
}

impl From<Vec<Strand>> for Population {
    fn from(strands: Vec<Strand>) -> Self {
        Population { strands }
    }
}

impl FromIterator<Strand> for Population {
    fn from_iter<I: IntoIterator<Item = Strand>>(iter: I) -> Self {
        Population { strands: iter.into_iter().collect() }
    }
}

impl Extend<Strand> for Population {
    fn extend<I: IntoIterator<Item = Strand>>(&mut self, iter: I) {
        self.strands.extend(iter);
    }
}

impl IntoIterator for Population {
    type Item = Strand;
    type IntoIter = std::vec::IntoIter<Strand>;

    fn into_iter(self) -> Self::IntoIter {
        self.strands.into_iter()
    }
}
