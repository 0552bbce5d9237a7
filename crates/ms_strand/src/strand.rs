//! Single and double stranded fragments.
//!
//! A double strand is stored as two sequences plus the offset of
//! the secondary relative to the primary:
//!
//! ```text
//!   offset = 2, overhang = 1
//!
//!   5'-ACGTAC-3'       primary (5' to 3')
//!   3'-  CATGA-5'      secondary (position-aligned, 3' to 5')
//! ```
//!
//! Position `i` of the primary is paired with position `i - offset`
//! of the secondary, wherever both exist.
//!

use std::fmt;

use crate::Base;
use crate::BaseVec;
use crate::StrandError;
use crate::base::reverse;

/// An immutable single or double stranded fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Strand {
    primary: BaseVec,
    secondary: Option<BaseVec>,
    offset: isize,
}

impl Strand {
    /// Construct a strand, failing if it violates the base-pairing rules.
    pub fn new(
        primary: BaseVec,
        secondary: Option<BaseVec>,
        offset: isize,
    ) -> Result<Self, StrandError> {
        if Strand::is_legal(&primary, secondary.as_deref(), offset) {
            Ok(Strand::new_unchecked(primary, secondary, offset))
        } else {
            Err(StrandError::InvalidStrand {
                primary: primary.to_string(),
                secondary: secondary.map(|s| s.to_string()),
                offset,
            })
        }
    }

    /// Like `Strand::new`, but reports an illegal strand as `None`.
    /// Meant for call sites that probe many candidate geometries.
    pub fn try_new(
        primary: BaseVec,
        secondary: Option<BaseVec>,
        offset: isize,
    ) -> Option<Self> {
        Strand::is_legal(&primary, secondary.as_deref(), offset)
            .then(|| Strand::new_unchecked(primary, secondary, offset))
    }

    pub fn single(primary: BaseVec) -> Result<Self, StrandError> {
        Strand::new(primary, None, 0)
    }

    pub fn double(
        primary: BaseVec, 
        secondary: BaseVec, 
        offset: isize
    ) -> Result<Self, StrandError> {
        Strand::new(primary, Some(secondary), offset)
    }

    pub(crate) fn new_unchecked(primary: BaseVec, secondary: Option<BaseVec>, offset: isize) -> Self {
        let offset = if secondary.is_some() { offset } else { 0 };
        Strand { primary, secondary, offset }
    }

    /// The legality rule for strands:
    ///  - a single strand must not be empty,
    ///  - a double strand needs two non-empty sequences which are
    ///    Watson-Crick complementary wherever they overlap, and the
    ///    overlap must cover at least half of the shorter sequence.
    pub fn is_legal(primary: &[Base], secondary: Option<&[Base]>, offset: isize) -> bool {
        let Some(secondary) = secondary else {
            return !primary.is_empty();
        };
        if primary.is_empty() || secondary.is_empty() {
            return false;
        }
        let (lp, ls) = (primary.len() as isize, secondary.len() as isize);
        if offset <= -ls || offset >= lp {
            return false;
        }
        let (lo, hi) = (offset.max(0), (ls + offset).min(lp));
        if 2 * (hi - lo) < lp.min(ls) {
            return false;
        }
        (lo..hi).all(|i| primary[i as usize].pairs_with(secondary[(i - offset) as usize]))
    }

    pub fn primary(&self) -> &BaseVec {
        &self.primary
    }

    pub fn secondary(&self) -> Option<&BaseVec> {
        self.secondary.as_ref()
    }

    /// Start of the secondary relative to the start of the primary.
    /// Always zero for single strands.
    pub fn offset(&self) -> isize {
        self.offset
    }

    pub fn is_double(&self) -> bool {
        self.secondary.is_some()
    }

    /// Length of the longer sequence.
    pub fn size(&self) -> usize {
        self.primary.len().max(self.secondary.as_ref().map_or(0, |s| s.len()))
    }

    /// How far the secondary reaches past the 3' end of the primary.
    /// Positive: the secondary exposes a sticky end; negative: the
    /// primary does.
    pub fn overhang(&self) -> isize {
        let ls = self.secondary.as_ref().map_or(0, |s| s.len()) as isize;
        ls + self.offset - self.primary.len() as isize
    }

    /// The same molecule seen from the other side: the secondary read
    /// 5' to 3' becomes the primary. `None` for single strands.
    pub fn flipped(&self) -> Option<Strand> {
        let secondary = self.secondary.as_ref()?;
        Some(Strand::new_unchecked(
            reverse(secondary),
            Some(reverse(&self.primary)),
            self.overhang(),
        ))
    }
}

impl TryFrom<&str> for Strand {
    type Error = StrandError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Strand::single(BaseVec::try_from(s)?)
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = |n: isize| " ".repeat(n.max(0) as usize);
        writeln!(f, "{}{}", pad(-self.offset), self.primary)?;
        match &self.secondary {
            Some(s) => write!(f, "{}{}", pad(self.offset), s),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bv(s: &str) -> BaseVec {
        BaseVec::try_from(s).unwrap()
    }

    #[test]
    fn test_single_strands() {
        let s = Strand::try_from("ACGT").unwrap();
        assert!(!s.is_double());
        assert_eq!(s.size(), 4);
        assert_eq!(s.offset(), 0);
        assert_eq!(s.overhang(), -4);
        assert!(s.flipped().is_none());
        assert!(matches!(
            Strand::try_from(""),
            Err(StrandError::InvalidStrand { secondary: None, .. })
        ));
    }

    #[test]
    fn test_single_strand_ignores_offset() {
        let s = Strand::new(bv("ACGT"), None, 5).unwrap();
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_double_strand_legality() {
        assert!(Strand::double(bv("ACGT"), bv("TGCA"), 0).is_ok());
        assert!(Strand::double(bv("ACCTGA"), bv("TGGACTAG"), 0).is_ok());
        assert!(Strand::double(bv("TCGGCA"), bv("CCGT"), 2).is_ok());
        assert!(Strand::double(bv("ACGT"), bv("GGTGCA"), -2).is_ok());
        // mismatch at position 1
        assert!(Strand::double(bv("ACGT"), bv("TACA"), 0).is_err());
        // perfect pairing, but the overlap is too short
        assert!(Strand::double(bv("ACGTAC"), bv("GTTTTT"), 4).is_err());
        // no overlap at all
        assert!(Strand::double(bv("ACGT"), bv("TGCA"), 4).is_err());
        assert!(Strand::double(bv("ACGT"), bv(""), 0).is_err());
        assert!(Strand::try_new(bv("ACGT"), Some(bv("TACA")), 0).is_none());
    }

    #[test]
    fn test_overlap_of_exactly_half() {
        // 3 of 6 bases paired.
        assert!(Strand::double(bv("AAACCC"), bv("GGGTTT"), 3).is_ok());
        // 2 of 6 bases paired.
        assert!(Strand::double(bv("AAACCC"), bv("GGTTTT"), 4).is_err());
    }

    #[test]
    fn test_extreme_offsets() {
        for o in [isize::MAX, isize::MIN, isize::MIN + 1, 4, -4] {
            assert!(!Strand::is_legal(&bv("ACGT"), Some(&bv("TGCA")[..]), o));
            assert!(matches!(
                Strand::double(bv("ACGT"), bv("TGCA"), o),
                Err(StrandError::InvalidStrand { offset, .. }) if offset == o
            ));
            assert!(Strand::try_new(bv("ACGT"), Some(bv("TGCA")), o).is_none());
        }
    }

    #[test]
    fn test_size_and_overhang() {
        let s = Strand::double(bv("ACCTGA"), bv("TGGACTAG"), 0).unwrap();
        assert_eq!(s.size(), 8);
        assert_eq!(s.overhang(), 2);
        let s = Strand::double(bv("ACGTAC"), bv("TGCA"), 0).unwrap();
        assert_eq!(s.size(), 6);
        assert_eq!(s.overhang(), -2);
        let s = Strand::double(bv("ACGT"), bv("GGTGCA"), -2).unwrap();
        assert_eq!(s.overhang(), 0);
    }

    #[test]
    fn test_flipped() {
        let s = Strand::double(bv("ACCTGA"), bv("TGGACTAG"), 0).unwrap();
        let f = s.flipped().unwrap();
        assert_eq!(f.primary(), &bv("GATCAGGT"));
        assert_eq!(f.secondary(), Some(&bv("AGTCCA")));
        assert_eq!(f.offset(), 2);
        assert_eq!(f.overhang(), 0);
        assert_eq!(f.flipped().unwrap(), s);
    }

    #[test]
    fn test_legal_strands_pair_correctly() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut found = 0;
        for _ in 0..5000 {
            let p = BaseVec::random(rng.random_range(1..7), &mut rng);
            let s = BaseVec::random(rng.random_range(1..7), &mut rng);
            let o = rng.random_range(-6i64..7) as isize;
            let Some(strand) = Strand::try_new(p.clone(), Some(s.clone()), o) else {
                continue;
            };
            found += 1;
            let (lo, hi) = (o.max(0), (s.len() as isize + o).min(p.len() as isize));
            assert!(2 * (hi - lo) >= p.len().min(s.len()) as isize);
            for i in lo..hi {
                assert_eq!(p[i as usize].complement(), s[(i - o) as usize]);
            }
            assert!(strand.flipped().is_some_and(|f| {
                Strand::is_legal(f.primary(), f.secondary().map(|s| &s[..]), f.offset())
            }));
        }
        assert!(found > 0);
    }

    #[test]
    fn test_display() {
        let s = Strand::double(bv("ACGT"), bv("GGTGCA"), -2).unwrap();
        assert_eq!(format!("{s}"), "  ACGT\nGGTGCA");
        let s = Strand::double(bv("TCGGCA"), bv("CCGT"), 2).unwrap();
        assert_eq!(format!("{s}"), "TCGGCA\n  CCGT");
        let s = Strand::try_from("ACG").unwrap();
        assert_eq!(format!("{s}"), "ACG\n");
    }
}
