//! Joining two strands into one.
//!
//! Depending on strandedness there are three cases:
//!  - two single strands anneal at the first legal offset,
//!  - a single strand anneals to the sticky end of a double strand,
//!  - two double strands ligate at matching sticky ends.
//!

use rand::Rng;

use crate::Probability;
use crate::Strand;
use crate::base::reverse;

/// Arrangements of two double strands, listed in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// `a` followed by `b`.
    Forward,
    /// `b` followed by `a`.
    Backward,
    /// `a` flipped, followed by `b`.
    FlippedFirst,
    /// `b` followed by `a` flipped.
    FlippedLast,
}

impl Geometry {
    pub const PRIORITY: [Geometry; 4] = [
        Geometry::Forward,
        Geometry::Backward,
        Geometry::FlippedFirst,
        Geometry::FlippedLast,
    ];

    /// Ligate two double strands in this arrangement, if their sticky ends match.
    pub fn ligate(self, a: &Strand, b: &Strand) -> Option<Strand> {
        match self {
            Geometry::Forward => ligate(a, b),
            Geometry::Backward => ligate(b, a),
            Geometry::FlippedFirst => ligate(&a.flipped()?, b),
            Geometry::FlippedLast => ligate(b, &a.flipped()?),
        }
    }
}

/// The exposed end of a double strand that a single strand may extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// Append to the 3' end of the primary.
    AppendPrimary,
    /// Append (reversed) to the end of the secondary.
    AppendSecondary,
    /// Prepend to the 5' end of the primary.
    PrependPrimary,
    /// Prepend (reversed) to the start of the secondary.
    PrependSecondary,
}

impl Extension {
    /// The extensions offered by a double strand: at most one per end,
    /// the 3' end of the primary first.
    pub fn candidates(double: &Strand) -> impl Iterator<Item = Extension> {
        let tail = match double.overhang() {
            o if o > 0 => Some(Extension::AppendPrimary),
            o if o < 0 => Some(Extension::AppendSecondary),
            _ => None,
        };
        let head = match double.offset() {
            o if o < 0 => Some(Extension::PrependPrimary),
            o if o > 0 => Some(Extension::PrependSecondary),
            _ => None,
        };
        tail.into_iter().chain(head)
    }

    /// Anneal `single` to `double` at this end, if the bases pair.
    pub fn anneal(self, double: &Strand, single: &Strand) -> Option<Strand> {
        let secondary = double.secondary()?;
        let (p, s) = (double.primary(), single.primary());
        let offset = double.offset();
        match self {
            Extension::AppendPrimary => 
                Strand::try_new(p.concat(s), Some(secondary.clone()), offset),
            Extension::AppendSecondary => 
                Strand::try_new(p.clone(), Some(secondary.concat(&reverse(s))), offset),
            Extension::PrependPrimary => 
                Strand::try_new(s.concat(p), Some(secondary.clone()), offset + s.len() as isize),
            Extension::PrependSecondary => 
                Strand::try_new(p.clone(), Some(reverse(s).concat(secondary)), offset - s.len() as isize),
        }
    }
}

impl Strand {
    /// Attempt to join two strands, ignoring the chance of a failed collision.
    pub fn try_join(&self, other: &Strand) -> Option<Strand> {
        match (self.is_double(), other.is_double()) {
            (false, false) => anneal_singles(self, other),
            (true, true) => Geometry::PRIORITY
                .iter()
                .find_map(|g| g.ligate(self, other)),
            (true, false) => extend(self, other),
            (false, true) => extend(other, self),
        }
    }

    /// Attempt to join two strands. The collision itself succeeds with
    /// probability `chance` (one draw per call), after which the
    /// strands join if they are compatible.
    pub fn join<R: Rng + ?Sized>(
        &self, 
        other: &Strand, 
        chance: Probability, 
        rng: &mut R
    ) -> Option<Strand> {
        if !chance.sample(rng) {
            return None;
        }
        self.try_join(other)
    }
}

/// First legal offset, scanning from the leftmost possible overlap.
fn anneal_singles(a: &Strand, b: &Strand) -> Option<Strand> {
    let p = a.primary();
    let s = reverse(b.primary());
    let (lp, ls) = (p.len() as isize, s.len() as isize);
    let offset = (1 - lp..ls).find(|&o| Strand::is_legal(p, Some(&s[..]), o))?;
    Some(Strand::new_unchecked(p.clone(), Some(s), offset))
}

fn extend(double: &Strand, single: &Strand) -> Option<Strand> {
    Extension::candidates(double).find_map(|e| e.anneal(double, single))
}

/// Ligation of `left` and `right` at matching sticky ends.
fn ligate(left: &Strand, right: &Strand) -> Option<Strand> {
    let (ls, rs) = (left.secondary()?, right.secondary()?);
    if right.offset() == 0 || left.overhang() != right.offset() {
        return None;
    }
    Strand::try_new(
        left.primary().concat(right.primary()),
        Some(ls.concat(rs)),
        left.offset(),
    )
}
