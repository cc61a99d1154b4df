//! Membership predicates for enumerations.
//!
//! The predicate is chosen once, when the type is built, from the shape of the
//! finished value set:
//!
//! | Shape                                   | Strategy      | Cost            |
//! |-----------------------------------------|---------------|-----------------|
//! | values fill `lo..=hi` with no gaps      | `Range`       | two comparisons |
//! | gaps, fewer than 20 members             | `Disjunction` | one `==` each   |
//! | gaps, 20 or more members                | `Set`         | one hash lookup |
//!
//! All three accept exactly the declared values.

use rustc_hash::FxHashSet;

use enumforge_common::limits::MAX_DISJUNCTION_MEMBERS;

/// Which predicate a type was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Range,
    Disjunction,
    Set,
}

#[derive(Debug, Clone)]
pub enum Membership {
    Range { lo: i32, hi: i32 },
    Disjunction(Box<[i32]>),
    Set(FxHashSet<i32>),
}

impl Membership {
    /// Pick the predicate for `values`, whose extrema are `lo` and `hi`.
    ///
    /// `values` must be pairwise distinct.
    pub fn synthesize(values: &[i32], lo: i32, hi: i32) -> Self {
        let span = i64::from(hi) - i64::from(lo) + 1;
        if values.len() as i64 == span {
            Self::Range { lo, hi }
        } else if values.len() < MAX_DISJUNCTION_MEMBERS {
            Self::Disjunction(values.into())
        } else {
            Self::Set(values.iter().copied().collect())
        }
    }

    #[inline]
    pub fn contains(&self, x: i32) -> bool {
        match self {
            Self::Range { lo, hi } => *lo <= x && x <= *hi,
            Self::Disjunction(values) => values.iter().any(|&v| v == x),
            Self::Set(values) => values.contains(&x),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Range { .. } => Strategy::Range,
            Self::Disjunction(_) => Strategy::Disjunction,
            Self::Set(_) => Strategy::Set,
        }
    }
}
