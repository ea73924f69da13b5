//! The subobject classifier Ω.
//!
//! Given a candidate subobject and a whole, Ω answers "is this contained?"
//! in all five truth modes at once:
//!
//! | tag       | holds when                                   |
//! |-----------|----------------------------------------------|
//! | Classical | subset ⊆ whole                               |
//! | Flow      | more than 70% of subset lies in whole        |
//! | Temporal  | subset and whole share at least one element  |
//! | Void      | both contain an undefined element            |
//! | False     | none of the above                            |
//!
//! Flow and Temporal routinely hold together. The empty subset is the one
//! exception to the NOR rule: nothing can be claimed about it, so every tag,
//! False included, is false.

use crate::content::VOID_GLYPH;
use crate::truth::TruthAssignment;
use std::collections::HashSet;
use std::hash::Hash;

/// Share of the subset that must lie in the whole for Flow containment.
pub const FLOW_THRESHOLD: f64 = 0.7;

/// Something that can be an element of a classified set.
pub trait Element: Eq + Hash {
    /// Whether this element is the explicit undefined element.
    fn is_void(&self) -> bool;
}

macro_rules! never_void {
    ($($t:ty),* $(,)?) => {
        $(impl Element for $t {
            fn is_void(&self) -> bool {
                false
            }
        })*
    };
}

never_void!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char);

impl Element for String {
    fn is_void(&self) -> bool {
        self == VOID_GLYPH
    }
}

impl Element for &str {
    fn is_void(&self) -> bool {
        *self == VOID_GLYPH
    }
}

impl<T: Element> Element for Option<T> {
    fn is_void(&self) -> bool {
        self.as_ref().is_none_or(Element::is_void)
    }
}

/// Stateless five-valued containment classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubobjectClassifier;

impl SubobjectClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify<T: Element>(&self, subset: &HashSet<T>, whole: &HashSet<T>) -> TruthAssignment {
        if subset.is_empty() {
            return TruthAssignment::none();
        }

        let shared = subset.intersection(whole).count();
        let classical = shared == subset.len();
        let flow = shared as f64 / subset.len() as f64 > FLOW_THRESHOLD;
        let temporal = shared > 0;
        let void = subset.iter().any(Element::is_void) && whole.iter().any(Element::is_void);

        TruthAssignment::from_evidence(classical, flow, temporal, void)
    }
}
