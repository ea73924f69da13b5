//! The five-valued truth model.
//!
//! A state is not simply true or false. Each of five tags is evaluated
//! independently against the state's content:
//!
//! - **Classical** `⊤□`: discrete evidence (integers, booleans, sequences)
//! - **Flow** `⟐◊`: continuous evidence (floats with a fractional part)
//! - **Temporal** `◈⧫`: synchronization markers (`timestamp`, `sync_id`)
//! - **Void** `※∅`: explicitly undefined values
//! - **False** `⊥`: none of the above
//!
//! The first four may co-occur. False is their NOR, never set on its own.

use crate::content::{Content, ContentValue};
use serde::{Deserialize, Serialize};

/// Content keys that mark a state as synchronized.
pub const TEMPORAL_KEYS: [&str; 2] = ["timestamp", "sync_id"];

/// One tag of the five-valued logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruthValue {
    /// Discrete truth.
    Classical,
    /// Continuous truth.
    Flow,
    /// Synchronized truth.
    Temporal,
    /// Undefined presence.
    Void,
    /// Verified false.
    False,
}

impl TruthValue {
    /// Every tag, in canonical order.
    pub const ALL: [TruthValue; 5] = [
        Self::Classical,
        Self::Flow,
        Self::Temporal,
        Self::Void,
        Self::False,
    ];

    /// Lower-case name, as used in serialized assignments.
    pub fn name(self) -> &'static str {
        match self {
            Self::Classical => "classical",
            Self::Flow => "flow",
            Self::Temporal => "temporal",
            Self::Void => "void",
            Self::False => "false",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Classical => "⊤□",
            Self::Flow => "⟐◊",
            Self::Temporal => "◈⧫",
            Self::Void => "※∅",
            Self::False => "⊥",
        }
    }
}

impl std::fmt::Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl std::str::FromStr for TruthValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classical" | "⊤□" => Ok(Self::Classical),
            "flow" | "⟐◊" => Ok(Self::Flow),
            "temporal" | "◈⧫" => Ok(Self::Temporal),
            "void" | "※∅" => Ok(Self::Void),
            "false" | "⊥" => Ok(Self::False),
            _ => Err(format!("unknown truth value: {s}")),
        }
    }
}

/// A total assignment TruthValue → bool.
///
/// All five tags are always present. The only ways to build one are
/// [`TruthAssignment::from_evidence`], which sets False to the NOR of the
/// other four, and [`TruthAssignment::none`], the all-false assignment the
/// classifier uses for an empty subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruthAssignment {
    classical: bool,
    flow: bool,
    temporal: bool,
    void: bool,
    #[serde(rename = "false")]
    verified_false: bool,
}

impl TruthAssignment {
    pub fn from_evidence(classical: bool, flow: bool, temporal: bool, void: bool) -> Self {
        Self {
            classical,
            flow,
            temporal,
            void,
            verified_false: !(classical || flow || temporal || void),
        }
    }

    /// Every tag false, False included.
    pub const fn none() -> Self {
        Self {
            classical: false,
            flow: false,
            temporal: false,
            void: false,
            verified_false: false,
        }
    }

    pub fn get(&self, tag: TruthValue) -> bool {
        match tag {
            TruthValue::Classical => self.classical,
            TruthValue::Flow => self.flow,
            TruthValue::Temporal => self.temporal,
            TruthValue::Void => self.void,
            TruthValue::False => self.verified_false,
        }
    }

    /// All five (tag, value) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TruthValue, bool)> + '_ {
        TruthValue::ALL.into_iter().map(move |tag| (tag, self.get(tag)))
    }

    /// Tags that hold.
    pub fn holding(&self) -> Vec<TruthValue> {
        self.iter()
            .filter_map(|(tag, value)| value.then_some(tag))
            .collect()
    }
}

impl std::fmt::Display for TruthAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let holding = self.holding();
        if holding.is_empty() {
            return write!(f, "∅");
        }
        let glyphs: Vec<&str> = holding.iter().map(|tag| tag.glyph()).collect();
        write!(f, "{}", glyphs.join(" "))
    }
}

/// Derive the truth assignment of a content mapping.
///
/// Each tag is computed independently over the mapping's values (or keys,
/// for Temporal). The empty mapping yields False alone.
pub fn derive_truth(content: &Content) -> TruthAssignment {
    let classical = content.values().any(ContentValue::is_discrete);
    let flow = content.values().any(ContentValue::is_continuous);
    let temporal = TEMPORAL_KEYS.iter().any(|key| content.contains_key(*key));
    let void = content.values().any(ContentValue::is_void);
    TruthAssignment::from_evidence(classical, flow, temporal, void)
}
