//! State content: an insertion-ordered mapping of keys to a closed set of
//! value kinds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The reserved text value that reads as undefined.
pub const VOID_GLYPH: &str = "※";

/// The content a morphism transforms.
pub type Content = IndexMap<String, ContentValue>;

/// A single content value.
///
/// Serialized untagged: JSON numbers, booleans, strings and arrays map
/// directly, and `null` is [`ContentValue::Undefined`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Sequence(Vec<ContentValue>),
    Undefined,
}

impl ContentValue {
    /// Integers, booleans and sequences count as discrete evidence.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Bool(_) | Self::Sequence(_))
    }

    /// A float with a fractional component.
    pub fn is_continuous(&self) -> bool {
        match self {
            Self::Float(v) => v.fract() != 0.0,
            _ => false,
        }
    }

    pub fn is_void(&self) -> bool {
        match self {
            Self::Undefined => true,
            Self::Text(s) => s == VOID_GLYPH,
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short kind name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Sequence(_) => "sequence",
            Self::Undefined => "undefined",
        }
    }
}

impl From<bool> for ContentValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ContentValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ContentValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ContentValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ContentValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<ContentValue>> for ContentValue {
    fn from(v: Vec<ContentValue>) -> Self {
        Self::Sequence(v)
    }
}

impl<T: Into<ContentValue>> From<Option<T>> for ContentValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Undefined, Into::into)
    }
}

impl std::fmt::Display for ContentValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Undefined => write!(f, "undefined"),
        }
    }
}
