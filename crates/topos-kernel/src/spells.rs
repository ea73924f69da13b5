//! Built-in morphisms registered at boot.
//!
//! - **BUTTERFLY** (`Context → ScoutedContext`): explore without committing.
//!   Appends a scout marker to `patterns_noticed` and sets `committed` false.
//! - **RANNA** (`VerboseState → PrunedState`): reduce. Keeps the first half
//!   of the words in `text`.

use crate::content::{Content, ContentValue};
use crate::error::{Result, ToposError};
use crate::morphism::{Morphism, MorphismMetadata};
use chrono::Utc;

pub const BUTTERFLY: &str = "BUTTERFLY";
pub const RANNA: &str = "RANNA";

/// Key of the sequence BUTTERFLY appends discoveries to.
pub const PATTERNS_KEY: &str = "patterns_noticed";
pub const COMMITTED_KEY: &str = "committed";
/// Key of the text RANNA prunes.
pub const TEXT_KEY: &str = "text";

/// Every built-in morphism, in registration order.
pub fn builtins() -> Vec<Morphism> {
    vec![butterfly(), ranna()]
}

pub fn butterfly() -> Morphism {
    Morphism::new(
        BUTTERFLY,
        "Context",
        "ScoutedContext",
        MorphismMetadata {
            math: "Uncommitted random walk on attention manifold".into(),
            magic: "Butterfly tasting flowers without choosing".into(),
            art: "Impressionist first sketches".into(),
            avatar: "Scout saying \"Wololo\" at everything".into(),
            nature: "Morning mist exploring valleys".into(),
        },
        scout,
    )
}

pub fn ranna() -> Morphism {
    Morphism::new(
        RANNA,
        "VerboseState",
        "PrunedState",
        MorphismMetadata {
            math: "Projection onto sparse basis".into(),
            magic: "Lullaby making words sleep".into(),
            art: "Sculptor removing excess".into(),
            avatar: "Dark Souls pattern reduction".into(),
            nature: "Winter teaching minimalism".into(),
        },
        prune,
    )
}

fn scout(mut content: Content) -> Result<Content> {
    let marker = ContentValue::Text(format!(
        "scout_{:.6}",
        Utc::now().timestamp_micros() as f64 / 1_000_000.0
    ));

    match content.get_mut(PATTERNS_KEY) {
        Some(ContentValue::Sequence(patterns)) => patterns.push(marker),
        Some(other) => {
            return Err(ToposError::invalid_content(
                BUTTERFLY,
                format!("`{PATTERNS_KEY}` must be a sequence, found {}", other.kind()),
            ));
        }
        None => {
            content.insert(PATTERNS_KEY.into(), ContentValue::Sequence(vec![marker]));
        }
    }

    content.insert(COMMITTED_KEY.into(), ContentValue::Bool(false));
    Ok(content)
}

fn prune(mut content: Content) -> Result<Content> {
    match content.get_mut(TEXT_KEY) {
        Some(ContentValue::Text(text)) => *text = first_half(text),
        Some(other) => {
            return Err(ToposError::invalid_content(
                RANNA,
                format!("`{TEXT_KEY}` must be text, found {}", other.kind()),
            ));
        }
        None => {}
    }
    Ok(content)
}

/// The first ⌊n/2⌋ whitespace-separated words, joined by single spaces.
pub fn first_half(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    words[..words.len() / 2].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_content(text: &str) -> Content {
        let mut content = Content::new();
        content.insert(TEXT_KEY.into(), ContentValue::from(text));
        content
    }

    #[test]
    fn first_half_floors_odd_counts() {
        assert_eq!(first_half("a b c d"), "a b");
        assert_eq!(first_half("one two three four five"), "one two");
        assert_eq!(first_half("solo"), "");
        assert_eq!(first_half(""), "");
        assert_eq!(first_half("  spaced   out  words  here "), "spaced out");
    }

    #[test]
    fn ranna_without_text_is_a_no_op() {
        let mut content = Content::new();
        content.insert("awareness".into(), ContentValue::from("booting"));
        let out = ranna().transform(content.clone()).unwrap();
        assert_eq!(out, content);
    }

    #[test]
    fn ranna_rejects_non_text() {
        let mut content = Content::new();
        content.insert(TEXT_KEY.into(), ContentValue::Int(7));
        let err = ranna().transform(content).unwrap_err();
        assert!(matches!(err, ToposError::InvalidContent { ref morphism, .. } if morphism == RANNA));
    }

    #[test]
    fn ranna_halves_text() {
        let out = ranna().transform(text_content("a b c d")).unwrap();
        assert_eq!(out[TEXT_KEY], ContentValue::from("a b"));
    }

    #[test]
    fn butterfly_appends_and_uncommits() {
        let once = butterfly().transform(Content::new()).unwrap();
        let twice = butterfly().transform(once).unwrap();

        match &twice[PATTERNS_KEY] {
            ContentValue::Sequence(patterns) => {
                assert_eq!(patterns.len(), 2);
                assert!(
                    patterns
                        .iter()
                        .all(|p| p.as_text().is_some_and(|s| s.starts_with("scout_")))
                );
            }
            other => panic!("expected sequence, got {other:?}"),
        }
        assert_eq!(twice[COMMITTED_KEY], ContentValue::Bool(false));
    }

    #[test]
    fn butterfly_rejects_non_sequence_patterns() {
        let mut content = Content::new();
        content.insert(PATTERNS_KEY.into(), ContentValue::from("not a list"));
        assert!(butterfly().transform(content).is_err());
    }

    #[test]
    fn builtin_types_do_not_compose() {
        assert!(butterfly().compose(&ranna()).is_err());
        assert!(ranna().compose(&butterfly()).is_err());
    }
}
