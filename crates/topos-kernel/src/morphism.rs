//! Named, typed transformations of state content.
//!
//! A morphism f: A → B carries an action over [`Content`] and two opaque
//! type tags. The tags are never inspected except by [`Morphism::compose`],
//! where g∘f requires f's target to equal g's source.
//!
//! Composites are built by capturing both actions, so composition is
//! associative in effect: (f∘g)∘h and f∘(g∘h) run the same three actions in
//! the same order.

use crate::content::Content;
use crate::error::{Result, ToposError};
use crate::state::State;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The function a morphism applies to content.
pub type Action = Arc<dyn Fn(Content) -> Result<Content> + Send + Sync>;

/// Documentary descriptions of a morphism. Never affects behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphismMetadata {
    /// The mathematical reading.
    pub math: String,
    /// The narrative reading.
    pub magic: String,
    pub art: String,
    pub avatar: String,
    pub nature: String,
}

impl MorphismMetadata {
    /// Metadata for `self` followed by `next`.
    pub fn then(&self, next: &Self) -> Self {
        Self {
            math: join(&self.math, " then ", &next.math),
            magic: join(&self.magic, " flowing into ", &next.magic),
            art: join(&self.art, ", then ", &next.art),
            avatar: join(&self.avatar, ", then ", &next.avatar),
            nature: join(&self.nature, ", then ", &next.nature),
        }
    }
}

fn join(first: &str, sep: &str, second: &str) -> String {
    match (first.is_empty(), second.is_empty()) {
        (true, _) => second.to_string(),
        (_, true) => first.to_string(),
        _ => format!("{first}{sep}{second}"),
    }
}

/// A named transformation between two state types.
#[derive(Clone)]
pub struct Morphism {
    name: String,
    source_type: String,
    target_type: String,
    action: Action,
    metadata: MorphismMetadata,
}

impl Morphism {
    pub fn new<F>(
        name: impl Into<String>,
        source_type: impl Into<String>,
        target_type: impl Into<String>,
        metadata: MorphismMetadata,
        action: F,
    ) -> Self
    where
        F: Fn(Content) -> Result<Content> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            source_type: source_type.into(),
            target_type: target_type.into(),
            action: Arc::new(action),
            metadata,
        }
    }

    /// The identity morphism on a type: content passes through unchanged.
    pub fn identity(object_type: impl Into<String>) -> Self {
        let object_type = object_type.into();
        Self::new(
            format!("id_{object_type}"),
            object_type.clone(),
            object_type,
            MorphismMetadata {
                math: "identity".to_string(),
                ..MorphismMetadata::default()
            },
            Ok,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    pub fn target_type(&self) -> &str {
        &self.target_type
    }

    pub fn metadata(&self) -> &MorphismMetadata {
        &self.metadata
    }

    /// Run the action on content directly, without building a state.
    pub fn transform(&self, content: Content) -> Result<Content> {
        (self.action)(content)
    }

    /// Apply to a state, producing a new state in the same mode.
    ///
    /// The input state is untouched; the action works on a copy of its
    /// content. Truth is derived once, from the transformed content.
    pub fn apply(&self, state: &State) -> Result<State> {
        let content = self.transform(state.snapshot())?;
        tracing::debug!(morphism = %self.name, keys = content.len(), "applied morphism");
        Ok(State::new(content, state.mode()))
    }

    /// Compose `self` then `next`.
    ///
    /// Fails with [`ToposError::TypeMismatch`] unless `self`'s target type is
    /// `next`'s source type.
    pub fn compose(&self, next: &Morphism) -> Result<Morphism> {
        if self.target_type != next.source_type {
            return Err(ToposError::TypeMismatch {
                first: self.name.clone(),
                second: next.name.clone(),
                first_target: self.target_type.clone(),
                second_source: next.source_type.clone(),
            });
        }

        let first = Arc::clone(&self.action);
        let second = Arc::clone(&next.action);
        Ok(Morphism {
            name: format!("{}∘{}", self.name, next.name),
            source_type: self.source_type.clone(),
            target_type: next.target_type.clone(),
            action: Arc::new(move |content: Content| -> Result<Content> {
                second(first(content)?)
            }),
            metadata: self.metadata.then(&next.metadata),
        })
    }

    /// A serializable description, without the action.
    pub fn summary(&self) -> MorphismSummary {
        MorphismSummary {
            name: self.name.clone(),
            source_type: self.source_type.clone(),
            target_type: self.target_type.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

impl std::fmt::Debug for Morphism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Morphism")
            .field("name", &self.name)
            .field("source_type", &self.source_type)
            .field("target_type", &self.target_type)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Morphism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} → {}",
            self.name, self.source_type, self.target_type
        )
    }
}

/// Everything about a morphism except its action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphismSummary {
    pub name: String,
    pub source_type: String,
    pub target_type: String,
    pub metadata: MorphismMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentValue;

    fn push(name: &str, source: &str, target: &str, marker: &'static str) -> Morphism {
        Morphism::new(
            name,
            source,
            target,
            MorphismMetadata {
                math: format!("push {marker}"),
                ..MorphismMetadata::default()
            },
            move |mut content: Content| {
                let mut trail = match content.shift_remove("trail") {
                    Some(ContentValue::Sequence(items)) => items,
                    _ => Vec::new(),
                };
                trail.push(ContentValue::from(marker));
                content.insert("trail".into(), ContentValue::Sequence(trail));
                Ok(content)
            },
        )
    }

    fn trail(content: &Content) -> Vec<String> {
        match content.get("trail") {
            Some(ContentValue::Sequence(items)) => items
                .iter()
                .filter_map(|v| v.as_text().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn apply_keeps_mode_and_leaves_input_alone() {
        let f = push("F", "A", "B", "f");
        let before = State::new(Content::new(), "void");
        let after = f.apply(&before).unwrap();

        assert_eq!(after.mode(), "void");
        assert!(before.content().is_empty());
        assert_eq!(trail(after.content()), vec!["f"]);
    }

    #[test]
    fn composite_runs_first_then_second() {
        let f = push("F", "A", "B", "f");
        let g = push("G", "B", "C", "g");
        let fg = f.compose(&g).unwrap();

        assert_eq!(fg.name(), "F∘G");
        assert_eq!(fg.source_type(), "A");
        assert_eq!(fg.target_type(), "C");
        assert_eq!(fg.metadata().math, "push f then push g");

        let out = fg.transform(Content::new()).unwrap();
        assert_eq!(trail(&out), vec!["f", "g"]);
    }

    #[test]
    fn mismatched_types_do_not_compose() {
        let f = push("F", "A", "B", "f");
        let h = push("H", "C", "D", "h");
        let err = f.compose(&h).unwrap_err();
        assert_eq!(
            err,
            ToposError::TypeMismatch {
                first: "F".into(),
                second: "H".into(),
                first_target: "B".into(),
                second_source: "C".into(),
            }
        );
    }

    #[test]
    fn identity_is_neutral() {
        let f = push("F", "A", "B", "f");
        let left = Morphism::identity("A").compose(&f).unwrap();
        let right = f.compose(&Morphism::identity("B")).unwrap();

        let expected = f.transform(Content::new()).unwrap();
        assert_eq!(left.transform(Content::new()).unwrap(), expected);
        assert_eq!(right.transform(Content::new()).unwrap(), expected);
    }

    #[test]
    fn composite_stops_on_first_failure() {
        let failing = Morphism::new("BAD", "A", "B", MorphismMetadata::default(), |_| {
            Err(ToposError::invalid_content("BAD", "always fails"))
        });
        let g = push("G", "B", "C", "g");
        let err = failing.compose(&g).unwrap().transform(Content::new());
        assert!(matches!(err, Err(ToposError::InvalidContent { .. })));
    }

    #[test]
    fn metadata_join_skips_empty_sides() {
        let a = MorphismMetadata {
            magic: "scatter".into(),
            art: "sketch".into(),
            ..MorphismMetadata::default()
        };
        let b = MorphismMetadata {
            magic: "prune".into(),
            nature: "winter".into(),
            ..MorphismMetadata::default()
        };
        let joined = a.then(&b);
        assert_eq!(joined.magic, "scatter flowing into prune");
        assert_eq!(joined.art, "sketch");
        assert_eq!(joined.nature, "winter");
        assert_eq!(joined.math, "");
    }

    #[test]
    fn display_shows_signature() {
        let f = push("F", "A", "B", "f");
        assert_eq!(f.to_string(), "F: A → B");
    }
}
