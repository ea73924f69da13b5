//! The engine: a morphism registry and the current state.
//!
//! The engine is the only mutable piece of the kernel. It holds exactly one
//! current state, and [`Engine::apply`] is the only way to replace it. A
//! failed application leaves the current state as it was; a failed sequence
//! keeps every application that succeeded before the failure.
//!
//! Callers construct an engine with [`Engine::boot`] and pass it around
//! explicitly. Mutation takes `&mut self`, so applications are serialized by
//! construction.

use crate::classifier::{Element, SubobjectClassifier};
use crate::config::{EngineConfig, RegistrationPolicy};
use crate::content::Content;
use crate::error::{Result, ToposError};
use crate::morphism::{Morphism, MorphismSummary};
use crate::spells;
use crate::state::State;
use crate::truth::{TruthAssignment, TruthValue};
use serde::Serialize;
use std::collections::btree_map::{BTreeMap, Entry};
use std::collections::HashSet;

/// Answer to a truth query: one tag, or the whole assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TruthReading {
    Single(bool),
    Full(TruthAssignment),
}

/// What a cast did: content before and after, and the resulting truth.
///
/// `before` and `after` are owned copies; later applications never change
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellReport {
    pub spell: String,
    pub magic: String,
    pub math: String,
    pub before: Content,
    pub after: Content,
    pub truth: TruthAssignment,
}

pub struct Engine {
    morphisms: BTreeMap<String, Morphism>,
    current: State,
    omega: SubobjectClassifier,
    policy: RegistrationPolicy,
}

impl Engine {
    /// Boot with the default configuration.
    pub fn boot() -> Self {
        Self::boot_with(&EngineConfig::default())
    }

    pub fn boot_with(config: &EngineConfig) -> Self {
        let mut morphisms = BTreeMap::new();
        if config.builtins {
            for morphism in spells::builtins() {
                morphisms.insert(morphism.name().to_string(), morphism);
            }
        }

        let current = State::new(config.boot_content.clone(), config.initial_mode.clone());
        tracing::info!(
            mode = %current.mode(),
            morphisms = morphisms.len(),
            truth = %current.truth(),
            "engine booted"
        );

        Self {
            morphisms,
            current,
            omega: SubobjectClassifier::new(),
            policy: config.registration,
        }
    }

    /// Register a morphism under its name.
    ///
    /// Under [`RegistrationPolicy::Reject`] an existing name fails with
    /// [`ToposError::DuplicateName`]; under `Overwrite` the entry is replaced.
    pub fn register(&mut self, morphism: Morphism) -> Result<()> {
        match self.morphisms.entry(morphism.name().to_string()) {
            Entry::Vacant(entry) => {
                tracing::debug!(morphism = %morphism, "registered morphism");
                entry.insert(morphism);
                Ok(())
            }
            Entry::Occupied(mut entry) => match self.policy {
                RegistrationPolicy::Reject => Err(ToposError::DuplicateName(entry.key().clone())),
                RegistrationPolicy::Overwrite => {
                    tracing::warn!(morphism = %morphism, "overwriting registered morphism");
                    entry.insert(morphism);
                    Ok(())
                }
            },
        }
    }

    /// Apply a registered morphism to the current state and make the result
    /// current.
    pub fn apply(&mut self, name: &str) -> Result<&State> {
        let next = self.morphism(name)?.apply(&self.current)?;
        self.current = next;
        Ok(&self.current)
    }

    /// Apply each name in order, stopping at the first failure.
    ///
    /// Applications before the failure are kept.
    pub fn compose_sequence<I, S>(&mut self, names: I) -> Result<&State>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.apply(name.as_ref())?;
        }
        Ok(&self.current)
    }

    /// Apply a morphism and report the content before and after.
    pub fn cast(&mut self, name: &str) -> Result<SpellReport> {
        let metadata = self.morphism(name)?.metadata();
        let (magic, math) = (metadata.magic.clone(), metadata.math.clone());
        let before = self.current.snapshot();

        let state = self.apply(name)?;
        Ok(SpellReport {
            spell: name.to_string(),
            magic,
            math,
            before,
            after: state.snapshot(),
            truth: *state.truth(),
        })
    }

    /// Compose two registered morphisms without registering the result.
    pub fn compose(&self, first: &str, second: &str) -> Result<Morphism> {
        self.morphism(first)?.compose(self.morphism(second)?)
    }

    /// Compose two registered morphisms and register the composite under
    /// its own name (`first∘second`). Returns that name.
    pub fn register_composite(&mut self, first: &str, second: &str) -> Result<String> {
        let composite = self.compose(first, second)?;
        let name = composite.name().to_string();
        self.register(composite)?;
        Ok(name)
    }

    /// Read the current truth: one tag if given, else the full assignment.
    pub fn query_truth(&self, tag: Option<TruthValue>) -> TruthReading {
        match tag {
            Some(tag) => TruthReading::Single(self.current.holds(tag)),
            None => TruthReading::Full(*self.current.truth()),
        }
    }

    /// Classify `subset` against `whole`. Independent of the current state.
    pub fn classify<T: Element>(&self, subset: &HashSet<T>, whole: &HashSet<T>) -> TruthAssignment {
        self.omega.classify(subset, whole)
    }

    pub fn state(&self) -> &State {
        &self.current
    }

    pub fn morphism(&self, name: &str) -> Result<&Morphism> {
        self.morphisms
            .get(name)
            .ok_or_else(|| ToposError::UnknownMorphism(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.morphisms.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn morphism_names(&self) -> Vec<&str> {
        self.morphisms.keys().map(String::as_str).collect()
    }

    pub fn summaries(&self) -> Vec<MorphismSummary> {
        self.morphisms.values().map(Morphism::summary).collect()
    }

    pub fn classifier(&self) -> &SubobjectClassifier {
        &self.omega
    }

    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::boot()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("morphisms", &self.morphism_names())
            .field("current", &self.current)
            .field("policy", &self.policy)
            .finish()
    }
}
