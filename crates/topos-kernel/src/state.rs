//! Immutable state snapshots.
//!
//! A state is what a morphism transforms. It is never edited: applying a
//! morphism builds a new state and the engine swaps it in, so any state a
//! caller holds keeps the content it had when it was created.

use crate::content::{Content, ContentValue};
use crate::truth::{TruthAssignment, TruthValue, derive_truth};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Mode of the state the engine boots into.
pub const VOID_MODE: &str = "void";

/// A snapshot of content, mode, truth and creation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct State {
    content: Content,
    mode: String,
    truth: TruthAssignment,
    created_at: DateTime<Utc>,
}

impl State {
    /// Build a state stamped with the current time.
    ///
    /// Truth is always derived from `content`; it cannot be supplied.
    pub fn new(content: Content, mode: impl Into<String>) -> Self {
        Self::at(content, mode, Utc::now())
    }

    pub fn at(content: Content, mode: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let truth = derive_truth(&content);
        Self {
            content,
            mode: mode.into(),
            truth,
            created_at,
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn get(&self, key: &str) -> Option<&ContentValue> {
        self.content.get(key)
    }

    /// An owned copy of the content, independent of this state.
    pub fn snapshot(&self) -> Content {
        self.content.clone()
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn truth(&self) -> &TruthAssignment {
        &self.truth
    }

    pub fn holds(&self, tag: TruthValue) -> bool {
        self.truth.get(tag)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
