//! # Topos Kernel
//!
//! A registry of named, typed state transformations evaluated against a
//! five-valued truth model.
//!
//! Applying a morphism never edits a state. It builds a new one whose truth
//! is derived from the transformed content, and the engine makes that the
//! current state.
//!
//! ## Architecture
//!
//! ```text
//! TruthValue / TruthAssignment  ← Classical, Flow, Temporal, Void, False
//!     │
//! Content / State               ← Immutable snapshots with derived truth
//!     │
//! Morphism                      ← f: A → B over content, composable when types align
//!     │
//! SubobjectClassifier           ← Ω: five-valued containment of sets
//!     │
//! Engine                        ← Registry + current state
//! ```

pub mod classifier;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod morphism;
pub mod spells;
pub mod state;
pub mod truth;

pub use classifier::{Element, FLOW_THRESHOLD, SubobjectClassifier};
pub use config::{EngineConfig, RegistrationPolicy};
pub use content::{Content, ContentValue, VOID_GLYPH};
pub use engine::{Engine, SpellReport, TruthReading};
pub use error::{Result, ToposError};
pub use morphism::{Action, Morphism, MorphismMetadata, MorphismSummary};
pub use state::{State, VOID_MODE};
pub use truth::{TruthAssignment, TruthValue, derive_truth};
