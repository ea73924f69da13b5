//! Engine boot configuration.
//!
//! Every field has a default, so an empty file (or no file) boots the
//! standard engine:
//!
//! ```toml
//! initial_mode = "void"
//! registration = "reject"   # or "overwrite"
//! builtins = true
//!
//! [boot_content]
//! awareness = "booting"
//! ```

use crate::content::{Content, ContentValue};
use crate::error::{Result, ToposError};
use crate::state::VOID_MODE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What `register` does when the name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationPolicy {
    /// Fail with `DuplicateName`.
    #[default]
    Reject,
    /// Replace the existing entry.
    Overwrite,
}

impl std::str::FromStr for RegistrationPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "overwrite" => Ok(Self::Overwrite),
            _ => Err(format!("unknown registration policy: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Mode of the boot state. Applications never change it.
    pub initial_mode: String,
    pub registration: RegistrationPolicy,
    /// Register BUTTERFLY and RANNA at boot.
    pub builtins: bool,
    /// Content of the boot state.
    pub boot_content: Content,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mut boot_content = Content::new();
        boot_content.insert("awareness".into(), ContentValue::from("booting"));
        Self {
            initial_mode: VOID_MODE.to_string(),
            registration: RegistrationPolicy::default(),
            builtins: true,
            boot_content,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| ToposError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ToposError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    /// Seed the boot content with a value, replacing any existing one.
    pub fn with_content(mut self, key: impl Into<String>, value: impl Into<ContentValue>) -> Self {
        self.boot_content.insert(key.into(), value.into());
        self
    }
}
