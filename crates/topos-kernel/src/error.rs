//! Error types for Topos kernel operations.

/// Errors arising from registry lookups, composition, or actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToposError {
    /// No morphism is registered under the requested name.
    #[error("unknown morphism: {0}")]
    UnknownMorphism(String),

    /// The first morphism's target type is not the second's source type.
    #[error(
        "cannot compose {first} → {second}: target `{first_target}` does not match source `{second_source}`"
    )]
    TypeMismatch {
        first: String,
        second: String,
        first_target: String,
        second_source: String,
    },

    /// A morphism is already registered under this name.
    #[error("morphism already registered: {0}")]
    DuplicateName(String),

    /// An action was handed content it cannot transform.
    #[error("invalid content for {morphism}: {description}")]
    InvalidContent {
        morphism: String,
        description: String,
    },

    /// Engine configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl ToposError {
    pub fn invalid_content(morphism: impl Into<String>, description: impl Into<String>) -> Self {
        Self::InvalidContent {
            morphism: morphism.into(),
            description: description.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToposError>;
