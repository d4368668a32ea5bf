use thiserror::Error as ThisError;

///
/// UnsupportedTypeError
///
/// The type mapper has no JSON Schema projection for a tag.
/// `tag` is the offending (innermost) tag; `declared` is the full tag the
/// attribute was declared with, which differs only for arrays.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unsupported attribute type '{tag}' (declared as '{declared}')")]
pub struct UnsupportedTypeError {
    pub tag: String,
    pub declared: String,
}

impl UnsupportedTypeError {
    pub fn new(tag: impl Into<String>, declared: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            declared: declared.into(),
        }
    }
}

///
/// InputError
///
/// Precondition violations in the attribute metadata a model supplies.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum InputError {
    #[error("model '{model}' exposes no attribute metadata")]
    MissingAttributes { model: String },

    #[error("model '{model}' has an attribute with an empty name at position {index}")]
    EmptyAttributeName { model: String, index: usize },

    #[error("model '{model}' declares attribute '{name}' more than once")]
    DuplicateAttribute { model: String, name: String },
}

///
/// BuildError
///
/// Any failure of a definition build. A build either returns a complete
/// definition or one of these; there is no partial result.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BuildError {
    #[error("model '{model}', attribute '{attribute}': {source}")]
    UnsupportedType {
        model: String,
        attribute: String,
        #[source]
        source: UnsupportedTypeError,
    },

    #[error(transparent)]
    Input(#[from] InputError),
}

impl BuildError {
    /// Name of the model the failed build was for.
    #[must_use]
    pub fn model(&self) -> &str {
        match self {
            Self::UnsupportedType { model, .. }
            | Self::Input(
                InputError::MissingAttributes { model }
                | InputError::EmptyAttributeName { model, .. }
                | InputError::DuplicateAttribute { model, .. },
            ) => model,
        }
    }
}
