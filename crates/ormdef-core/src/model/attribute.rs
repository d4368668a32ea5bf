use crate::model::kind::AttributeKind;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

///
/// AttributeModel
/// Metadata for one model attribute, as supplied by the model layer.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeModel {
    /// Attribute name; unique within a model.
    pub name: String,

    #[serde(rename = "type")]
    pub kind: AttributeKind,

    /// Nullable unless the model layer says otherwise.
    #[serde(default = "default_allow_null")]
    pub allow_null: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<JsonValue>,
}

impl AttributeModel {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<AttributeKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            allow_null: true,
            default_value: None,
        }
    }

    /// Build an attribute from a raw model-layer type tag.
    #[must_use]
    pub fn from_tag(name: impl Into<String>, tag: &str) -> Self {
        Self::new(name, AttributeKind::from_tag(tag))
    }

    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.allow_null = false;
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<JsonValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Whether instances must always carry a non-null value.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        !self.allow_null
    }
}

const fn default_allow_null() -> bool {
    true
}
