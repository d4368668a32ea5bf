#[macro_use]
mod macros;

use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// ScalarKind
///
/// Closed scalar vocabulary reported by the model layer.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
pub enum ScalarKind {
    BigInt,
    Boolean,
    Date,
    Decimal,
    Double,
    Float,
    Integer,
    String,
    Text,
}

impl ScalarKind {
    /// Return the full metadata descriptor for one scalar kind.
    #[must_use]
    pub const fn metadata(self) -> ScalarMetadata {
        scalar_kind_registry!(metadata_from_registry, self)
    }

    /// Canonical upper-case tag, as the model layer spells it.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        self.metadata().tag
    }

    #[must_use]
    pub const fn json_type(self) -> JsonType {
        self.metadata().json_type
    }

    #[must_use]
    pub const fn format(self) -> Option<JsonFormat> {
        self.metadata().format
    }

    /// Look up a scalar kind by its bare tag name.
    ///
    /// Matching is case-insensitive; `REAL` and `DOUBLE PRECISION` are
    /// accepted as spellings of `DOUBLE`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let upper = tag.trim().to_ascii_uppercase();

        match upper.as_str() {
            "REAL" | "DOUBLE PRECISION" => Some(Self::Double),
            other => scalar_kind_registry!(kind_from_tag_registry, other),
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

///
/// ScalarMetadata
///
/// JSON Schema projection of one scalar kind.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarMetadata {
    pub tag: &'static str,
    pub json_type: JsonType,
    pub format: Option<JsonFormat>,
}

///
/// JsonType
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum JsonType {
    #[display("array")]
    Array,
    #[display("boolean")]
    Boolean,
    #[display("integer")]
    Integer,
    #[display("number")]
    Number,
    #[display("object")]
    Object,
    #[display("string")]
    String,
}

///
/// JsonFormat
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum JsonFormat {
    #[display("date-time")]
    #[serde(rename = "date-time")]
    DateTime,
    #[display("int32")]
    #[serde(rename = "int32")]
    Int32,
    #[display("int64")]
    #[serde(rename = "int64")]
    Int64,
}

/// Ordered list of all scalar kinds in registry order.
pub const ALL_SCALAR_KINDS: [ScalarKind; 9] = scalar_kind_registry!(all_kinds_from_registry);
