use ormdef_primitives::ScalarKind;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

const ARRAY_TAG: &str = "ARRAY";

///
/// AttributeKind
///
/// Type shape of one model attribute as reported by the model layer.
/// Arrays nest recursively; tags the mapper has no projection for are kept
/// verbatim in `Unsupported` so the failure can name them.
///
/// Serializes as its canonical tag string (`ARRAY(INTEGER)`). `Unsupported`
/// only ever holds tags the parser rejects, so the string form reads back
/// to the same kind.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum AttributeKind {
    Scalar(ScalarKind),
    Array(Box<Self>),
    Unsupported(UnsupportedTag),
}

impl AttributeKind {
    #[must_use]
    pub fn array(inner: impl Into<Self>) -> Self {
        Self::Array(Box::new(inner.into()))
    }

    /// Kind for a tag outside the scalar vocabulary.
    ///
    /// The tag is still parsed: a recognised tag such as `TEXT` resolves to
    /// its scalar kind rather than being held as unsupported.
    #[must_use]
    pub fn unsupported(tag: &str) -> Self {
        Self::from_tag(tag)
    }

    /// Parse a model-layer type tag such as `STRING(255)` or `ARRAY(BIGINT)`.
    ///
    /// Parsing is total: anything outside the scalar vocabulary becomes
    /// `Unsupported` carrying the original (trimmed) tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let trimmed = tag.trim();
        let (head, args) = split_tag(trimmed);

        if head.eq_ignore_ascii_case(ARRAY_TAG) {
            return match args {
                Some(inner) if !inner.trim().is_empty() => Self::array(Self::from_tag(inner)),
                _ => Self::Unsupported(UnsupportedTag::new(trimmed)),
            };
        }

        // scalar arguments (length, precision) carry no JSON Schema meaning
        match ScalarKind::from_tag(head) {
            Some(kind) => Self::Scalar(kind),
            None => Self::Unsupported(UnsupportedTag::new(trimmed)),
        }
    }

    /// Innermost element kind, looking through any number of arrays.
    #[must_use]
    pub fn element(&self) -> &Self {
        match self {
            Self::Array(inner) => inner.element(),
            other => other,
        }
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
}

impl Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::Array(inner) => write!(f, "{ARRAY_TAG}({inner})"),
            Self::Unsupported(tag) => f.write_str(tag.as_str()),
        }
    }
}

impl From<String> for AttributeKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<AttributeKind> for String {
    fn from(kind: AttributeKind) -> Self {
        kind.to_string()
    }
}

impl From<ScalarKind> for AttributeKind {
    fn from(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }
}

///
/// UnsupportedTag
///
/// Trimmed model-layer tag the parser did not recognise. Only
/// `AttributeKind::from_tag` constructs one.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct UnsupportedTag(String);

impl UnsupportedTag {
    fn new(tag: &str) -> Self {
        Self(tag.to_string())
    }

    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for UnsupportedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// split_tag
// `HEAD(args)` -> ("HEAD", Some("args")); unbalanced input keeps no args
fn split_tag(tag: &str) -> (&str, Option<&str>) {
    match (tag.find('('), tag.ends_with(')')) {
        (Some(open), true) => (tag[..open].trim(), Some(&tag[open + 1..tag.len() - 1])),
        _ => (tag, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_tags_ignore_arguments_and_case() {
        assert_eq!(
            AttributeKind::from_tag("STRING(255)"),
            AttributeKind::Scalar(ScalarKind::String)
        );
        assert_eq!(
            AttributeKind::from_tag("decimal(10, 2)"),
            AttributeKind::Scalar(ScalarKind::Decimal)
        );
        assert_eq!(AttributeKind::from_tag(" bigint "), AttributeKind::Scalar(ScalarKind::BigInt));
    }

    #[test]
    fn array_tags_nest() {
        let kind = AttributeKind::from_tag("ARRAY(ARRAY(INTEGER))");

        assert_eq!(
            kind,
            AttributeKind::array(AttributeKind::array(ScalarKind::Integer))
        );
        assert_eq!(kind.element(), &AttributeKind::Scalar(ScalarKind::Integer));
        assert_eq!(kind.to_string(), "ARRAY(ARRAY(INTEGER))");
    }

    #[test]
    fn unknown_tags_are_kept_verbatim() {
        assert_eq!(
            AttributeKind::from_tag("JSONB"),
            AttributeKind::unsupported("JSONB")
        );
        assert_eq!(
            AttributeKind::from_tag("ENUM('a', 'b')"),
            AttributeKind::unsupported("ENUM('a', 'b')")
        );
        assert_eq!(
            AttributeKind::from_tag("ARRAY(JSON)"),
            AttributeKind::array(AttributeKind::unsupported("JSON"))
        );
    }

    #[test]
    fn serde_uses_tag_strings() {
        let kind = AttributeKind::array(ScalarKind::BigInt);
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"ARRAY(BIGINT)\"");

        let decoded: AttributeKind = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, kind);
    }

    #[test]
    fn recognised_tags_never_become_unsupported() {
        assert_eq!(
            AttributeKind::unsupported("TEXT"),
            AttributeKind::Scalar(ScalarKind::Text)
        );
        assert_eq!(
            AttributeKind::unsupported("ARRAY(INTEGER)"),
            AttributeKind::array(ScalarKind::Integer)
        );
    }

    #[test]
    fn unsupported_kinds_survive_serde() {
        for tag in ["JSONB", "ENUM('a', 'b')", "ARRAY()", "ARRAY(STRING", "DATEONLY"] {
            let kind = AttributeKind::from_tag(tag);
            let json = serde_json::to_string(&kind).unwrap();
            let decoded: AttributeKind = serde_json::from_str(&json).unwrap();

            assert!(matches!(decoded, AttributeKind::Unsupported(_)), "{tag}");
            assert_eq!(decoded, kind);
        }

        let nested = AttributeKind::from_tag("ARRAY(ARRAY(JSON))");
        let json = serde_json::to_string(&nested).unwrap();
        assert_eq!(json, "\"ARRAY(ARRAY(JSON))\"");
        assert_eq!(serde_json::from_str::<AttributeKind>(&json).unwrap(), nested);
    }

    #[test]
    fn dateonly_is_not_date() {
        let kind = AttributeKind::from_tag("DATEONLY");

        assert_eq!(kind, AttributeKind::unsupported("DATEONLY"));
        assert!(matches!(&kind, AttributeKind::Unsupported(tag) if tag.as_str() == "DATEONLY"));
        assert_eq!(
            AttributeKind::from_tag("DATE"),
            AttributeKind::Scalar(ScalarKind::Date)
        );
    }

    #[test]
    fn malformed_array_tags_are_unsupported() {
        assert_eq!(
            AttributeKind::from_tag("ARRAY()"),
            AttributeKind::unsupported("ARRAY()")
        );
        assert_eq!(
            AttributeKind::from_tag("ARRAY(STRING"),
            AttributeKind::unsupported("ARRAY(STRING")
        );
        assert_eq!(
            AttributeKind::from_tag("ARRAY"),
            AttributeKind::unsupported("ARRAY")
        );
    }
}
