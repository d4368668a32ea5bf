use ormdef_primitives::{JsonFormat, JsonType, ScalarKind};
use serde::{Deserialize, Serialize};

///
/// PropertyFragment
///
/// JSON Schema descriptor for one attribute value.
/// `item` is present exactly when `ty` is `array`.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PropertyFragment {
    #[serde(rename = "type")]
    pub ty: JsonType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<JsonFormat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Box<Self>>,
}

impl PropertyFragment {
    #[must_use]
    pub const fn scalar(ty: JsonType, format: Option<JsonFormat>) -> Self {
        Self {
            ty,
            format,
            item: None,
        }
    }

    #[must_use]
    pub fn array(item: Self) -> Self {
        Self {
            ty: JsonType::Array,
            format: None,
            item: Some(Box::new(item)),
        }
    }

    /// Array nesting depth; zero for scalars.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.item.as_ref().map_or(0, |item| 1 + item.depth())
    }
}

impl From<ScalarKind> for PropertyFragment {
    fn from(kind: ScalarKind) -> Self {
        let meta = kind.metadata();

        Self::scalar(meta.json_type, meta.format)
    }
}
