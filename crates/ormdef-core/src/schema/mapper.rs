//! Type mapper: one attribute kind in, one JSON Schema fragment out.

use crate::{error::UnsupportedTypeError, model::kind::AttributeKind, schema::PropertyFragment};

///
/// map_type
/// Project an attribute kind onto the JSON Schema vocabulary.
///
/// Arrays recurse through the same table. An unsupported tag at any depth
/// fails the whole mapping; there is no fallback type.
///
pub fn map_type(kind: &AttributeKind) -> Result<PropertyFragment, UnsupportedTypeError> {
    map_inner(kind, kind)
}

fn map_inner(
    kind: &AttributeKind,
    declared: &AttributeKind,
) -> Result<PropertyFragment, UnsupportedTypeError> {
    match kind {
        AttributeKind::Scalar(scalar) => Ok((*scalar).into()),
        AttributeKind::Array(inner) => map_inner(inner, declared).map(PropertyFragment::array),
        AttributeKind::Unsupported(tag) => {
            Err(UnsupportedTypeError::new(tag.as_str(), declared.to_string()))
        }
    }
}
