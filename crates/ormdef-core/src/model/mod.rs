//! Model-layer input: the attribute metadata an ORM adapter hands to the
//! definition builder.
//!
//! Nothing here knows about JSON Schema; `schema` owns the projection.
pub mod attribute;
pub mod entity;
pub mod kind;
