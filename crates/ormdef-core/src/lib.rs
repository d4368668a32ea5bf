//! Core of ormdef: model attribute metadata in, JSON Schema object
//! definitions out.
//!
//! Everything here is pure. No I/O, no global state; tracing goes to a sink
//! the caller passes in.
#![warn(unreachable_pub)]

pub mod error;
pub mod model;
pub mod obs;
pub mod schema;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Domain vocabulary only; errors and sinks are imported explicitly.
///

pub mod prelude {
    pub use crate::{
        model::{
            attribute::AttributeModel,
            entity::{AttributeSource, ModelDescriptor, ModelOptions},
            kind::AttributeKind,
        },
        schema::{Definition, FilterOptions, PropertyFragment},
    };
    pub use ormdef_primitives::{JsonFormat, JsonType, ScalarKind};
}
