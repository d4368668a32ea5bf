//! JSON Schema projection of model metadata.

pub mod builder;
pub mod definition;
pub mod fragment;
pub mod mapper;
pub mod options;

#[cfg(test)]
mod tests;

pub use builder::{build_definition, build_definition_traced};
pub use definition::{Definition, PropertyMap};
pub use fragment::PropertyFragment;
pub use mapper::map_type;
pub use options::{FilterOptions, SkipReason};
