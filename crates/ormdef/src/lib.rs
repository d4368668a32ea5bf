//! ormdef: JSON Schema object definitions from ORM model metadata.
//!
//! ## Crate layout
//! - `core`: attribute model, type mapper, definition builder, trace sinks.
//! - `config`: TOML configuration of per-model filters (feature `config`).
//! - `primitives`: scalar and JSON Schema vocabularies.
//! - `error`: stable public error taxonomy.
//!
//! ```ignore
//! use ormdef::prelude::*;
//!
//! let user = ModelDescriptor::define(
//!     "user",
//!     vec![
//!         AttributeModel::new("email", ScalarKind::String).not_null(),
//!         AttributeModel::new("password", ScalarKind::String).not_null(),
//!     ],
//! );
//! let def = ormdef::definition(&user, &FilterOptions::new().exclude(["password"]))?;
//! ```

#[cfg(feature = "config")]
pub use ormdef_config as config;
pub use ormdef_core as core;
pub use ormdef_primitives as primitives;

pub mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};

use ormdef_core::{
    model::entity::AttributeSource,
    obs::DefinitionTraceSink,
    schema::{self, Definition, FilterOptions},
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// definition
/// Build the JSON Schema object definition for `model`.
///
pub fn definition<S>(model: &S, options: &FilterOptions) -> Result<Definition, Error>
where
    S: AttributeSource + ?Sized,
{
    schema::build_definition(model, options).map_err(Error::from)
}

///
/// definition_traced
/// As `definition`, reporting build progress to `sink`.
///
pub fn definition_traced<S>(
    model: &S,
    options: &FilterOptions,
    sink: &dyn DefinitionTraceSink,
) -> Result<Definition, Error>
where
    S: AttributeSource + ?Sized,
{
    schema::build_definition_traced(model, options, sink).map_err(Error::from)
}

///
/// definition_from_config
/// Build with the filter options `config` holds for this model's name.
///
#[cfg(feature = "config")]
pub fn definition_from_config<S>(model: &S, config: &config::Config) -> Result<Definition, Error>
where
    S: AttributeSource + ?Sized,
{
    definition(model, &config.options_for(model.model_name()))
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::{Error as OrmdefError, definition};
}
