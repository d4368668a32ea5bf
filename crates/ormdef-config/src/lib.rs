//! TOML configuration of per-model definition filters.
//!
//! ```toml
//! [defaults]
//! exclude = ["password"]
//!
//! [models.user]
//! attributes = ["id", "email", "password"]
//! ```

use ormdef_core::schema::FilterOptions;
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// Config
///
/// `defaults` apply to every model; a `models.<name>` entry refines them.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub defaults: FilterOptions,
    pub models: BTreeMap<String, FilterOptions>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        text.parse()
    }

    /// Effective filter options for one model.
    ///
    /// The model's allow-list replaces the default one when present; the
    /// deny-lists are combined, defaults first.
    #[must_use]
    pub fn options_for(&self, model: &str) -> FilterOptions {
        let Some(entry) = self.models.get(model) else {
            return self.defaults.clone();
        };

        let mut exclude = self.defaults.exclude.clone();
        for name in &entry.exclude {
            if !exclude.contains(name) {
                exclude.push(name.clone());
            }
        }

        FilterOptions {
            attributes: entry
                .attributes
                .clone()
                .or_else(|| self.defaults.attributes.clone()),
            exclude,
        }
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
