use crate::model::attribute::AttributeModel;
use ormdef_primitives::ScalarKind;
use serde::{Deserialize, Serialize};

/// Name of the implicit identity attribute.
pub const ID_ATTRIBUTE: &str = "id";

/// Name of the implicit creation timestamp attribute.
pub const CREATED_AT_ATTRIBUTE: &str = "createdAt";

/// Name of the implicit update timestamp attribute.
pub const UPDATED_AT_ATTRIBUTE: &str = "updatedAt";

///
/// AttributeSource
///
/// Narrow capability an ORM adapter implements to feed the definition
/// builder: a model name plus its ordered attribute sequence, implicit
/// attributes included.
///

pub trait AttributeSource {
    /// Stable model name used in diagnostics.
    fn model_name(&self) -> &str;

    /// Ordered attribute metadata, or `None` when the model exposes none.
    fn attributes(&self) -> Option<&[AttributeModel]>;
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn attributes(&self) -> Option<&[AttributeModel]> {
        (**self).attributes()
    }
}

///
/// ModelOptions
/// Controls which implicit attributes `ModelDescriptor::define` injects.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ModelOptions {
    pub id: bool,
    pub timestamps: bool,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            id: true,
            timestamps: true,
        }
    }
}

///
/// ModelDescriptor
/// Owned, ordered attribute metadata for one model.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub name: String,
    pub attributes: Vec<AttributeModel>,
}

impl ModelDescriptor {
    /// Model with exactly the given attributes and nothing implicit.
    #[must_use]
    pub fn new(name: impl Into<String>, attributes: Vec<AttributeModel>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// Define a model the way the ORM does: identity first, declared
    /// attributes next, timestamps last.
    #[must_use]
    pub fn define(name: impl Into<String>, attributes: Vec<AttributeModel>) -> Self {
        Self::define_with(name, attributes, ModelOptions::default())
    }

    /// As `define`, choosing which implicit attributes to inject.
    ///
    /// A declared attribute named like an implicit one takes its place,
    /// keeping the implicit position.
    #[must_use]
    pub fn define_with(
        name: impl Into<String>,
        attributes: Vec<AttributeModel>,
        options: ModelOptions,
    ) -> Self {
        let mut declared = attributes;
        let mut take = |implicit: AttributeModel| match declared
            .iter()
            .position(|attr| attr.name == implicit.name)
        {
            Some(pos) => declared.remove(pos),
            None => implicit,
        };

        let mut head = Vec::new();
        let mut tail = Vec::new();

        if options.id {
            head.push(take(
                AttributeModel::new(ID_ATTRIBUTE, ScalarKind::Integer).not_null(),
            ));
        }
        if options.timestamps {
            tail.push(take(
                AttributeModel::new(CREATED_AT_ATTRIBUTE, ScalarKind::Date).not_null(),
            ));
            tail.push(take(
                AttributeModel::new(UPDATED_AT_ATTRIBUTE, ScalarKind::Date).not_null(),
            ));
        }

        head.extend(declared);
        head.extend(tail);

        Self::new(name, head)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeModel> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Attribute names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|attr| attr.name.as_str())
    }
}

impl AttributeSource for ModelDescriptor {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> Option<&[AttributeModel]> {
        Some(&self.attributes)
    }
}
