//! Models shaped like the ones an ORM `define` call produces.

use crate::model::{attribute::AttributeModel, entity::ModelDescriptor, kind::AttributeKind};
use ormdef_primitives::ScalarKind;

pub(crate) fn empty() -> ModelDescriptor {
    ModelDescriptor::define("empty", Vec::new())
}

pub(crate) fn simple() -> ModelDescriptor {
    ModelDescriptor::define(
        "simple",
        vec![
            AttributeModel::new("title", ScalarKind::String),
            AttributeModel::new("description", ScalarKind::Text),
        ],
    )
}

pub(crate) fn arrays() -> ModelDescriptor {
    ModelDescriptor::define(
        "arrays",
        vec![
            AttributeModel::new("names", AttributeKind::array(ScalarKind::String)),
            AttributeModel::new("ages", AttributeKind::array(ScalarKind::Integer)),
            AttributeModel::new("biggerInt", AttributeKind::array(ScalarKind::BigInt)),
            AttributeModel::new("balances", AttributeKind::array(ScalarKind::Decimal)),
        ],
    )
}

pub(crate) fn private() -> ModelDescriptor {
    ModelDescriptor::define(
        "private",
        vec![
            AttributeModel::new("title", ScalarKind::String),
            AttributeModel::new("password", ScalarKind::String),
        ],
    )
}

pub(crate) fn secret() -> ModelDescriptor {
    ModelDescriptor::define(
        "secret",
        vec![
            AttributeModel::new("title", ScalarKind::String),
            AttributeModel::new("password", ScalarKind::String).not_null(),
            AttributeModel::new("secret", ScalarKind::Integer),
        ],
    )
}
