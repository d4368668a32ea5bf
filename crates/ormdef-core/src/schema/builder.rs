//! Definition builder: filter a model's attributes, map each survivor, and
//! assemble the `object` definition.

use crate::{
    error::{BuildError, InputError},
    model::{attribute::AttributeModel, entity::AttributeSource},
    obs::{DefinitionTraceEvent, DefinitionTraceSink, trace::emit},
    schema::{Definition, FilterOptions, PropertyMap, mapper::map_type},
};
use std::collections::HashSet;

///
/// build_definition
/// Build the JSON Schema definition for one model.
///
pub fn build_definition<S>(model: &S, options: &FilterOptions) -> Result<Definition, BuildError>
where
    S: AttributeSource + ?Sized,
{
    build(model, options, None)
}

///
/// build_definition_traced
/// As `build_definition`, reporting progress to `sink`.
///
pub fn build_definition_traced<S>(
    model: &S,
    options: &FilterOptions,
    sink: &dyn DefinitionTraceSink,
) -> Result<Definition, BuildError>
where
    S: AttributeSource + ?Sized,
{
    build(model, options, Some(sink))
}

fn build<S>(
    model: &S,
    options: &FilterOptions,
    sink: Option<&dyn DefinitionTraceSink>,
) -> Result<Definition, BuildError>
where
    S: AttributeSource + ?Sized,
{
    let model_name = model.model_name();
    let attributes = model
        .attributes()
        .ok_or_else(|| InputError::MissingAttributes {
            model: model_name.to_string(),
        })?;
    validate_attributes(model_name, attributes)?;

    emit(
        sink,
        DefinitionTraceEvent::Start {
            model: model_name,
            attributes: attributes.len(),
        },
    );

    let mut properties = PropertyMap::with_capacity(attributes.len());
    let mut required = Vec::new();

    for attr in attributes {
        let name = attr.name.as_str();

        if let Some(reason) = options.skip_reason(name) {
            emit(
                sink,
                DefinitionTraceEvent::Skipped {
                    model: model_name,
                    attribute: name,
                    reason,
                },
            );
            continue;
        }

        let fragment = map_type(&attr.kind).map_err(|source| {
            emit(
                sink,
                DefinitionTraceEvent::Failed {
                    model: model_name,
                    attribute: name,
                },
            );

            BuildError::UnsupportedType {
                model: model_name.to_string(),
                attribute: name.to_string(),
                source,
            }
        })?;

        let is_required = attr.is_required();
        // names are unique once validate_attributes passes
        properties.push(name, fragment);
        if is_required {
            required.push(name.to_string());
        }

        emit(
            sink,
            DefinitionTraceEvent::Mapped {
                model: model_name,
                attribute: name,
                required: is_required,
            },
        );
    }

    emit(
        sink,
        DefinitionTraceEvent::Finish {
            model: model_name,
            properties: properties.len(),
            required: required.len(),
        },
    );

    Ok(Definition::new(properties, required))
}

// validate_attributes
// names must be non-empty and unique within the model
fn validate_attributes(model: &str, attributes: &[AttributeModel]) -> Result<(), InputError> {
    let mut seen = HashSet::with_capacity(attributes.len());

    for (index, attr) in attributes.iter().enumerate() {
        if attr.name.is_empty() {
            return Err(InputError::EmptyAttributeName {
                model: model.to_string(),
                index,
            });
        }
        if !seen.insert(attr.name.as_str()) {
            return Err(InputError::DuplicateAttribute {
                model: model.to_string(),
                name: attr.name.clone(),
            });
        }
    }

    Ok(())
}
