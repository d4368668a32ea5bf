use crate::{
    model::{attribute::AttributeModel, entity::ModelDescriptor, kind::AttributeKind},
    schema::{FilterOptions, build_definition, map_type},
};
use ormdef_primitives::{ALL_SCALAR_KINDS, JsonType, ScalarKind};
use proptest::prelude::*;

const NAMES: [&str; 8] = [
    "title", "body", "password", "secret", "score", "tags", "owner", "flag",
];

fn arb_scalar() -> impl Strategy<Value = ScalarKind> {
    prop::sample::select(ALL_SCALAR_KINDS.to_vec())
}

fn arb_kind() -> impl Strategy<Value = AttributeKind> {
    arb_scalar()
        .prop_map(AttributeKind::Scalar)
        .prop_recursive(3, 8, 1, |inner| inner.prop_map(AttributeKind::array))
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES.to_vec()).prop_map(str::to_string)
}

fn arb_model() -> impl Strategy<Value = ModelDescriptor> {
    prop::sample::subsequence(NAMES.to_vec(), 0..=NAMES.len())
        .prop_shuffle()
        .prop_flat_map(|names| {
            let len = names.len();
            (
                Just(names),
                prop::collection::vec((arb_kind(), any::<bool>()), len),
            )
        })
        .prop_map(|(names, columns)| {
            let attributes = names
                .into_iter()
                .zip(columns)
                .map(|(name, (kind, allow_null))| {
                    let attr = AttributeModel::new(name, kind);
                    if allow_null { attr } else { attr.not_null() }
                })
                .collect();

            ModelDescriptor::define("generated", attributes)
        })
}

fn arb_options() -> impl Strategy<Value = FilterOptions> {
    (
        prop::option::of(prop::collection::vec(arb_name(), 0..6)),
        prop::collection::vec(arb_name(), 0..4),
    )
        .prop_map(|(attributes, exclude)| FilterOptions {
            attributes,
            exclude,
        })
}

proptest! {
    #[test]
    fn excluded_names_never_appear(model in arb_model(), options in arb_options()) {
        let def = build_definition(&model, &options).unwrap();

        for name in &options.exclude {
            prop_assert!(!def.properties.contains_key(name));
        }
    }

    #[test]
    fn allow_list_bounds_properties(model in arb_model(), options in arb_options()) {
        let def = build_definition(&model, &options).unwrap();

        if let Some(allowed) = &options.attributes {
            for key in def.properties.keys() {
                prop_assert!(allowed.iter().any(|a| a == key));
            }
        }
    }

    #[test]
    fn required_is_exactly_the_retained_non_nullable(
        model in arb_model(),
        options in arb_options(),
    ) {
        let def = build_definition(&model, &options).unwrap();
        let expected: Vec<&str> = model
            .attributes
            .iter()
            .filter(|attr| options.retains(&attr.name) && attr.is_required())
            .map(|attr| attr.name.as_str())
            .collect();

        prop_assert_eq!(&def.required, &expected);
        for name in &def.required {
            prop_assert!(def.properties.contains_key(name));
        }
    }

    #[test]
    fn properties_follow_declaration_order(model in arb_model(), options in arb_options()) {
        let def = build_definition(&model, &options).unwrap();
        let expected: Vec<&str> = model.names().filter(|n| options.retains(n)).collect();

        prop_assert_eq!(def.properties.keys().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn builds_are_deterministic(model in arb_model(), options in arb_options()) {
        let first = build_definition(&model, &options).unwrap();
        let second = build_definition(&model, &options).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn array_depth_is_preserved(kind in arb_kind()) {
        let fragment = map_type(&kind).unwrap();

        let mut expected_depth = 0;
        let mut cursor = &kind;
        while let AttributeKind::Array(inner) = cursor {
            expected_depth += 1;
            cursor = &**inner;
        }

        prop_assert_eq!(fragment.depth(), expected_depth);
        prop_assert_eq!(fragment.ty == JsonType::Array, kind.is_array());
    }

    #[test]
    fn tag_display_parses_back(kind in arb_kind()) {
        prop_assert_eq!(AttributeKind::from_tag(&kind.to_string()), kind);
    }
}
