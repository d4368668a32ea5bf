// NOTE: DATE maps to a string with a date-time format; it is not numeric.
// NOTE: integer width is carried by `format` only; the JSON type stays `integer`.
#[macro_export]
macro_rules! scalar_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                BigInt,
                "BIGINT",
                json_type = Integer,
                format = Some($crate::JsonFormat::Int64)
            ),
            (
                Boolean,
                "BOOLEAN",
                json_type = Boolean,
                format = None
            ),
            (
                Date,
                "DATE",
                json_type = String,
                format = Some($crate::JsonFormat::DateTime)
            ),
            (
                Decimal,
                "DECIMAL",
                json_type = Number,
                format = None
            ),
            (
                Double,
                "DOUBLE",
                json_type = Number,
                format = None
            ),
            (
                Float,
                "FLOAT",
                json_type = Number,
                format = None
            ),
            (
                Integer,
                "INTEGER",
                json_type = Integer,
                format = Some($crate::JsonFormat::Int32)
            ),
            (
                String,
                "STRING",
                json_type = String,
                format = None
            ),
            (
                Text,
                "TEXT",
                json_type = String,
                format = None
            ),
        }
    };
}

#[macro_export]
macro_rules! scalar_kind_registry {
    ($macro:ident) => {
        $crate::scalar_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::scalar_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($scalar:ident, $tag:literal, json_type = $json_type:ident, format = $format:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ScalarKind::$scalar => $crate::ScalarMetadata {
                    tag: $tag,
                    json_type: $crate::JsonType::$json_type,
                    format: $format,
                },
            )*
        }
    };
}

macro_rules! kind_from_tag_registry {
    ( @args $tag_expr:expr; @entries $( ($scalar:ident, $tag:literal, json_type = $json_type:ident, format = $format:expr) ),* $(,)? ) => {
        match $tag_expr {
            $(
                $tag => Some($crate::ScalarKind::$scalar),
            )*
            _ => None,
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($scalar:ident, $tag:literal, json_type = $json_type:ident, format = $format:expr) ),* $(,)? ) => {
        [ $( $crate::ScalarKind::$scalar ),* ]
    };
}
