use crate::schema::PropertyFragment;
use ormdef_primitives::JsonType;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::fmt;

///
/// Definition
///
/// JSON Schema `object` definition for one model.
/// `properties` and `required` both follow retained attribute order.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Definition {
    #[serde(rename = "type")]
    pub ty: JsonType,
    pub properties: PropertyMap,
    pub required: Vec<String>,
}

impl Definition {
    #[must_use]
    pub const fn new(properties: PropertyMap, required: Vec<String>) -> Self {
        Self {
            ty: JsonType::Object,
            properties,
            required,
        }
    }

    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

///
/// PropertyMap
///
/// Insertion-ordered name → fragment map. Serializes as a JSON object whose
/// key order is insertion order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PropertyMap {
    entries: Vec<(String, PropertyFragment)>,
}

impl PropertyMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert or replace a fragment. Replacing keeps the original position.
    ///
    /// Each call scans existing keys, so building a map this way is
    /// quadratic; `push` skips the scan when names are known to be unique.
    pub fn insert(&mut self, name: impl Into<String>, fragment: PropertyFragment) {
        let name = name.into();

        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = fragment,
            None => self.entries.push((name, fragment)),
        }
    }

    /// Append a fragment without checking for an existing key.
    pub(crate) fn push(&mut self, name: impl Into<String>, fragment: PropertyFragment) {
        self.entries.push((name.into(), fragment));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyFragment> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, fragment)| fragment)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyFragment)> {
        self.entries
            .iter()
            .map(|(key, fragment)| (key.as_str(), fragment))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, PropertyFragment)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, PropertyFragment)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, fragment) in iter {
            map.insert(name, fragment);
        }

        map
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, fragment) in &self.entries {
            map.serialize_entry(name, fragment)?;
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropertyMapVisitor;

        impl<'de> Visitor<'de> for PropertyMapVisitor {
            type Value = PropertyMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of property names to fragments")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = PropertyMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, fragment)) =
                    access.next_entry::<String, PropertyFragment>()?
                {
                    map.insert(name, fragment);
                }

                Ok(map)
            }
        }

        deserializer.deserialize_map(PropertyMapVisitor)
    }
}
