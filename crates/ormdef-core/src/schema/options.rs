use serde::{Deserialize, Serialize};

///
/// FilterOptions
///
/// Allow-list / deny-list applied to a model's attribute names.
/// The allow-list is applied first; the deny-list always wins.
/// Names that match no attribute are ignored.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl FilterOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict output to these names.
    #[must_use]
    pub fn only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Drop these names from the output.
    #[must_use]
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether an attribute name survives filtering.
    #[must_use]
    pub fn retains(&self, name: &str) -> bool {
        self.skip_reason(name).is_none()
    }

    #[must_use]
    pub fn skip_reason(&self, name: &str) -> Option<SkipReason> {
        if let Some(allowed) = &self.attributes
            && !allowed.iter().any(|a| a == name)
        {
            return Some(SkipReason::NotAllowed);
        }

        self.exclude
            .iter()
            .any(|e| e == name)
            .then_some(SkipReason::Excluded)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_none() && self.exclude.is_empty()
    }
}

///
/// SkipReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SkipReason {
    NotAllowed,
    Excluded,
}
