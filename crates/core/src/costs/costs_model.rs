//! Cost catalog domain models.

use serde::Serialize;

/// A single named cost input (e.g. transport, rent).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CostField {
    /// Stable key, also used as the import column header
    pub key: &'static str,
    pub label: &'static str,
    pub help: &'static str,
}

/// A group of related cost fields shown together during input collection.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CostCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [CostField],
}

impl CostCategory {
    /// Looks up one of this category's fields by key.
    pub fn field(&self, key: &str) -> Option<&'static CostField> {
        self.fields.iter().find(|field| field.key == key)
    }
}
