use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized form of a legacy list request.
///
/// `page_number` and `page_size` keep the raw signed values the client sent;
/// normalization happens when the page envelope is planned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[must_use]
pub struct SearchSpec {
    pub keyword: Option<String>,
    pub advanced_search: Option<AdvancedSearch>,
    /// Ordering entries. Each entry may itself hold comma-separated names, any of
    /// which may carry a `-` (descending) or `+` (ascending) prefix.
    pub ordering: Vec<String>,
    pub page_number: i64,
    pub page_size: i64,
    /// Reference filters keyed by legacy field name, e.g. `categoryId`. Values are raw
    /// identifiers in either legacy or canonical form.
    pub filters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedSearch {
    pub keyword: Option<String>,
    pub fields: Vec<AdvancedField>,
    /// Accepted for wire compatibility; grouping is not applied.
    pub group_by: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedField {
    #[serde(alias = "field")]
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl SearchSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn advanced_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.advanced_search
            .get_or_insert_with(AdvancedSearch::default)
            .keyword = Some(keyword.into());
        self
    }

    pub fn advanced_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.advanced_search
            .get_or_insert_with(AdvancedSearch::default)
            .fields
            .push(AdvancedField {
                name: name.into(),
                value: value.into(),
            });
        self
    }

    pub fn order_by(mut self, entry: impl Into<String>) -> Self {
        self.ordering.push(entry.into());
        self
    }

    pub fn page(mut self, page_number: i64, page_size: i64) -> Self {
        self.page_number = page_number;
        self.page_size = page_size;
        self
    }

    pub fn filter(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.filters.insert(name.into(), raw.into());
        self
    }

    pub fn advanced_fields(&self) -> &[AdvancedField] {
        self.advanced_search
            .as_ref()
            .map(|advanced| advanced.fields.as_slice())
            .unwrap_or_default()
    }
}
