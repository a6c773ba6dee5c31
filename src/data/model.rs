use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell of an indicator row
// ---------------------------------------------------------------------------

/// A raw cell as it appears in the processed statistics table.
///
/// Year columns are normally numbers, but the upstream export occasionally
/// writes them as text (`"31194"`) or leaves them empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Null,
}

impl CellValue {
    /// Numeric reading of the cell. Numeric text is accepted, anything else
    /// is treated as a missing value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Null => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

// ---------------------------------------------------------------------------
// IndicatorRow – one labelled series inside a category
// ---------------------------------------------------------------------------

/// One indicator of a category, e.g. "城镇居民人均可支配收入(元)" by year.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorRow {
    /// Display label of the indicator. Some exported rows carry none.
    pub label: Option<String>,
    /// Year label (or any other column key) → cell.
    pub cells: BTreeMap<String, CellValue>,
}

impl IndicatorRow {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            cells: BTreeMap::new(),
        }
    }

    /// Builder-style insertion of a cell.
    pub fn with_cell(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Numeric value stored under `key`, if present and numeric.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.cells.get(key).and_then(CellValue::as_f64)
    }
}

// ---------------------------------------------------------------------------
// Category / Dataset
// ---------------------------------------------------------------------------

/// A top-level group of the dataset, e.g. "城镇居民人均收入情况".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Category {
    /// Rows in source order. Neither sorted nor deduplicated.
    pub data: Vec<IndicatorRow>,
}

impl Category {
    pub fn new(data: Vec<IndicatorRow>) -> Self {
        Self { data }
    }

    /// Sorted set of column keys used by any row (the year labels).
    pub fn column_keys(&self) -> BTreeSet<&str> {
        self.data
            .iter()
            .flat_map(|row| row.cells.keys().map(String::as_str))
            .collect()
    }
}

/// The full processed dataset. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    pub categories: BTreeMap<String, Category>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of a category.
    pub fn with_category(mut self, name: impl Into<String>, rows: Vec<IndicatorRow>) -> Self {
        self.categories.insert(name.into(), Category::new(rows));
        self
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
