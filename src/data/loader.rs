use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde_json::Value as JsonValue;

use super::model::{CellValue, Category, Dataset, IndicatorRow};

/// Header of the CSV column holding the category name.
pub const CSV_CATEGORY_COLUMN: &str = "category";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a processed dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `{ "<category>": { "data": [ { "<label_field>": "...", "2015年": 1.0, ... } ] } }`
/// * `.csv`  – long layout, one indicator row per line:
///   `category,<label_field>,2015年,2016年,...`
///
/// `label_field` names the column holding the indicator label (`指标` in the
/// statistics export).
pub fn load_file(path: &Path, label_field: &str) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "json" => load_json(path, label_field),
        "csv" => load_csv(path, label_field),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    info!(
        "loaded {} categories from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path, label_field: &str) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;
    dataset_from_json(&root, label_field)
}

/// Convert an already parsed JSON document into a [`Dataset`].
///
/// Categories without a `data` array are rejected; individual rows that are
/// not objects are rejected as well, since they indicate a broken export.
pub fn dataset_from_json(root: &JsonValue, label_field: &str) -> Result<Dataset> {
    let top = root
        .as_object()
        .context("Expected top-level JSON object keyed by category")?;

    let mut categories = BTreeMap::new();

    for (name, record) in top {
        let rows = record
            .get("data")
            .and_then(JsonValue::as_array)
            .with_context(|| format!("Category '{name}': missing 'data' array"))?;

        let mut data = Vec::with_capacity(rows.len());
        for (i, rec) in rows.iter().enumerate() {
            let obj = rec
                .as_object()
                .with_context(|| format!("Category '{name}', row {i} is not a JSON object"))?;

            let mut row = IndicatorRow::default();
            for (key, val) in obj {
                if key == label_field {
                    row.label = val.as_str().map(str::to_string);
                    continue;
                }
                row.cells.insert(key.clone(), json_to_cell(val));
            }
            if row.label.is_none() {
                debug!("category '{name}', row {i} has no '{label_field}' label");
            }
            data.push(row);
        }

        categories.insert(name.clone(), Category::new(data));
    }

    Ok(Dataset { categories })
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::Number(n) => n.as_f64().map_or(CellValue::Null, CellValue::Number),
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Null => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout:  header row with column names.
/// `category` and the label column identify the row; every other column is a
/// year cell.  Rows keep file order within their category.
fn load_csv(path: &Path, label_field: &str) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let category_idx = headers
        .iter()
        .position(|h| h == CSV_CATEGORY_COLUMN)
        .with_context(|| format!("CSV missing '{CSV_CATEGORY_COLUMN}' column"))?;
    let label_idx = headers
        .iter()
        .position(|h| h == label_field)
        .with_context(|| format!("CSV missing '{label_field}' column"))?;

    let mut categories: BTreeMap<String, Category> = BTreeMap::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let category = record.get(category_idx).unwrap_or("").trim();
        if category.is_empty() {
            bail!("CSV row {row_no}: empty category");
        }

        let mut row = IndicatorRow::default();
        row.label = record
            .get(label_idx)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        for (col_idx, value) in record.iter().enumerate() {
            if col_idx == category_idx || col_idx == label_idx {
                continue;
            }
            row.cells.insert(headers[col_idx].clone(), guess_cell_type(value));
        }

        categories
            .entry(category.to_string())
            .or_default()
            .data
            .push(row);
    }

    Ok(Dataset { categories })
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    match s.parse::<f64>() {
        Ok(v) => CellValue::Number(v),
        Err(_) => CellValue::Text(s.to_string()),
    }
}
