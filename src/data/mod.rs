/// Data layer: dataset types, loading, and row lookup.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │   Dataset     │  category → ordered indicator rows
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  category lookup + RowPredicate → matched row
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
