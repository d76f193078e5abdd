/// Data layer: results document, loading, and series selection.
///
/// Architecture:
/// ```text
///   results.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read + parse → ResultsDocument
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ResultsDocument │  density / speciesDensity lookup
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  select   │  filter indices → Profile (x-axis + traces)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod select;
