/// Data layer: core types, loading, filtering and annotation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, sites, payload bounds
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  payload range / site → owned working copy
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ annotate  │  booster category → "FT-(66.7%)"
///   └──────────┘
/// ```

pub mod annotate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
