/// Data layer: core types, loading, filtering and reshaping.
///
/// Architecture:
/// ```text
///  data/nba_data_processed.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset          (once, via cache)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  positions ∩ age range → surviving records
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  mean PTS per (age, position) → wide AggregatedTable
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  reshape  │  wide → long ChartSeries for the line chart
///   └──────────┘
/// ```

pub mod aggregate;
pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;
pub mod reshape;
