//! Interactive NBA player statistics dashboard.
//!
//! The data layer is UI-independent: [`data::aggregate::aggregate`] filters a
//! [`Dataset`] and pivots mean points per (age, position), and
//! [`data::reshape::melt`] turns that wide table into chart series. The `ui`
//! and [`app`] modules draw both with egui.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;

pub use config::DashboardConfig;
pub use data::aggregate::{aggregate, AggregatedTable, CellStats, FILL_VALUE};
pub use data::cache::DatasetCache;
pub use data::filter::{AgeRange, FilterCriteria};
pub use data::loader::{load_file, DataLoadError};
pub use data::model::{Dataset, PlayerRecord, Position};
pub use data::reshape::{melt, pivot, ChartPoint, ChartSeries};
