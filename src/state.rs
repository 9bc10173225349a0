use std::sync::Arc;

use crate::color::PositionColors;
use crate::config::DashboardConfig;
use crate::data::aggregate::{aggregate, AggregatedTable};
use crate::data::cache::DatasetCache;
use crate::data::filter::FilterCriteria;
use crate::data::model::{Dataset, Position};
use crate::data::reshape::{melt, ChartSeries};

// ---------------------------------------------------------------------------
// Derived view
// ---------------------------------------------------------------------------

/// Everything drawn for one set of widget values.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub table: AggregatedTable,
    pub series: ChartSeries,
}

impl DashboardView {
    pub fn compute(dataset: &Dataset, criteria: &FilterCriteria) -> Self {
        let table = aggregate(dataset, criteria);
        let series = melt(&table);
        DashboardView { table, series }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset; `None` when loading failed.
    pub dataset: Option<Arc<Dataset>>,

    /// Load failure shown instead of the page.
    pub load_error: Option<String>,

    /// Current widget values.
    pub criteria: FilterCriteria,

    /// Colour per position, fixed for the dataset.
    pub colors: PositionColors,

    /// Table and chart for `criteria` (cached until the next change).
    pub view: DashboardView,
}

impl AppState {
    /// Load (or reuse) the process-wide dataset and set up initial filters.
    pub fn new(config: DashboardConfig) -> Self {
        let cache = DatasetCache::shared(&config.data_path);
        match cache.get() {
            Ok(dataset) => Self::with_dataset(config, dataset),
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                Self::failed(config, e.to_string())
            }
        }
    }

    /// State for an already-loaded dataset.
    pub fn with_dataset(config: DashboardConfig, dataset: Arc<Dataset>) -> Self {
        let criteria = FilterCriteria::default_for(&dataset, &config);
        let colors = PositionColors::new(dataset.positions());
        let view = DashboardView::compute(&dataset, &criteria);
        AppState {
            config,
            dataset: Some(dataset),
            load_error: None,
            criteria,
            colors,
            view,
        }
    }

    fn failed(config: DashboardConfig, message: String) -> Self {
        let (lo, hi) = config.default_ages;
        AppState {
            config,
            dataset: None,
            load_error: Some(message),
            criteria: FilterCriteria::new(Vec::<Position>::new(), (lo, hi)),
            colors: PositionColors::default(),
            view: DashboardView::default(),
        }
    }

    /// Recompute the table and chart after a filter change.
    pub fn refresh(&mut self) {
        if let Some(ds) = &self.dataset {
            self.view = DashboardView::compute(ds, &self.criteria);
            log::debug!(
                "Filters {:?} → {} ages x {} positions",
                self.criteria,
                self.view.table.row_count(),
                self.view.table.column_count()
            );
        }
    }

    /// Toggle a single position in the selection.
    pub fn toggle_position(&mut self, position: &Position) {
        if !self.criteria.positions.remove(position) {
            self.criteria.positions.insert(position.clone());
        }
        self.refresh();
    }

    /// Select every position in the dataset.
    pub fn select_all(&mut self) {
        if let Some(ds) = &self.dataset {
            self.criteria.positions = ds.positions().iter().cloned().collect();
            self.refresh();
        }
    }

    /// Deselect all positions.
    pub fn select_none(&mut self) {
        self.criteria.positions.clear();
        self.refresh();
    }

    /// Move the lower age bound, pushing the upper bound along if needed.
    pub fn set_min_age(&mut self, age: u32) {
        let age = self.clamp_to_slider(age);
        self.criteria.ages.min = age;
        if self.criteria.ages.max < age {
            self.criteria.ages.max = age;
        }
        self.refresh();
    }

    /// Move the upper age bound, pushing the lower bound along if needed.
    pub fn set_max_age(&mut self, age: u32) {
        let age = self.clamp_to_slider(age);
        self.criteria.ages.max = age;
        if self.criteria.ages.min > age {
            self.criteria.ages.min = age;
        }
        self.refresh();
    }

    fn clamp_to_slider(&self, age: u32) -> u32 {
        let (lo, hi) = self.config.age_slider;
        age.clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PlayerRecord;

    fn state() -> AppState {
        let ds = Dataset::from_records(vec![
            PlayerRecord::new("PG", 25, 20.0),
            PlayerRecord::new("PG", 25, 10.0),
            PlayerRecord::new("C", 30, 15.0),
            PlayerRecord::new("SF", 33, 7.0),
        ]);
        AppState::with_dataset(DashboardConfig::default(), Arc::new(ds))
    }

    #[test]
    fn initial_view_uses_default_filters() {
        let st = state();
        assert_eq!(st.view.table.ages(), &[25, 30]);
        assert_eq!(st.view.series.len(), 4);
    }

    #[test]
    fn toggling_positions_recomputes_view() {
        let mut st = state();
        st.toggle_position(&Position::new("C"));
        assert_eq!(st.view.table.positions(), &[Position::new("PG")]);
        st.select_none();
        assert!(st.view.table.is_empty());
        assert!(st.view.series.is_empty());
        st.select_all();
        st.set_max_age(40);
        assert_eq!(st.view.table.ages(), &[25, 30, 33]);
    }

    #[test]
    fn age_bounds_never_cross() {
        let mut st = state();
        st.set_min_age(35);
        assert_eq!((st.criteria.ages.min, st.criteria.ages.max), (35, 35));
        st.set_max_age(19);
        assert_eq!((st.criteria.ages.min, st.criteria.ages.max), (19, 19));
        st.set_max_age(99);
        assert_eq!(st.criteria.ages.max, 40);
    }
}
