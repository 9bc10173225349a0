use std::collections::BTreeSet;

use super::model::{Dataset, PlayerRecord, Position};
use crate::config::DashboardConfig;

// ---------------------------------------------------------------------------
// Filter predicate: selected positions + inclusive age window
// ---------------------------------------------------------------------------

/// Inclusive age window. An inverted window (`min > max`) matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub fn new(min: u32, max: u32) -> Self {
        AgeRange { min, max }
    }

    pub fn contains(&self, age: u32) -> bool {
        self.min <= age && age <= self.max
    }
}

impl From<(u32, u32)> for AgeRange {
    fn from((min, max): (u32, u32)) -> Self {
        AgeRange::new(min, max)
    }
}

/// Widget values for one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub positions: BTreeSet<Position>,
    pub ages: AgeRange,
}

impl FilterCriteria {
    pub fn new(positions: impl IntoIterator<Item = Position>, ages: impl Into<AgeRange>) -> Self {
        FilterCriteria {
            positions: positions.into_iter().collect(),
            ages: ages.into(),
        }
    }

    /// Initial selection: the configured default positions that actually
    /// occur in the dataset, and the configured default age window.
    pub fn default_for(dataset: &Dataset, config: &DashboardConfig) -> Self {
        let positions = config
            .default_positions
            .iter()
            .map(|code| Position::new(code.as_str()))
            .filter(|p| dataset.has_position(p));
        FilterCriteria::new(positions, config.default_ages)
    }

    /// A record passes when its position is selected and its age is in range.
    pub fn matches(&self, record: &PlayerRecord) -> bool {
        self.ages.contains(record.age) && self.positions.contains(&record.position)
    }
}

/// Records passing the filter, in source order.
pub fn filter_records<'a>(
    dataset: &'a Dataset,
    criteria: &'a FilterCriteria,
) -> impl Iterator<Item = &'a PlayerRecord> + 'a {
    dataset.records().iter().filter(move |rec| criteria.matches(rec))
}

/// Return indices of records that pass the filter.
pub fn filtered_indices(dataset: &Dataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            PlayerRecord::new("PG", 20, 9.0),
            PlayerRecord::new("C", 30, 15.0),
            PlayerRecord::new("PG", 31, 22.0),
            PlayerRecord::new("SF", 25, 12.0),
        ])
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let ds = sample();
        let criteria = FilterCriteria::new(ds.positions().to_vec(), (20, 30));
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 1, 3]);
    }

    #[test]
    fn empty_selection_matches_nothing() {
        let ds = sample();
        let criteria = FilterCriteria::new(Vec::<Position>::new(), (18, 40));
        assert_eq!(filter_records(&ds, &criteria).count(), 0);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let ds = sample();
        let criteria = FilterCriteria::new(ds.positions().to_vec(), (35, 19));
        assert!(filtered_indices(&ds, &criteria).is_empty());
    }

    #[test]
    fn defaults_only_select_present_positions() {
        let ds = sample();
        let criteria = FilterCriteria::default_for(&ds, &DashboardConfig::default());
        let codes: Vec<&str> = criteria.positions.iter().map(Position::as_str).collect();
        assert_eq!(codes, ["C", "PG", "SF"]);
        assert_eq!(criteria.ages, AgeRange::new(20, 30));
    }
}
