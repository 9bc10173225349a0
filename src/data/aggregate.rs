use std::collections::{BTreeMap, BTreeSet};

use super::filter::{filter_records, FilterCriteria};
use super::model::{Dataset, Position};

/// Value shown for an (age, position) slot that has no players.
pub const FILL_VALUE: f64 = 0.0;

/// Mean points of one (age, position) group and how many players it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStats {
    pub mean: f64,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// AggregatedTable – the wide pivot (rows = age, columns = position)
// ---------------------------------------------------------------------------

/// Wide table of average points, rows sorted by age ascending and columns by
/// position code.
///
/// Cells keep `None` for groups without players so "no data" stays
/// distinguishable from a real zero; [`value`](Self::value) applies the fill
/// value for display.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedTable {
    ages: Vec<u32>,
    positions: Vec<Position>,
    /// Row-major, `ages.len() * positions.len()`.
    cells: Vec<Option<CellStats>>,
    fill_value: f64,
}

impl AggregatedTable {
    /// A table with no rows and no columns.
    pub fn empty() -> Self {
        AggregatedTable {
            ages: Vec::new(),
            positions: Vec::new(),
            cells: Vec::new(),
            fill_value: FILL_VALUE,
        }
    }

    /// Assemble a table from sorted row/column keys and row-major cells.
    pub(crate) fn from_parts(
        ages: Vec<u32>,
        positions: Vec<Position>,
        cells: Vec<Option<CellStats>>,
        fill_value: f64,
    ) -> Self {
        debug_assert_eq!(cells.len(), ages.len() * positions.len());
        AggregatedTable {
            ages,
            positions,
            cells,
            fill_value,
        }
    }

    /// Replace the value used for empty cells.
    pub fn with_fill_value(mut self, fill_value: f64) -> Self {
        self.fill_value = fill_value;
        self
    }

    pub fn fill_value(&self) -> f64 {
        self.fill_value
    }

    pub fn ages(&self) -> &[u32] {
        &self.ages
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn row_count(&self) -> usize {
        self.ages.len()
    }

    pub fn column_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    /// Raw group statistics; `None` where no player matched.
    pub fn stats(&self, row: usize, col: usize) -> Option<CellStats> {
        if row >= self.row_count() || col >= self.column_count() {
            return None;
        }
        self.cells[row * self.column_count() + col]
    }

    /// Display value of a cell, fill value applied.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.stats(row, col)
            .map(|s| s.mean)
            .unwrap_or(self.fill_value)
    }

    /// Display value by key; `None` if the age or position is not part of
    /// the table's layout.
    pub fn lookup(&self, age: u32, position: &Position) -> Option<f64> {
        let row = self.ages.binary_search(&age).ok()?;
        let col = self.positions.binary_search(position).ok()?;
        Some(self.value(row, col))
    }

    /// Iterate `(age, cells)` rows in ascending age order.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &[Option<CellStats>])> + '_ {
        let width = self.column_count().max(1);
        self.ages
            .iter()
            .copied()
            .zip(self.cells.chunks(width))
    }
}

impl Default for AggregatedTable {
    fn default() -> Self {
        AggregatedTable::empty()
    }
}

// ---------------------------------------------------------------------------
// Filter + group-by mean
// ---------------------------------------------------------------------------

/// Filter the dataset and pivot mean points into a wide table.
///
/// Rows are the ages and columns the positions that have at least one
/// surviving record. An empty selection or an age window that excludes every
/// record yields [`AggregatedTable::empty`].
pub fn aggregate(dataset: &Dataset, criteria: &FilterCriteria) -> AggregatedTable {
    let mut groups: BTreeMap<(u32, &Position), (f64, usize)> = BTreeMap::new();
    let mut ages: BTreeSet<u32> = BTreeSet::new();
    let mut positions: BTreeSet<&Position> = BTreeSet::new();

    for rec in filter_records(dataset, criteria) {
        let (sum, count) = groups.entry((rec.age, &rec.position)).or_insert((0.0, 0));
        *sum += rec.points;
        *count += 1;
        ages.insert(rec.age);
        positions.insert(&rec.position);
    }

    if groups.is_empty() {
        return AggregatedTable::empty();
    }

    let ages: Vec<u32> = ages.into_iter().collect();
    let positions: Vec<Position> = positions.into_iter().cloned().collect();

    let mut cells = Vec::with_capacity(ages.len() * positions.len());
    for &age in &ages {
        for pos in &positions {
            cells.push(groups.get(&(age, pos)).map(|&(sum, count)| CellStats {
                mean: sum / count as f64,
                count,
            }));
        }
    }

    log::debug!(
        "Aggregated {} groups into {} ages x {} positions",
        groups.len(),
        ages.len(),
        positions.len()
    );

    AggregatedTable::from_parts(ages, positions, cells, FILL_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PlayerRecord;

    fn pg_c_dataset() -> Dataset {
        Dataset::from_records(vec![
            PlayerRecord::new("PG", 25, 20.0),
            PlayerRecord::new("PG", 25, 10.0),
            PlayerRecord::new("C", 30, 15.0),
        ])
    }

    #[test]
    fn pivots_means_and_zero_fills() {
        let ds = pg_c_dataset();
        let criteria = FilterCriteria::new(vec![Position::new("PG"), Position::new("C")], (20, 35));
        let table = aggregate(&ds, &criteria);

        assert_eq!(table.ages(), &[25, 30]);
        let codes: Vec<&str> = table.positions().iter().map(Position::as_str).collect();
        assert_eq!(codes, ["C", "PG"]);

        assert_eq!(table.lookup(25, &"PG".into()), Some(15.0));
        assert_eq!(table.lookup(25, &"C".into()), Some(0.0));
        assert_eq!(table.lookup(30, &"PG".into()), Some(0.0));
        assert_eq!(table.lookup(30, &"C".into()), Some(15.0));

        assert_eq!(table.stats(0, 1), Some(CellStats { mean: 15.0, count: 2 }));
        assert_eq!(table.stats(0, 0), None);
    }

    #[test]
    fn empty_selection_gives_empty_table() {
        let ds = pg_c_dataset();
        let table = aggregate(&ds, &FilterCriteria::new(Vec::<Position>::new(), (20, 35)));
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.rows().count(), 0);
    }

    #[test]
    fn selected_position_without_players_gets_no_column() {
        let ds = pg_c_dataset();
        let criteria = FilterCriteria::new(vec![Position::new("PG"), Position::new("SF")], (20, 35));
        let table = aggregate(&ds, &criteria);
        assert_eq!(table.positions(), &[Position::new("PG")]);
        assert_eq!(table.ages(), &[25]);
    }

    #[test]
    fn fill_value_can_be_replaced() {
        let ds = pg_c_dataset();
        let criteria = FilterCriteria::new(vec![Position::new("PG"), Position::new("C")], (20, 35));
        let table = aggregate(&ds, &criteria).with_fill_value(f64::NAN);
        assert!(table.value(0, 0).is_nan());
        assert_eq!(table.value(0, 1), 15.0);
    }

    #[test]
    fn out_of_bounds_cells_are_empty() {
        let table = AggregatedTable::empty();
        assert_eq!(table.stats(3, 3), None);
        assert_eq!(table.value(0, 0), FILL_VALUE);
        assert_eq!(table.lookup(25, &"PG".into()), None);
    }
}
