use std::collections::{BTreeMap, BTreeSet};

use super::aggregate::{AggregatedTable, CellStats, FILL_VALUE};
use super::model::Position;

/// One long-form row: the average points of a position at an age.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub age: u32,
    pub position: Position,
    pub average_points: f64,
    /// Players behind the average; `0` for a filled-in cell.
    pub count: usize,
}

/// Long ("melted") form of an [`AggregatedTable`], one point per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    points: Vec<ChartPoint>,
    fill_value: f64,
}

impl ChartSeries {
    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Distinct ages, ascending. These are the nominal x-axis categories.
    pub fn age_labels(&self) -> Vec<u32> {
        self.points
            .iter()
            .map(|p| p.age)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Points grouped into one line per position, in first-seen order.
    pub fn lines(&self) -> Vec<(&Position, Vec<&ChartPoint>)> {
        let mut lines: Vec<(&Position, Vec<&ChartPoint>)> = Vec::new();
        for p in &self.points {
            match lines.iter_mut().find(|(pos, _)| *pos == &p.position) {
                Some((_, members)) => members.push(p),
                None => lines.push((&p.position, vec![p])),
            }
        }
        lines
    }
}

/// Unpivot the wide table: for each position column, every age row.
pub fn melt(table: &AggregatedTable) -> ChartSeries {
    let mut points = Vec::with_capacity(table.row_count() * table.column_count());
    for (col, position) in table.positions().iter().enumerate() {
        for (row, &age) in table.ages().iter().enumerate() {
            let stats = table.stats(row, col);
            points.push(ChartPoint {
                age,
                position: position.clone(),
                average_points: table.value(row, col),
                count: stats.map_or(0, |s| s.count),
            });
        }
    }
    ChartSeries {
        points,
        fill_value: table.fill_value(),
    }
}

/// Pivot long-form points back into a wide table. Points with `count == 0`
/// become empty cells, so `pivot(&melt(&t)) == t`.
pub fn pivot(series: &ChartSeries) -> AggregatedTable {
    if series.is_empty() {
        return AggregatedTable::empty().with_fill_value(series.fill_value);
    }

    let mut by_key: BTreeMap<(u32, &Position), &ChartPoint> = BTreeMap::new();
    let mut positions: BTreeSet<&Position> = BTreeSet::new();
    for p in &series.points {
        by_key.insert((p.age, &p.position), p);
        positions.insert(&p.position);
    }

    let ages = series.age_labels();
    let positions: Vec<Position> = positions.into_iter().cloned().collect();

    let mut cells = Vec::with_capacity(ages.len() * positions.len());
    for &age in &ages {
        for pos in &positions {
            cells.push(
                by_key
                    .get(&(age, pos))
                    .filter(|p| p.count > 0)
                    .map(|p| CellStats {
                        mean: p.average_points,
                        count: p.count,
                    }),
            );
        }
    }

    AggregatedTable::from_parts(ages, positions, cells, series.fill_value)
}

impl Default for ChartSeries {
    fn default() -> Self {
        ChartSeries {
            points: Vec::new(),
            fill_value: FILL_VALUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::aggregate;
    use crate::data::filter::FilterCriteria;
    use crate::data::model::{Dataset, PlayerRecord};

    fn table() -> AggregatedTable {
        let ds = Dataset::from_records(vec![
            PlayerRecord::new("PG", 25, 20.0),
            PlayerRecord::new("PG", 25, 10.0),
            PlayerRecord::new("C", 30, 15.0),
            PlayerRecord::new("SF", 27, 0.0),
        ]);
        let criteria = FilterCriteria::new(ds.positions().to_vec(), (20, 35));
        aggregate(&ds, &criteria)
    }

    #[test]
    fn melt_is_column_major() {
        let series = melt(&table());
        let keys: Vec<(&str, u32)> = series
            .points()
            .iter()
            .map(|p| (p.position.as_str(), p.age))
            .collect();
        assert_eq!(
            keys,
            [
                ("C", 25),
                ("C", 27),
                ("C", 30),
                ("PG", 25),
                ("PG", 27),
                ("PG", 30),
                ("SF", 25),
                ("SF", 27),
                ("SF", 30),
            ]
        );
    }

    #[test]
    fn filled_cells_melt_to_zero_with_no_players() {
        let series = melt(&table());
        let c25 = &series.points()[0];
        assert_eq!(c25.average_points, 0.0);
        assert_eq!(c25.count, 0);
        // A genuine zero average keeps its player count.
        let sf27 = series
            .points()
            .iter()
            .find(|p| p.position.as_str() == "SF" && p.age == 27)
            .unwrap();
        assert_eq!(sf27.average_points, 0.0);
        assert_eq!(sf27.count, 1);
    }

    #[test]
    fn pivot_restores_the_wide_table() {
        let original = table();
        assert_eq!(pivot(&melt(&original)), original);
    }

    #[test]
    fn lines_follow_column_order() {
        let series = melt(&table());
        let lines = series.lines();
        let names: Vec<&str> = lines.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(names, ["C", "PG", "SF"]);
        assert!(lines.iter().all(|(_, pts)| pts.len() == 3));
        assert_eq!(series.age_labels(), vec![25, 27, 30]);
    }

    #[test]
    fn empty_table_round_trips() {
        let empty = AggregatedTable::empty();
        let series = melt(&empty);
        assert!(series.is_empty());
        assert!(series.lines().is_empty());
        assert_eq!(pivot(&series), empty);
    }
}
