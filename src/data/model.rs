use std::fmt;

// ---------------------------------------------------------------------------
// Position – a player's role category
// ---------------------------------------------------------------------------

/// Position codes selected when the dashboard first opens.
pub const DEFAULT_POSITION_CODES: [&str; 5] = ["C", "PG", "SG", "SF", "PF"];

/// A player's position code (`"C"`, `"PG"`, ...).
///
/// Kept as an open string rather than a closed enum: the source file may use
/// hybrid codes such as `"SG-PG"`, and those must survive as their own column.
/// Ordering is lexicographic, which is also the column order of the wide table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(String);

impl Position {
    pub fn new(code: impl Into<String>) -> Self {
        let code: String = code.into();
        Position(code.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Position {
    fn from(code: &str) -> Self {
        Position::new(code)
    }
}

// ---------------------------------------------------------------------------
// PlayerRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single player season line. Only the columns the dashboard reads are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub player: Option<String>,
    pub team: Option<String>,
    pub position: Position,
    pub age: u32,
    /// Points per game.
    pub points: f64,
}

impl PlayerRecord {
    pub fn new(position: impl Into<Position>, age: u32, points: f64) -> Self {
        PlayerRecord {
            player: None,
            team: None,
            position: position.into(),
            age,
            points,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Never mutated after construction; filters only
/// ever borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<PlayerRecord>,
    /// Unique positions in order of first appearance.
    positions: Vec<Position>,
    /// Observed (youngest, oldest) age.
    age_bounds: Option<(u32, u32)>,
}

impl Dataset {
    /// Build the position index and age bounds from the loaded records.
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        let mut positions: Vec<Position> = Vec::new();
        let mut age_bounds: Option<(u32, u32)> = None;

        for rec in &records {
            if !positions.contains(&rec.position) {
                positions.push(rec.position.clone());
            }
            age_bounds = Some(match age_bounds {
                None => (rec.age, rec.age),
                Some((lo, hi)) => (lo.min(rec.age), hi.max(rec.age)),
            });
        }

        Dataset {
            records,
            positions,
            age_bounds,
        }
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn age_bounds(&self) -> Option<(u32, u32)> {
        self.age_bounds
    }

    pub fn has_position(&self, position: &Position) -> bool {
        self.positions.contains(position)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
