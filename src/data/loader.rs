use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Dataset, PlayerRecord, Position};

/// Header names of the columns the dashboard reads.
pub const POSITION_COLUMN: &str = "Pos";
pub const AGE_COLUMN: &str = "Age";
pub const POINTS_COLUMN: &str = "PTS";
pub const PLAYER_COLUMN: &str = "Player";
pub const TEAM_COLUMN: &str = "Tm";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a dataset could not be loaded. Every variant is fatal for the page.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed delimited file {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed JSON file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has no '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{} row {row}: '{value}' is not a valid {column}", path.display())]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    #[error("unsupported file extension '.{extension}' for {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a player dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`         – comma-delimited with a header row
/// * `.tsv`, `.tab` – tab-delimited with a header row
/// * `.json`        – `[{ "Pos": "PG", "Age": 25, "PTS": 20.1, ... }, ...]`
///
/// `Pos`, `Age` and `PTS` are required; `Player` and `Tm` are picked up when
/// present and every other column is ignored.
pub fn load_file(path: &Path) -> Result<Dataset, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_delimited(path, b',')?,
        "tsv" | "tab" => load_delimited(path, b'\t')?,
        "json" => load_json(path)?,
        other => {
            return Err(DataLoadError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            })
        }
    };

    log::info!(
        "Loaded {} player rows from {} (positions: {:?})",
        dataset.len(),
        path.display(),
        dataset.positions()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Delimited-text loader
// ---------------------------------------------------------------------------

fn load_delimited(path: &Path, delimiter: u8) -> Result<Dataset, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source| DataLoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let required = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataLoadError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
    };
    let pos_idx = required(POSITION_COLUMN)?;
    let age_idx = required(AGE_COLUMN)?;
    let pts_idx = required(POINTS_COLUMN)?;
    let player_idx = headers.iter().position(|h| h == PLAYER_COLUMN);
    let team_idx = headers.iter().position(|h| h == TEAM_COLUMN);

    let mut records = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(csv_err)?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");
        let optional = |idx: Option<usize>| {
            idx.map(cell)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        records.push(PlayerRecord {
            player: optional(player_idx),
            team: optional(team_idx),
            position: parse_position(cell(pos_idx), path, row)?,
            age: parse_age(cell(age_idx), path, row)?,
            points: parse_points(cell(pts_idx), path, row)?,
        });
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Player": "A. Guard", "Pos": "PG", "Age": 25, "Tm": "BOS", "PTS": 20.1 },
///   ...
/// ]
/// ```
///
/// Numeric cells may also be given as strings.
fn load_json(path: &Path) -> Result<Dataset, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| DataLoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let invalid = |row: usize, column: &str, value: String| DataLoadError::InvalidValue {
        path: path.to_path_buf(),
        row,
        column: column.to_string(),
        value,
    };

    let rows = root
        .as_array()
        .ok_or_else(|| invalid(0, "record array", root.to_string()))?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, rec) in rows.iter().enumerate() {
        let row = i + 1;
        let obj = rec
            .as_object()
            .ok_or_else(|| invalid(row, "record", rec.to_string()))?;

        let required = |name: &str| {
            obj.get(name)
                .map(json_cell_text)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    path: path.to_path_buf(),
                    column: name.to_string(),
                })
        };
        let optional = |name: &str| {
            obj.get(name)
                .map(json_cell_text)
                .filter(|s| !s.is_empty())
        };

        records.push(PlayerRecord {
            player: optional(PLAYER_COLUMN),
            team: optional(TEAM_COLUMN),
            position: parse_position(&required(POSITION_COLUMN)?, path, row)?,
            age: parse_age(&required(AGE_COLUMN)?, path, row)?,
            points: parse_points(&required(POINTS_COLUMN)?, path, row)?,
        });
    }

    Ok(Dataset::from_records(records))
}

fn json_cell_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.trim().to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Cell parsing shared by both loaders
// ---------------------------------------------------------------------------

fn parse_position(s: &str, path: &Path, row: usize) -> Result<Position, DataLoadError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(invalid_value(path, row, POSITION_COLUMN, s));
    }
    Ok(Position::new(s))
}

/// Ages are whole years; integral floats such as `"25.0"` are accepted.
fn parse_age(s: &str, path: &Path, row: usize) -> Result<u32, DataLoadError> {
    let s = s.trim();
    if let Ok(age) = s.parse::<u32>() {
        return Ok(age);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 => {
            Ok(v as u32)
        }
        _ => Err(invalid_value(path, row, AGE_COLUMN, s)),
    }
}

fn parse_points(s: &str, path: &Path, row: usize) -> Result<f64, DataLoadError> {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid_value(path, row, POINTS_COLUMN, s)),
    }
}

fn invalid_value(path: &Path, row: usize, column: &str, value: &str) -> DataLoadError {
    DataLoadError::InvalidValue {
        path: path.to_path_buf(),
        row,
        column: column.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn here() -> &'static Path {
        Path::new("players.csv")
    }

    #[test]
    fn age_accepts_integral_floats() {
        assert_eq!(parse_age("25", here(), 1).unwrap(), 25);
        assert_eq!(parse_age(" 31.0 ", here(), 1).unwrap(), 31);
        assert!(parse_age("25.5", here(), 1).is_err());
        assert!(parse_age("-3", here(), 1).is_err());
        assert!(parse_age("", here(), 1).is_err());
    }

    #[test]
    fn points_reject_non_finite_and_blank() {
        assert_eq!(parse_points("12.75", here(), 1).unwrap(), 12.75);
        assert!(parse_points("NaN", here(), 2).is_err());
        assert!(parse_points("inf", here(), 2).is_err());
        assert!(parse_points("", here(), 2).is_err());
    }

    #[test]
    fn invalid_value_message_names_row_and_column() {
        let err = parse_points("abc", here(), 7).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 7"), "{msg}");
        assert!(msg.contains("PTS"), "{msg}");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("players.xlsx")).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::UnsupportedFormat { ref extension, .. } if extension == "xlsx"
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));
    }
}
