use std::path::PathBuf;
use std::sync::Arc;

use nba_dashboard::{load_file, DataLoadError, DatasetCache, Position};

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

#[test]
fn csv_fixture_loads_all_rows() {
    let ds = load_file(&fixture("players.csv")).expect("fixture should load");
    assert_eq!(ds.len(), 8);

    let codes: Vec<&str> = ds.positions().iter().map(Position::as_str).collect();
    assert_eq!(codes, ["PG", "C", "SF", "SG", "PF", "SG-PG"]);
    assert_eq!(ds.age_bounds(), Some((19, 36)));

    let first = &ds.records()[0];
    assert_eq!(first.player.as_deref(), Some("Alpha Guard"));
    assert_eq!(first.team.as_deref(), Some("BOS"));
    assert_eq!(first.age, 25);
    assert_eq!(first.points, 20.0);
}

#[test]
fn tsv_and_json_match_the_same_rows() {
    let tsv = load_file(&fixture("players.tsv")).expect("tsv should load");
    assert_eq!(tsv.len(), 2);
    assert_eq!(tsv.records()[1].age, 30);

    let json = load_file(&fixture("players.json")).expect("json should load");
    assert_eq!(json.len(), 3);
    assert_eq!(json.records()[1].age, 25);
    assert_eq!(json.records()[1].points, 10.0);
    assert_eq!(json.records()[1].team, None);
    assert_eq!(json.records()[2].points, 15.0);
}

#[test]
fn nonexistent_path_fails_with_io_error() {
    let err = load_file(&fixture("nope.csv")).unwrap_err();
    assert!(matches!(err, DataLoadError::Io { .. }), "{err:?}");
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn missing_required_column_is_reported() {
    let err = load_file(&fixture("missing_points.csv")).unwrap_err();
    match err {
        DataLoadError::MissingColumn { column, .. } => assert_eq!(column, "PTS"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bad_cell_aborts_whole_load() {
    let err = load_file(&fixture("bad_age.csv")).unwrap_err();
    match err {
        DataLoadError::InvalidValue {
            row, column, value, ..
        } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Age");
            assert_eq!(value, "twenty");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn ragged_rows_are_malformed() {
    let err = load_file(&fixture("ragged.csv")).unwrap_err();
    assert!(matches!(err, DataLoadError::Csv { .. }), "{err:?}");
}

#[test]
fn cache_reads_file_once() {
    let cache = DatasetCache::new(fixture("players.csv"));
    assert!(!cache.is_loaded());
    let a = cache.get().expect("first load");
    let b = cache.get().expect("second load");
    assert!(cache.is_loaded());
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn cache_surfaces_load_errors() {
    let cache = DatasetCache::new(fixture("nope.csv"));
    assert!(matches!(cache.get(), Err(DataLoadError::Io { .. })));
    assert!(!cache.is_loaded());
}
