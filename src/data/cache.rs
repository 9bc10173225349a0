use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::loader::{load_file, DataLoadError};
use super::model::Dataset;

static SHARED: OnceCell<DatasetCache> = OnceCell::new();

/// Read-only, load-once holder for the dataset at a fixed path.
///
/// The slot is assigned at most once: the first successful [`get`](Self::get)
/// reads the file, every later call hands out the same `Arc`. A failed load
/// leaves the slot empty so the next interaction tries again.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    dataset: OnceCell<Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DatasetCache {
            path: path.into(),
            dataset: OnceCell::new(),
        }
    }

    /// The process-wide cache. The first caller fixes the path; asking for a
    /// different one afterwards still returns the original cache.
    pub fn shared(path: &Path) -> &'static DatasetCache {
        let cache = SHARED.get_or_init(|| DatasetCache::new(path));
        if cache.path != path {
            log::warn!(
                "Dataset cache already bound to {}, ignoring request for {}",
                cache.path.display(),
                path.display()
            );
        }
        cache
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file has already been read successfully.
    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    pub fn get(&self) -> Result<Arc<Dataset>, DataLoadError> {
        self.dataset
            .get_or_try_init(|| load_file(&self.path).map(Arc::new))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_load_is_not_cached() {
        let cache = DatasetCache::new("no/such/dir/players.csv");
        assert!(cache.get().is_err());
        assert!(!cache.is_loaded());
        assert!(cache.get().is_err());
    }

    #[test]
    fn shared_cache_keeps_first_path() {
        let first = DatasetCache::shared(Path::new("data/nba_data_processed.csv"));
        let second = DatasetCache::shared(Path::new("elsewhere.csv"));
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.path(), Path::new("data/nba_data_processed.csv"));
    }
}
