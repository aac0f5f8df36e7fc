//! Load-once cache for catalogues.
//!
//! A catalogue is read from disk the first time a path is requested and the
//! same `Arc<Catalogue>` is handed out afterwards. Failed loads are not
//! cached, so a later call retries the read.

use crate::error::Result;
use crate::types::Catalogue;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

#[derive(Debug, Default)]
pub struct CatalogueCache {
    entries: Mutex<HashMap<PathBuf, Arc<Catalogue>>>,
}

impl CatalogueCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached catalogue for `path`, loading it on first use
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Catalogue>> {
        let key = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        // The lock is held across the load so concurrent callers read the file once
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(catalogue) = entries.get(&key) {
            debug!("Catalogue cache hit for {}", key.display());
            return Ok(Arc::clone(catalogue));
        }

        let catalogue = Arc::new(Catalogue::load_from_file(path)?);
        entries.insert(key, Arc::clone(&catalogue));
        Ok(catalogue)
    }

    /// Number of catalogues currently cached
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
