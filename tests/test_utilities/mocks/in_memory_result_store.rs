use cve_crawl::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// ResultStoreRepository keeping the report in memory
#[derive(Default, Clone)]
pub struct InMemoryResultStore {
    previous: ResultStore,
    saved: Arc<Mutex<Option<ResultStore>>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_previous(previous: ResultStore) -> Self {
        Self {
            previous,
            saved: Arc::default(),
        }
    }

    /// Store handed to `save`, if any
    pub fn saved(&self) -> Option<ResultStore> {
        self.saved.lock().unwrap().clone()
    }
}

impl ResultStoreRepository for InMemoryResultStore {
    fn load(&self, _path: &Path) -> Result<ResultStore> {
        Ok(self.previous.clone())
    }

    fn save(&self, _path: &Path, store: &ResultStore) -> Result<()> {
        *self.saved.lock().unwrap() = Some(store.clone());
        Ok(())
    }
}
