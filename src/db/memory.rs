use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::IngestError;
use crate::record::MovieRecord;

/// In-memory database backend for local development and testing.
/// Uses `Arc<RwLock<...>>` so it can be `Clone`d across invocations.
#[derive(Clone)]
pub struct MemoryDb {
    movies: Arc<RwLock<HashMap<String, MovieRecord>>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self {
            movies: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn put_movie(&self, record: &MovieRecord) -> Result<(), IngestError> {
        let mut movies = self
            .movies
            .write()
            .map_err(|e| IngestError::Storage(format!("Lock error: {e}")))?;
        movies.insert(record.id.clone(), record.clone());

        Ok(())
    }

    pub fn get_movie(&self, id: &str) -> Option<MovieRecord> {
        self.movies.read().ok()?.get(id).cloned()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.read().map(|movies| movies.len()).unwrap_or(0)
    }

    pub fn movies(&self) -> Vec<MovieRecord> {
        self.movies
            .read()
            .map(|movies| movies.values().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryDb {
    fn default() -> Self {
        Self::new()
    }
}
