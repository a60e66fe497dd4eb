//! Application state for the web layer.

use std::sync::Arc;

use crate::service::SubwayService;
use crate::store::MemoryStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Subway use cases over the in-memory store
    pub subway: Arc<SubwayService<MemoryStore>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(subway: SubwayService<MemoryStore>) -> Self {
        Self {
            subway: Arc::new(subway),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SubwayService::new(MemoryStore::new()))
    }
}
