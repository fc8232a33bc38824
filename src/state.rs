//! Application state management.

use crate::db::{DatabasePool, InMemoryOptionRepository, OptionRepository, PgOptionRepository};
use crate::service::OptionService;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Option contract operations.
    pub options: OptionService,
}

impl AppState {
    /// Creates a new application state without database.
    #[must_use]
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryOptionRepository::new()))
    }

    /// Creates a new application state with database.
    #[must_use]
    pub fn with_database(db: DatabasePool) -> Self {
        Self::with_repository(Arc::new(PgOptionRepository::new(db)))
    }

    /// Creates a new application state over any repository.
    #[must_use]
    pub fn with_repository(repository: Arc<dyn OptionRepository>) -> Self {
        Self {
            options: OptionService::new(repository),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
