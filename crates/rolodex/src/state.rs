//! Application state with repository-based storage.
//!
//! The shared state passed to every request handler. It holds a repository
//! trait object injected at startup; handlers never touch a database handle
//! directly and no ambient global state exists.

use std::sync::Arc;

use rolodex_core::storage::PersonRepository;

use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// Cloned for each request handler. The repository handle is shared for the
/// process lifetime and must support concurrent use.
#[derive(Clone)]
pub struct AppState {
    /// Person repository backing the six endpoints.
    pub person_repo: Arc<dyn PersonRepository>,
}

impl AppState {
    /// Creates a new AppState with the given repository.
    pub fn new(person_repo: Arc<dyn PersonRepository>) -> Self {
        Self { person_repo }
    }

    /// Creates an AppState backed by in-memory storage (tests and dev).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
