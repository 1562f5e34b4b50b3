//! In-memory storage backend.
//!
//! Stores persons in a `HashMap` behind a `tokio::sync::RwLock` and mimics
//! the engine-assigned id behavior of the SQLite backend with an atomic
//! counter. Data is lost when the repository is dropped.

mod repository;

pub use repository::InMemoryRepository;
