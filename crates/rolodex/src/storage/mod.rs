//! Storage backend implementations.
//!
//! Concrete implementations of [`rolodex_core::storage::PersonRepository`].
//! The SQLite backend is the production default and is selected via the
//! `sqlite` feature; the in-memory backend is always available for tests and
//! for running without persistence.

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

pub use inmemory::InMemoryRepository;
