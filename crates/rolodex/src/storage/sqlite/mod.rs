//! SQLite storage backend implementation.
//!
//! Provides a SQLite-based implementation of [`PersonRepository`] using
//! `rusqlite` for synchronous operations and `tokio-rusqlite` for async
//! wrapping. The connection runs on its own worker thread, which serializes
//! statement execution and makes the shared handle safe to use from
//! concurrent request handlers.
//!
//! [`PersonRepository`]: rolodex_core::storage::PersonRepository

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
