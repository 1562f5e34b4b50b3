use async_trait::async_trait;

use crate::person::Person;

use super::Result;

/// Repository for person operations.
///
/// Every operation maps to exactly one statement against the backing store.
/// Implementations must be safe to call from concurrent request handlers.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Persists a new person and returns the engine-assigned id.
    ///
    /// Any id already set on `person` is ignored.
    async fn insert(&self, person: &Person) -> Result<i64>;

    /// Returns all persisted persons in insertion (id) order.
    async fn list(&self) -> Result<Vec<Person>>;

    /// Gets a person by id, or `None` if no row matches.
    async fn get(&self, id: i64) -> Result<Option<Person>>;

    /// Overwrites name/email/mobile for the row with `id`.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no row has that id.
    ///
    /// [`RepositoryError::NotFound`]: super::RepositoryError::NotFound
    async fn update(&self, id: i64, person: &Person) -> Result<()>;

    /// Removes the row with `id`. Deleting a non-existent id is not an error.
    async fn delete(&self, id: i64) -> Result<()>;
}
