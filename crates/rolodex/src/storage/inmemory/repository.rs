//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use rolodex_core::person::Person;
use rolodex_core::storage::{PersonRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Ids are assigned from a monotonically increasing counter starting at 1,
/// matching the rowid behavior of the SQLite backend.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    persons: Arc<RwLock<HashMap<i64, Person>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            persons: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl PersonRepository for InMemoryRepository {
    async fn insert(&self, person: &Person) -> Result<i64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut persons = self.persons.write().await;
        // Any caller-supplied id is discarded.
        persons.insert(id, person.clone().with_id(id));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Person>> {
        let persons = self.persons.read().await;
        let mut all: Vec<Person> = persons.values().cloned().collect();
        all.sort_by_key(|p| p.id);
        Ok(all)
    }

    async fn get(&self, id: i64) -> Result<Option<Person>> {
        let persons = self.persons.read().await;
        Ok(persons.get(&id).cloned())
    }

    async fn update(&self, id: i64, person: &Person) -> Result<()> {
        let mut persons = self.persons.write().await;
        if !persons.contains_key(&id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Person",
                id: id.to_string(),
            });
        }
        persons.insert(id, person.clone().with_id(id));
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut persons = self.persons.write().await;
        persons.remove(&id);
        Ok(())
    }
}
