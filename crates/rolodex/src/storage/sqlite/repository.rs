//! SQLite repository implementation.
//!
//! Implements [`PersonRepository`] using a single shared `tokio-rusqlite`
//! connection. Each operation executes exactly one SQL statement.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use rolodex_core::person::Person;
use rolodex_core::storage::{PersonRepository, RepositoryError, Result};

use super::conversions::row_to_person;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// The connection is shared for the process lifetime; tokio-rusqlite runs it
/// on a dedicated worker thread, so concurrent callers queue their statements
/// rather than contending on a lock.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file is created if it doesn't exist and the persons
    /// table is ensured before the repository is handed out. A failure here
    /// is fatal to startup.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema. Idempotent.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl PersonRepository for SqliteRepository {
    async fn insert(&self, person: &Person) -> Result<i64> {
        let name = person.name.clone();
        let email = person.email.clone();
        let mobile = person.mobile.clone();

        self.conn
            .call(move |conn| {
                // Any caller-supplied id is ignored: the statement omits the
                // id column and SQLite assigns the rowid.
                conn.execute(schema::INSERT_PERSON, rusqlite::params![name, email, mobile])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Person", "new"))
    }

    async fn list(&self) -> Result<Vec<Person>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_PERSONS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_person).map_err(wrap_err)?;

                let mut persons = Vec::new();
                for row_result in rows {
                    persons.push(row_result.map_err(wrap_err)?);
                }
                Ok(persons)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn get(&self, id: i64) -> Result<Option<Person>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PERSON_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_person) {
                    Ok(person) => Ok(Some(person)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Person", id.to_string()))
    }

    async fn update(&self, id: i64, person: &Person) -> Result<()> {
        let name = person.name.clone();
        let email = person.email.clone();
        let mobile = person.mobile.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_PERSON,
                        rusqlite::params![id, name, email, mobile],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Person", id.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                // Affecting zero rows is not an error: delete is idempotent.
                conn.execute(schema::DELETE_PERSON, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Person", id.to_string()))
    }
}
