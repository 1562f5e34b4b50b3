//! SQLite schema definitions and SQL statement constants.
//!
//! All SQL used by the SQLite repository lives here as pure data. Statements
//! use positional parameters exclusively.

/// SQL statement to create the persons table.
///
/// Idempotent: safe to run on every startup.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS persons (
    id INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT,
    mobile TEXT NOT NULL
);
"#;

/// The id column is omitted: SQLite assigns the rowid on insertion.
pub const INSERT_PERSON: &str = r#"
INSERT INTO persons (name, email, mobile)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_ALL_PERSONS: &str = r#"
SELECT id, name, email, mobile
FROM persons
ORDER BY id ASC
"#;

pub const SELECT_PERSON_BY_ID: &str = r#"
SELECT id, name, email, mobile
FROM persons
WHERE id = ?1
"#;

pub const UPDATE_PERSON: &str = r#"
UPDATE persons
SET name = ?2, email = ?3, mobile = ?4
WHERE id = ?1
"#;

pub const DELETE_PERSON: &str = r#"
DELETE FROM persons
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS persons"));
        assert!(CREATE_TABLES.contains("mobile TEXT NOT NULL"));
    }

    #[test]
    fn test_insert_omits_id_column() {
        assert!(INSERT_PERSON.contains("INSERT"));
        assert!(!INSERT_PERSON.contains("id"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(SELECT_ALL_PERSONS.contains("ORDER BY id"));
        assert!(SELECT_PERSON_BY_ID.contains("WHERE id = ?1"));
        assert!(UPDATE_PERSON.contains("UPDATE"));
        assert!(UPDATE_PERSON.contains("WHERE id = ?1"));
        assert!(DELETE_PERSON.contains("DELETE"));
    }
}
