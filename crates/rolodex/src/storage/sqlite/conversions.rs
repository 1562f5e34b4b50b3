//! SQLite row conversion functions.

use rusqlite::Row;

use rolodex_core::person::Person;

/// Convert a SQLite row to a Person.
///
/// Expected columns: id, name, email, mobile
pub fn row_to_person(row: &Row) -> rusqlite::Result<Person> {
    Ok(Person {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        mobile: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sqlite::schema;

    #[test]
    fn test_row_to_person_with_and_without_email() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(schema::CREATE_TABLES).unwrap();
        conn.execute(
            schema::INSERT_PERSON,
            rusqlite::params!["A", Some("a@x.com"), "123"],
        )
        .unwrap();
        conn.execute(
            schema::INSERT_PERSON,
            rusqlite::params!["B", None::<String>, "456"],
        )
        .unwrap();

        let mut stmt = conn.prepare(schema::SELECT_ALL_PERSONS).unwrap();
        let persons: Vec<Person> = stmt
            .query_map([], row_to_person)
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();

        assert_eq!(persons.len(), 2);
        assert_eq!(persons[0].id, Some(1));
        assert_eq!(persons[0].email.as_deref(), Some("a@x.com"));
        assert_eq!(persons[1].email, None);
        assert_eq!(persons[1].mobile, "456");
    }
}
