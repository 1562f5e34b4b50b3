use serde::{Deserialize, Serialize};

/// A person in the directory.
///
/// `id` is assigned by the storage engine on insertion and is `None` for
/// instances that have not been persisted yet. Once assigned it never
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Option<i64>,
    pub name: String,
    pub email: Option<String>,
    pub mobile: String,
}

impl Person {
    /// Creates a new, not-yet-persisted person.
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: None,
            mobile: mobile.into(),
        }
    }

    /// Sets the email address for this person.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets a specific ID for this person (assigned by the storage engine).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns `true` once the storage engine has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Request payload for creating a new person.
///
/// Carries no id: the storage engine assigns one on insertion.
#[derive(Debug, Deserialize)]
pub struct CreatePerson {
    pub name: String,
    pub email: Option<String>,
    pub mobile: String,
}

impl CreatePerson {
    /// Converts the payload into a not-yet-persisted [`Person`].
    pub fn into_person(self) -> Person {
        Person {
            id: None,
            name: self.name,
            email: self.email,
            mobile: self.mobile,
        }
    }
}

/// Request payload for updating an existing person.
///
/// The row to update is identified by the `id` query parameter; an `id`
/// field in the body, if present, is ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct UpdatePerson {
    pub name: String,
    pub email: Option<String>,
    pub mobile: String,
}

impl UpdatePerson {
    /// Converts the payload into a not-yet-persisted [`Person`] holding the
    /// replacement field values.
    pub fn into_person(self) -> Person {
        Person {
            id: None,
            name: self.name,
            email: self.email,
            mobile: self.mobile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_person_has_no_id() {
        let person = Person::new("Rayene Amina", "05842154");
        assert_eq!(person.id, None);
        assert!(!person.is_persisted());
    }

    #[test]
    fn test_with_id_marks_person_persisted() {
        let person = Person::new("Rayene Amina", "05842154").with_id(7);
        assert_eq!(person.id, Some(7));
        assert!(person.is_persisted());
    }

    #[test]
    fn test_unpersisted_person_serializes_null_id() {
        let person = Person::new("A", "123").with_email("a@x.com");
        let json = serde_json::to_value(&person).unwrap();

        assert_eq!(json["id"], serde_json::Value::Null);
        assert_eq!(json["name"], "A");
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["mobile"], "123");
    }

    #[test]
    fn test_create_payload_without_email() {
        let payload: CreatePerson =
            serde_json::from_str(r#"{"name":"A","mobile":"123"}"#).unwrap();
        let person = payload.into_person();

        assert_eq!(person.email, None);
        assert_eq!(person.id, None);
    }

    #[test]
    fn test_update_payload_ignores_body_id() {
        let payload: UpdatePerson =
            serde_json::from_str(r#"{"id":42,"name":"A","email":"a@x.com","mobile":"999"}"#)
                .unwrap();
        let person = payload.into_person();

        assert_eq!(person.id, None);
        assert_eq!(person.mobile, "999");
    }
}
