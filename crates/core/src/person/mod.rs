mod types;

pub use types::{CreatePerson, Person, UpdatePerson};
