//! Core domain types and storage abstractions for the rolodex service.
//!
//! This crate is pure: it defines the `Person` entity, the repository trait
//! the HTTP layer depends on, and the error taxonomy shared by all storage
//! backends. No I/O happens here.

pub mod person;
pub mod storage;
