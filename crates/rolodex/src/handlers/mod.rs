pub mod error;
pub mod health;
pub mod persons;

pub use error::AppError;
