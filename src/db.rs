pub mod coldstart_repository;
pub mod error;
pub mod models;

pub use coldstart_repository::ColdstartRepository;
pub use error::DbError;
pub use models::*;
