pub mod connection;
pub mod entity;
pub mod error;
pub mod lookups;
pub mod repository;
pub mod row;

mod entities;

pub use connection::{MIGRATOR, connect};
pub use entity::{ChildOf, Entity, SqliteQuery};
pub use error::{DbError, Result};
pub use repository::SqliteRepository;
