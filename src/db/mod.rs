//! Storage layer for option contracts.

mod memory;
mod pool;
mod postgres;
mod repository;

pub use memory::InMemoryOptionRepository;
pub use pool::DatabasePool;
pub use postgres::PgOptionRepository;
pub use repository::{OptionRepository, RepositoryError};
