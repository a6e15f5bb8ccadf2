pub mod connection;
pub mod matches;
pub mod models;
pub mod players;
pub mod setup;
pub mod statistics;
pub mod tournaments;

pub use connection::{create_memory_pool, create_pool, create_pool_with_size, get_connection, DbConn, DbPool};
pub use models::*;
