// Adapters layer: concrete implementations of the domain ports.

pub mod memory;
pub mod postgres;
pub mod queries;
pub mod storage;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use storage::LocalStorage;
