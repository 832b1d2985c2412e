//! Storage layer
//!
//! `MemoryStore` keeps articles in process memory; `Database` proxies every
//! operation to PostgreSQL. Both implement `ArticleStore`.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::MemoryStore;
