//! Message store crate: message records and the lookups over them.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – MessageKind, MessageRecord, MessageQuery, QueryResult, MessageStats
//! - [`repository`] – Repository trait
//! - [`message_repo`] – MessageRepository (in-memory, read-only)
//! - [`lookup`] – Lookup trait behind `MessageRepository::search`

mod error;
mod lookup;
mod message_repo;
mod models;
mod repository;


pub use error::StorageError;
pub use lookup::Lookup;
pub use message_repo::MessageRepository;
pub use models::{MessageKind, MessageQuery, MessageRecord, MessageStats, QueryResult};
pub use repository::Repository;
