//! # msgq
//!
//! CLI foundation: argument parsing, env config, tracing setup and the command
//! runner over [`message_store::MessageRepository`].

pub mod cli;
pub mod config;
pub mod logger;

pub use cli::{run, Cli, Commands};
pub use config::StoreConfig;
pub use logger::init_tracing;
