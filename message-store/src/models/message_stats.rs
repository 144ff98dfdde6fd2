//! Aggregate statistics for messages.
//!
//! Returned by MessageRepository::stats.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStats {
    pub total: usize,
    pub images: usize,
    pub videos: usize,
    /// Ids seen more than once, in order of first occurrence.
    pub duplicate_ids: Vec<i64>,
}
