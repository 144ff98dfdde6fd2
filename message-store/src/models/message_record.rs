//! Message record model.
//!
//! JSON shape is `{ "id": 1, "type": "Image", "msg": "..." }`.

use serde::{Deserialize, Serialize};

use super::MessageKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub message_type: MessageKind,
    #[serde(rename = "msg")]
    pub content: String,
}

impl MessageRecord {
    pub fn new(id: i64, message_type: MessageKind, content: impl Into<String>) -> Self {
        Self {
            id,
            message_type,
            content: content.into(),
        }
    }
}
