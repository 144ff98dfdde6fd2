//! Message kind: the closed set of media tags a record can carry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    #[serde(rename = "Image")]
    Image,
    #[serde(rename = "Video")]
    Video,
}

impl MessageKind {
    pub const ALL: [MessageKind; 2] = [MessageKind::Image, MessageKind::Video];

    /// Canonical string value, as stored in data files and compared by
    /// [`crate::MessageQuery::TypeName`].
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Image => "Image",
            MessageKind::Video => "Video",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MessageKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| StorageError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!("image".parse::<MessageKind>().unwrap(), MessageKind::Image);
        assert_eq!("IMAGE".parse::<MessageKind>().unwrap(), MessageKind::Image);
        assert_eq!(" Video ".parse::<MessageKind>().unwrap(), MessageKind::Video);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "AUDIO".parse::<MessageKind>().unwrap_err();
        assert!(matches!(err, StorageError::UnknownKind(ref s) if s == "AUDIO"));
    }

    #[test]
    fn serializes_canonical_value() {
        assert_eq!(serde_json::to_string(&MessageKind::Video).unwrap(), "\"Video\"");
        assert_eq!(MessageKind::Image.to_string(), "Image");
    }
}
