//! Query input and result for the dual-mode lookup.
//!
//! Used by MessageRepository::query. The variant of [`MessageQuery`] decides the
//! shape of the [`QueryResult`]: id lookups yield at most one record, type lookups
//! yield every match in collection order.

use serde::Serialize;

use super::{MessageKind, MessageRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageQuery {
    Id(i64),
    Type(MessageKind),
    /// Loosely typed tag, compared against [`MessageKind::as_str`] exactly.
    /// Tags outside the known kinds match nothing.
    TypeName(String),
}

impl MessageQuery {
    /// Numeric input becomes an id lookup; anything else is a type lookup.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Ok(id) = trimmed.parse::<i64>() {
            return MessageQuery::Id(id);
        }
        match trimmed.parse::<MessageKind>() {
            Ok(kind) => MessageQuery::Type(kind),
            Err(_) => MessageQuery::TypeName(trimmed.to_string()),
        }
    }
}

impl From<i64> for MessageQuery {
    fn from(id: i64) -> Self {
        MessageQuery::Id(id)
    }
}

impl From<MessageKind> for MessageQuery {
    fn from(kind: MessageKind) -> Self {
        MessageQuery::Type(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryResult<'a> {
    Many(Vec<&'a MessageRecord>),
    One(Option<&'a MessageRecord>),
}

impl<'a> QueryResult<'a> {
    pub fn len(&self) -> usize {
        match self {
            QueryResult::Many(records) => records.len(),
            QueryResult::One(record) => usize::from(record.is_some()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens either shape into a list of matches.
    pub fn into_vec(self) -> Vec<&'a MessageRecord> {
        match self {
            QueryResult::Many(records) => records,
            QueryResult::One(record) => record.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dispatches_on_input_kind() {
        assert_eq!(MessageQuery::parse("1"), MessageQuery::Id(1));
        assert_eq!(MessageQuery::parse(" -7 "), MessageQuery::Id(-7));
        assert_eq!(MessageQuery::parse("image"), MessageQuery::Type(MessageKind::Image));
        assert_eq!(
            MessageQuery::parse("AUDIO"),
            MessageQuery::TypeName("AUDIO".to_string())
        );
    }

    #[test]
    fn query_result_serializes_per_shape() {
        let record = MessageRecord::new(1, MessageKind::Image, "hi");
        let many = QueryResult::Many(vec![&record]);
        let none = QueryResult::One(None);

        assert_eq!(
            serde_json::to_string(&many).unwrap(),
            r#"[{"id":1,"type":"Image","msg":"hi"}]"#
        );
        assert_eq!(serde_json::to_string(&none).unwrap(), "null");
        assert!(none.is_empty());
        assert_eq!(many.into_vec().len(), 1);
    }
}
