mod message_kind;
mod message_query;
mod message_record;
mod message_stats;

pub use message_kind::MessageKind;
pub use message_query::{MessageQuery, QueryResult};
pub use message_record::MessageRecord;
pub use message_stats::MessageStats;
