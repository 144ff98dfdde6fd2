//! Criterion-driven lookup used by [`MessageRepository::search`].
//!
//! Each criterion type picks its own result shape through `Output`.

use crate::message_repo::MessageRepository;
use crate::models::{MessageKind, MessageQuery, MessageRecord, QueryResult};

pub trait Lookup {
    type Output<'a>;

    fn lookup(self, repo: &MessageRepository) -> Self::Output<'_>;
}

impl Lookup for MessageKind {
    type Output<'a> = Vec<&'a MessageRecord>;

    fn lookup(self, repo: &MessageRepository) -> Self::Output<'_> {
        repo.find_by_type(self)
    }
}

impl Lookup for &str {
    type Output<'a> = Vec<&'a MessageRecord>;

    fn lookup(self, repo: &MessageRepository) -> Self::Output<'_> {
        repo.find_by_type_name(self)
    }
}

impl Lookup for i64 {
    type Output<'a> = Option<&'a MessageRecord>;

    fn lookup(self, repo: &MessageRepository) -> Self::Output<'_> {
        repo.find_by_id(self)
    }
}

impl Lookup for &MessageQuery {
    type Output<'a> = QueryResult<'a>;

    fn lookup(self, repo: &MessageRepository) -> Self::Output<'_> {
        repo.query(self)
    }
}
