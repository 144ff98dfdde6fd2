//! Message repository: an ordered, read-only collection of messages and the
//! lookups over it.
//!
//! Records are loaded once (built-in samples, a JSON string or a JSON file) and
//! never mutated afterwards. Every lookup is a linear scan in insertion order.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::StorageError;
use crate::lookup::Lookup;
use crate::models::{MessageKind, MessageQuery, MessageRecord, MessageStats, QueryResult};
use crate::repository::Repository;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRepository {
    records: Vec<MessageRecord>,
}

impl MessageRepository {
    /// Takes ownership of `records` in the given order. Duplicate ids are kept;
    /// id lookups return the first one.
    pub fn new(records: Vec<MessageRecord>) -> Self {
        let repo = Self { records };
        for id in repo.duplicate_ids() {
            warn!(id, "Duplicate message id; lookups by id return the first record");
        }
        repo
    }

    /// The built-in two-message collection: one image, one video.
    pub fn sample() -> Self {
        Self::new(vec![
            MessageRecord::new(1, MessageKind::Image, "我是1 - I"),
            MessageRecord::new(2, MessageKind::Video, "我是2 - V"),
        ])
    }

    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        let records: Vec<MessageRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let repo = Self::from_json(&json)?;
        info!(path = %path.display(), count = repo.records.len(), "Loaded messages");
        Ok(repo)
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records of the given type, in collection order. Never fails; no
    /// match yields an empty list.
    pub fn find_by_type(&self, kind: MessageKind) -> Vec<&MessageRecord> {
        let found: Vec<&MessageRecord> = self
            .records
            .iter()
            .filter(|m| m.message_type == kind)
            .collect();
        debug!(message_type = %kind, count = found.len(), "find_by_type");
        found
    }

    /// Like [`find_by_type`](Self::find_by_type) for callers holding a raw tag.
    /// Compares against the canonical kind value exactly.
    pub fn find_by_type_name(&self, name: &str) -> Vec<&MessageRecord> {
        let found: Vec<&MessageRecord> = self
            .records
            .iter()
            .filter(|m| m.message_type.as_str() == name)
            .collect();
        debug!(message_type = name, count = found.len(), "find_by_type_name");
        found
    }

    /// First record with this id, or `None`.
    pub fn find_by_id(&self, id: i64) -> Option<&MessageRecord> {
        let found = self.records.iter().find(|m| m.id == id);
        debug!(id, found = found.is_some(), "find_by_id");
        found
    }

    pub fn query(&self, query: &MessageQuery) -> QueryResult<'_> {
        match query {
            MessageQuery::Id(id) => QueryResult::One(self.find_by_id(*id)),
            MessageQuery::Type(kind) => QueryResult::Many(self.find_by_type(*kind)),
            MessageQuery::TypeName(name) => QueryResult::Many(self.find_by_type_name(name)),
        }
    }

    /// Single entry point whose result type follows the criterion:
    /// `search(MessageKind::Image)` gives a `Vec`, `search(1_i64)` an `Option`.
    pub fn search<L: Lookup>(&self, criterion: L) -> L::Output<'_> {
        criterion.lookup(self)
    }

    /// Records whose content contains `keyword`, in collection order.
    pub fn search_messages(&self, keyword: &str, limit: Option<usize>) -> Vec<&MessageRecord> {
        let found: Vec<&MessageRecord> = self
            .records
            .iter()
            .filter(|m| m.content.contains(keyword))
            .take(limit.unwrap_or(usize::MAX))
            .collect();
        info!("Found {} messages matching '{}'", found.len(), keyword);
        found
    }

    pub fn stats(&self) -> MessageStats {
        let images = self.find_by_type(MessageKind::Image).len();
        let videos = self.find_by_type(MessageKind::Video).len();
        MessageStats {
            total: self.records.len(),
            images,
            videos,
            duplicate_ids: self.duplicate_ids(),
        }
    }

    fn duplicate_ids(&self) -> Vec<i64> {
        let mut seen: HashMap<i64, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for record in &self.records {
            let count = seen.entry(record.id).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(record.id);
            }
        }
        duplicates
    }
}

impl Repository<MessageRecord> for MessageRepository {
    fn find_by_id(&self, id: i64) -> Option<&MessageRecord> {
        MessageRepository::find_by_id(self, id)
    }

    fn find_all(&self) -> &[MessageRecord] {
        &self.records
    }
}
