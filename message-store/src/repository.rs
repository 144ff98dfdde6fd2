//! Repository trait for read access to a record collection.
//! Implementations (e.g. [`crate::MessageRepository`]) own the records.

pub trait Repository<T> {
    fn find_by_id(&self, id: i64) -> Option<&T>;
    fn find_all(&self) -> &[T];

    fn count(&self) -> usize {
        self.find_all().len()
    }
}
