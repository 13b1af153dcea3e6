//! Document store seam between the client contract and the database driver

use super::{Query, Record};
use crate::Result;
use async_trait::async_trait;

/// How many matching documents an update or delete touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    /// Only the first matching document
    First,
    /// Every matching document
    All,
}

impl MatchScope {
    /// Scope selected by an `update_many` / `delete_many` flag
    pub fn from_many(many: bool) -> Self {
        if many {
            MatchScope::All
        } else {
            MatchScope::First
        }
    }
}

/// Backend holding a single document collection
///
/// Implementations report every failure as an error; coercion to neutral
/// results happens in [`crate::CollectionClient`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document, returning the identifier the backend assigned
    async fn insert_one(&self, record: &Record) -> Result<Option<String>>;

    /// All documents matching the query, in backend order
    async fn find(&self, query: &Query) -> Result<Vec<Record>>;

    /// `$set` the given fields on matching documents; returns the modified count
    async fn update(&self, query: &Query, fields: &Record, scope: MatchScope) -> Result<u64>;

    /// Remove matching documents; returns the deleted count
    async fn delete(&self, query: &Query, scope: MatchScope) -> Result<u64>;

    /// Round-trip to the backend
    async fn ping(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_flag() {
        assert_eq!(MatchScope::from_many(false), MatchScope::First);
        assert_eq!(MatchScope::from_many(true), MatchScope::All);
    }
}
