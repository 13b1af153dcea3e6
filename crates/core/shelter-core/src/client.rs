//! CRUD client over a single document collection

use crate::types::{DocumentStore, MatchScope, Query, Record};
use crate::{Result, ShelterError};
use std::sync::Arc;
use tracing::{debug, error};

/// Create/read/update/delete access to one collection.
///
/// `create`, `read`, `update` and `delete` keep the neutral-result contract:
/// backend failures are logged and turned into `false`, an empty vector or
/// `0`, while argument validation errors are always returned. The `try_*`
/// variants surface backend failures instead.
#[derive(Clone)]
pub struct CollectionClient {
    store: Arc<dyn DocumentStore>,
}

impl std::fmt::Debug for CollectionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionClient").finish_non_exhaustive()
    }
}

impl CollectionClient {
    /// Wrap an established store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Insert a record; `true` iff the backend assigned it an identifier
    pub async fn create(&self, record: &Record) -> Result<bool> {
        match self.try_create(record).await {
            Ok(id) => Ok(id.is_some()),
            Err(e) => neutral(e, "Error inserting document", false),
        }
    }

    /// Insert a record, returning the assigned identifier if any
    pub async fn try_create(&self, record: &Record) -> Result<Option<String>> {
        debug!(fields = record.len(), "Inserting document");
        self.store.insert_one(record).await
    }

    /// Every record matching the query
    pub async fn read(&self, query: &Query) -> Result<Vec<Record>> {
        match self.try_read(query).await {
            Ok(records) => Ok(records),
            Err(e) => neutral(e, "Error querying documents", Vec::new()),
        }
    }

    /// Every record matching the query, or the backend error
    pub async fn try_read(&self, query: &Query) -> Result<Vec<Record>> {
        debug!(criteria = query.len(), "Querying documents");
        let records = self.store.find(query).await?;
        debug!("Query matched {} documents", records.len());
        Ok(records)
    }

    /// Set `new_fields` on the first (or, with `update_many`, every) match.
    ///
    /// Returns the number of documents modified.
    pub async fn update(&self, query: &Query, new_fields: &Record, update_many: bool) -> Result<u64> {
        match self.try_update(query, new_fields, update_many).await {
            Ok(count) => Ok(count),
            Err(e) => neutral(e, "Error updating documents", 0),
        }
    }

    /// Like [`CollectionClient::update`] but surfaces backend errors
    pub async fn try_update(
        &self,
        query: &Query,
        new_fields: &Record,
        update_many: bool,
    ) -> Result<u64> {
        let scope = MatchScope::from_many(update_many);
        debug!(?scope, fields = new_fields.len(), "Updating documents");
        self.store.update(query, new_fields, scope).await
    }

    /// Remove the first (or, with `delete_many`, every) match.
    ///
    /// Returns the number of documents deleted.
    pub async fn delete(&self, query: &Query, delete_many: bool) -> Result<u64> {
        match self.try_delete(query, delete_many).await {
            Ok(count) => Ok(count),
            Err(e) => neutral(e, "Error deleting documents", 0),
        }
    }

    /// Like [`CollectionClient::delete`] but surfaces backend errors
    pub async fn try_delete(&self, query: &Query, delete_many: bool) -> Result<u64> {
        let scope = MatchScope::from_many(delete_many);
        debug!(?scope, "Deleting documents");
        self.store.delete(query, scope).await
    }

    /// Check if the backend answers
    pub async fn is_ready(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}

/// Validation errors pass through; anything else is logged and replaced.
fn neutral<T>(err: ShelterError, context: &str, fallback: T) -> Result<T> {
    if err.is_validation() {
        return Err(err);
    }
    error!("{}: {}", context, err);
    Ok(fallback)
}
