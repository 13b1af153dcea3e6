//! MongoDB document store
//!
//! Implements [`DocumentStore`] over a single collection using the official
//! driver. Records and queries cross the boundary as relaxed Extended JSON.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::ClientOptions,
    Client, Collection, Database,
};
use serde_json::{Map, Value};
use shelter_core::{
    CollectionClient, Credentials, DocumentStore, MatchScope, Query, Record, Result,
    ShelterConfig, ShelterError,
};
use std::sync::Arc;
use tracing::{debug, info};

/// MongoDB-backed store for one collection
#[derive(Debug, Clone)]
pub struct MongoStore {
    db: Database,
    collection: Collection<Document>,
}

impl MongoStore {
    /// Connect and verify the deployment answers with these credentials
    pub async fn connect(config: &ShelterConfig, credentials: &Credentials) -> Result<Self> {
        info!(
            "Connecting to MongoDB at {}:{} ({})",
            config.host,
            config.port,
            config.namespace()
        );

        let uri = config.connection_uri(credentials)?;

        let client_options = ClientOptions::parse(&uri)
            .await
            .map_err(|e| ShelterError::connection("Failed to parse MongoDB URI", e))?;

        let client = Client::with_options(client_options)
            .map_err(|e| ShelterError::connection("Failed to create MongoDB client", e))?;

        let db = client.database(&config.database);

        // The driver connects lazily; ping so bad credentials fail here
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| ShelterError::connection("Failed to connect to MongoDB", e))?;

        info!("Connected to MongoDB successfully");

        let collection = db.collection::<Document>(&config.collection);

        Ok(Self { db, collection })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, record: &Record) -> Result<Option<String>> {
        let doc = to_document(record.as_map(), "record")?;

        let result = self
            .collection
            .insert_one(doc)
            .await
            .map_err(|e| ShelterError::backend("Failed to insert document", e))?;

        Ok(inserted_id(result.inserted_id))
    }

    async fn find(&self, query: &Query) -> Result<Vec<Record>> {
        let filter = to_document(query.as_map(), "query")?;

        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| ShelterError::backend("Failed to query documents", e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| ShelterError::backend("Failed to iterate documents", e))?;

        docs.into_iter().map(to_record).collect()
    }

    async fn update(&self, query: &Query, fields: &Record, scope: MatchScope) -> Result<u64> {
        let filter = to_document(query.as_map(), "query")?;
        let update = set_update(fields)?;

        let result = match scope {
            MatchScope::First => self.collection.update_one(filter, update).await,
            MatchScope::All => self.collection.update_many(filter, update).await,
        }
        .map_err(|e| ShelterError::backend("Failed to update documents", e))?;

        debug!(
            "Update matched {} and modified {} documents",
            result.matched_count, result.modified_count
        );
        Ok(result.modified_count)
    }

    async fn delete(&self, query: &Query, scope: MatchScope) -> Result<u64> {
        let filter = to_document(query.as_map(), "query")?;

        let result = match scope {
            MatchScope::First => self.collection.delete_one(filter).await,
            MatchScope::All => self.collection.delete_many(filter).await,
        }
        .map_err(|e| ShelterError::backend("Failed to delete documents", e))?;

        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<()> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| ShelterError::backend("Ping failed", e))?;
        Ok(())
    }
}

/// Connect to `AAC.animals` with host and port taken from the environment
pub async fn connect(username: &str, password: &str) -> Result<CollectionClient> {
    let config = ShelterConfig::from_env()?;
    connect_with(&config, &Credentials::new(username, password)).await
}

/// Connect using an explicit configuration
pub async fn connect_with(
    config: &ShelterConfig,
    credentials: &Credentials,
) -> Result<CollectionClient> {
    let store = MongoStore::connect(config, credentials).await?;
    Ok(CollectionClient::new(Arc::new(store)))
}

/// Extended JSON object to BSON document
fn to_document(map: &Map<String, Value>, what: &str) -> Result<Document> {
    let bson = Bson::try_from(Value::Object(map.clone())).map_err(|e| {
        ShelterError::invalid_argument(format!("{} is not valid Extended JSON: {}", what, e))
    })?;

    match bson {
        Bson::Document(doc) => Ok(doc),
        other => Err(ShelterError::invalid_argument(format!(
            "{} must be a document, got {:?}",
            what,
            other.element_type()
        ))),
    }
}

/// `$set` update document, so only the listed fields are overwritten
fn set_update(fields: &Record) -> Result<Document> {
    Ok(doc! { "$set": to_document(fields.as_map(), "new fields")? })
}

/// BSON document to relaxed Extended JSON record
fn to_record(doc: Document) -> Result<Record> {
    match Bson::Document(doc).into_relaxed_extjson() {
        Value::Object(map) => Ok(Record::from(map)),
        other => Err(ShelterError::backend_msg(format!(
            "Backend returned a non-document value: {}",
            other
        ))),
    }
}

fn inserted_id(id: Bson) -> Option<String> {
    match id {
        Bson::Null | Bson::Undefined => None,
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
