//! Shelter MongoDB storage
//!
//! MongoDB backing for the shelter [`CollectionClient`](shelter_core::CollectionClient).
//!
//! ```no_run
//! # async fn run() -> shelter_core::Result<()> {
//! use shelter_core::Record;
//!
//! let shelter = shelter_storage_mongo::connect("aacuser", "secret").await?;
//! shelter.create(&Record::new().with("name", "Rex")).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-exports
pub use shelter_core;

pub mod mongo;

pub use mongo::{connect, connect_with, MongoStore};
