//! Shelter core
//!
//! Types and contract for create/read/update/delete access to the Austin
//! Animal Center `animals` collection:
//!
//! - [`CollectionClient`], the CRUD surface with neutral-result coercion
//! - [`Record`] and [`Query`], schema-less JSON mappings
//! - [`DocumentStore`], the seam a database driver implements
//! - environment configuration and logging bootstrap
//!
//! # Example
//!
//! ```no_run
//! use shelter_core::{CollectionClient, Query, Record, Result};
//!
//! async fn adopt(client: &CollectionClient) -> Result<u64> {
//!     let query = Query::new().with("name", "Rex");
//!     let fields = Record::new().with("outcome_type", "Adoption");
//!     client.update(&query, &fields, false).await
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use client::CollectionClient;
pub use config::{load_env, Credentials, ShelterConfig};
pub use error::{Result, ShelterError};
pub use types::*;
pub use utils::init_logging;
