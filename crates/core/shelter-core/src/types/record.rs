//! Record and query types

use crate::{Result, ShelterError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::{Deref, DerefMut};

/// A schema-less document stored in the collection.
///
/// BSON-only values (ObjectId, dates, ...) use relaxed Extended JSON
/// notation, e.g. `{"_id": {"$oid": "..."}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

/// Field-match criteria selecting zero or more records.
///
/// An empty query matches every document. MongoDB query operators such as
/// `$gt` or `$in` are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(Map<String, Value>);

macro_rules! mapping_newtype {
    ($name:ident, $what:literal) => {
        impl $name {
            /// Empty mapping
            pub fn new() -> Self {
                Self(Map::new())
            }

            /// Parse from a JSON string; anything but an object is rejected
            pub fn from_json_str(json: &str) -> Result<Self> {
                let value: Value = serde_json::from_str(json).map_err(|e| {
                    ShelterError::invalid_argument(format!(
                        "{} is not valid JSON: {}",
                        $what, e
                    ))
                })?;
                Self::try_from(value)
            }

            /// Borrow the underlying map
            pub fn as_map(&self) -> &Map<String, Value> {
                &self.0
            }

            /// Take the underlying map
            pub fn into_inner(self) -> Map<String, Value> {
                self.0
            }

            /// Builder-style insert
            pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
                self.0.insert(key.into(), value.into());
                self
            }
        }

        impl From<Map<String, Value>> for $name {
            fn from(map: Map<String, Value>) -> Self {
                Self(map)
            }
        }

        impl TryFrom<Value> for $name {
            type Error = ShelterError;

            fn try_from(value: Value) -> Result<Self> {
                match value {
                    Value::Object(map) => Ok(Self(map)),
                    other => Err(ShelterError::invalid_argument(format!(
                        "{} must be a JSON object, got {}",
                        $what,
                        json_kind(&other)
                    ))),
                }
            }
        }

        impl From<$name> for Value {
            fn from(mapping: $name) -> Self {
                Value::Object(mapping.0)
            }
        }

        impl Deref for $name {
            type Target = Map<String, Value>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

mapping_newtype!(Record, "record");
mapping_newtype!(Query, "query");

impl Record {
    /// Query matching every field of this record exactly
    pub fn to_query(&self) -> Query {
        Query(self.0.clone())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
