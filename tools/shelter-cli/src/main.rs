//! Shelter CLI
//!
//! Runs a single create/read/update/delete against `AAC.animals` and prints
//! the result as JSON on stdout.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use shelter_core::config::{get_required_env, PASSWORD_VAR, USERNAME_VAR};
use shelter_core::{CollectionClient, Query, Record};
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// MongoDB username (falls back to MONGO_USERNAME)
    #[arg(short, long)]
    username: Option<String>,

    /// MongoDB password (falls back to MONGO_PASSWORD)
    #[arg(short, long)]
    password: Option<String>,

    /// Fail on backend errors instead of printing false/0/[]
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Insert a record, e.g. '{"name": "Rex", "animal_type": "Dog"}'
    Create {
        /// Record as a JSON object
        record: String,
    },
    /// List records matching a query (all records when omitted)
    Read {
        /// Query as a JSON object
        #[arg(default_value = "{}")]
        query: String,
    },
    /// Set fields on the first (or every) matching record
    Update {
        /// Query as a JSON object
        query: String,
        /// Fields to set as a JSON object
        fields: String,
        /// Update every match instead of the first
        #[arg(long)]
        many: bool,
    },
    /// Remove the first (or every) matching record
    Delete {
        /// Query as a JSON object
        query: String,
        /// Delete every match instead of the first
        #[arg(long)]
        many: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shelter_core::load_env()?;
    shelter_core::init_logging();

    let cli = Cli::parse();

    let username = match cli.username {
        Some(u) => u,
        None => get_required_env(USERNAME_VAR)?,
    };
    let password = match cli.password {
        Some(p) => p,
        None => get_required_env(PASSWORD_VAR)?,
    };

    // Validate arguments before opening a connection
    let op = Operation::parse(cli.command)?;
    debug!(?op, "Parsed command");

    let client = shelter_storage_mongo::connect(&username, &password)
        .await
        .context("Could not open the shelter collection")?;

    let output = op.run(&client, cli.strict).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// A command with its JSON arguments already validated
#[derive(Debug)]
enum Operation {
    Create(Record),
    Read(Query),
    Update {
        query: Query,
        fields: Record,
        many: bool,
    },
    Delete {
        query: Query,
        many: bool,
    },
}

impl Operation {
    fn parse(command: Command) -> shelter_core::Result<Self> {
        Ok(match command {
            Command::Create { record } => Operation::Create(Record::from_json_str(&record)?),
            Command::Read { query } => Operation::Read(Query::from_json_str(&query)?),
            Command::Update {
                query,
                fields,
                many,
            } => Operation::Update {
                query: Query::from_json_str(&query)?,
                fields: Record::from_json_str(&fields)?,
                many,
            },
            Command::Delete { query, many } => Operation::Delete {
                query: Query::from_json_str(&query)?,
                many,
            },
        })
    }

    async fn run(self, client: &CollectionClient, strict: bool) -> shelter_core::Result<Value> {
        let value = match (self, strict) {
            (Operation::Create(record), false) => json!(client.create(&record).await?),
            (Operation::Create(record), true) => json!({ "inserted_id": client.try_create(&record).await? }),
            (Operation::Read(query), false) => json!(client.read(&query).await?),
            (Operation::Read(query), true) => json!(client.try_read(&query).await?),
            (Operation::Update { query, fields, many }, false) => {
                json!(client.update(&query, &fields, many).await?)
            }
            (Operation::Update { query, fields, many }, true) => {
                json!(client.try_update(&query, &fields, many).await?)
            }
            (Operation::Delete { query, many }, false) => json!(client.delete(&query, many).await?),
            (Operation::Delete { query, many }, true) => json!(client.try_delete(&query, many).await?),
        };
        Ok(value)
    }
}
