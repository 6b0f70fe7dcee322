pub mod memory;
pub mod movie;

use std::env;
use std::sync::{Arc, LazyLock};

use async_trait::async_trait;

use crate::{error::IngestError, record::MovieRecord};

static MOVIES_TABLE_NAME: LazyLock<String> =
    LazyLock::new(|| env::var("TABLE_NAME").unwrap_or("MoviesTable".to_string()));

/// Name of the movies table, resolved from the environment once per process.
pub fn movies_table_name() -> &'static str {
    &MOVIES_TABLE_NAME
}

/// Database abstraction trait for storage backends.
#[async_trait]
pub trait Database: Send + Sync {
    /// Write one record, keyed by `id`. A record with the same `id`
    /// overwrites the prior one.
    async fn put_movie(&self, record: &MovieRecord) -> Result<(), IngestError>;
}

/// DynamoDB-backed storage for production use.
#[derive(Clone)]
pub struct DynamoDb {
    pub(crate) client: aws_sdk_dynamodb::Client,
}

#[async_trait]
impl Database for DynamoDb {
    async fn put_movie(&self, record: &MovieRecord) -> Result<(), IngestError> {
        DynamoDb::put_movie(self, record).await
    }
}

#[async_trait]
impl Database for memory::MemoryDb {
    async fn put_movie(&self, record: &MovieRecord) -> Result<(), IngestError> {
        memory::MemoryDb::put_movie(self, record).await
    }
}

/// Create a DynamoDB-backed database, loading AWS config from the environment.
pub async fn dynamo() -> Arc<dyn Database> {
    let config = aws_config::load_from_env().await;
    let client = aws_sdk_dynamodb::Client::new(&config);
    Arc::new(DynamoDb { client })
}

/// Create an in-memory database for local development and testing.
pub fn memory() -> Arc<dyn Database> {
    Arc::new(memory::MemoryDb::new())
}

/// Select a backend from `DATABASE_BACKEND`, defaulting to DynamoDB.
pub async fn from_env() -> Arc<dyn Database> {
    match env::var("DATABASE_BACKEND").as_deref() {
        Ok("memory") => {
            tracing::info!("Using in-memory database backend");
            memory()
        }
        _ => {
            tracing::info!("Using DynamoDB database backend");
            dynamo().await
        }
    }
}
