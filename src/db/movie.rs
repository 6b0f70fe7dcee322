use serde_dynamo::aws_sdk_dynamodb_1::to_item;

use crate::{error::IngestError, record::MovieRecord};

use super::{movies_table_name, DynamoDb};

impl DynamoDb {
    /// Upsert one record into the movies table. No condition expression:
    /// a repeated `id` overwrites the stored record.
    pub async fn put_movie(&self, record: &MovieRecord) -> Result<(), IngestError> {
        let item = to_item(record)
            .map_err(|e| IngestError::Storage(format!("Failed to serialize record: {e}")))?;

        self.client
            .put_item()
            .table_name(movies_table_name())
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| IngestError::Storage(format!("Failed to insert record: {e}")))?;

        Ok(())
    }
}
