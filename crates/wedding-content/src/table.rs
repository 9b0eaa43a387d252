//! Table provisioning for the content record.

use std::time::Duration;

use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType, TableStatus,
};
use tracing::{debug, info};

use crate::client::DynamoContentStore;
use crate::error::{ContentError, ContentResult};

/// Interval between table status checks.
const TABLE_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Maximum number of status checks before giving up (about two minutes).
const TABLE_POLL_ATTEMPTS: u32 = 60;

/// Outcome of a create-table request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCreation {
    /// The table was created and is now active.
    Created,
    /// A table with this name already existed.
    AlreadyExists,
}

impl DynamoContentStore {
    /// Create the content table (hash key `id`, string, on-demand billing)
    /// and wait for it to become active.
    pub async fn create_table(&self) -> ContentResult<TableCreation> {
        let key_schema = KeySchemaElement::builder()
            .attribute_name("id")
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| ContentError::table_setup(e.to_string()))?;

        let attribute = AttributeDefinition::builder()
            .attribute_name("id")
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| ContentError::table_setup(e.to_string()))?;

        let result = self
            .client
            .create_table()
            .table_name(&self.table)
            .key_schema(key_schema)
            .attribute_definitions(attribute)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await;

        if let Err(e) = result {
            if e
                .as_service_error()
                .is_some_and(CreateTableError::is_resource_in_use_exception)
            {
                info!(table = %self.table, "Table already exists");
                return Ok(TableCreation::AlreadyExists);
            }
            return Err(ContentError::table_setup(e.to_string()));
        }

        info!(table = %self.table, "Table created, waiting for it to become active");
        self.wait_until_active().await?;
        Ok(TableCreation::Created)
    }

    /// Poll the table status until it reports `ACTIVE`.
    pub async fn wait_until_active(&self) -> ContentResult<()> {
        for attempt in 1..=TABLE_POLL_ATTEMPTS {
            let response = self
                .client
                .describe_table()
                .table_name(&self.table)
                .send()
                .await
                .map_err(|e| ContentError::table_setup(e.to_string()))?;

            let status = response.table.and_then(|t| t.table_status);
            debug!(table = %self.table, attempt, ?status, "Table status");

            if status == Some(TableStatus::Active) {
                info!(table = %self.table, "Table is active");
                return Ok(());
            }

            tokio::time::sleep(TABLE_POLL_INTERVAL).await;
        }

        Err(ContentError::table_setup(format!(
            "table {} did not become active after {} checks",
            self.table, TABLE_POLL_ATTEMPTS
        )))
    }
}
