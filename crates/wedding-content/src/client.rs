//! DynamoDB client implementation.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, to_item};
use tracing::{debug, info, warn};

use wedding_models::ContentRecord;

use crate::error::{ContentError, ContentResult};

/// Read access to content records.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Get a record by its `id` key. `Ok(None)` means the table exists but the
    /// record does not.
    async fn get_record(&self, id: &str) -> ContentResult<Option<ContentRecord>>;
}

/// DynamoDB backed content store.
#[derive(Clone)]
pub struct DynamoContentStore {
    pub(crate) client: Client,
    pub(crate) table: String,
}

impl DynamoContentStore {
    /// Create a store for `table` from a loaded SDK configuration.
    pub fn new(sdk_config: &SdkConfig, table: impl Into<String>) -> Self {
        Self {
            client: Client::new(sdk_config),
            table: table.into(),
        }
    }

    /// Table name this store reads and writes.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Write a record, replacing any existing record with the same `id`.
    pub async fn put_record(&self, record: &ContentRecord) -> ContentResult<()> {
        let item = to_item(record).map_err(|e| ContentError::Malformed(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| put_item_error(&self.table, &e))?;

        info!(table = %self.table, id = %record.id, "Wrote content record");
        Ok(())
    }
}

#[async_trait]
impl ContentStore for DynamoContentStore {
    async fn get_record(&self, id: &str) -> ContentResult<Option<ContentRecord>> {
        debug!(table = %self.table, id, "Fetching content record");

        let response = self
            .client
            .get_item()
            .table_name(&self.table)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| {
                warn!(table = %self.table, error = %e, "DynamoDB get_item failed");
                get_item_error(&self.table, &e)
            })?;

        match response.item {
            Some(item) => {
                debug!(attributes = item.len(), "Content record found");
                let record: ContentRecord =
                    from_item(item).map_err(|e| ContentError::Malformed(e.to_string()))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}

/// A missing table is a deployment problem; anything else is treated as the
/// service being unavailable.
fn get_item_error<R>(table: &str, err: &SdkError<GetItemError, R>) -> ContentError {
    if err
        .as_service_error()
        .is_some_and(GetItemError::is_resource_not_found_exception)
    {
        ContentError::not_found(table)
    } else {
        ContentError::unavailable(err.to_string())
    }
}

fn put_item_error<R>(table: &str, err: &SdkError<PutItemError, R>) -> ContentError {
    if err
        .as_service_error()
        .is_some_and(PutItemError::is_resource_not_found_exception)
    {
        ContentError::not_found(table)
    } else {
        ContentError::WriteFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use aws_sdk_dynamodb::error::ConnectorError;
    use aws_sdk_dynamodb::types::error::{
        ProvisionedThroughputExceededException, ResourceNotFoundException,
    };
    use serde_json::json;

    use super::*;

    fn get_item_failure(err: GetItemError) -> SdkError<GetItemError, ()> {
        SdkError::service_error(err, ())
    }

    #[test]
    fn test_record_item_round_trip_shape() {
        let record = ContentRecord {
            id: "main".to_string(),
            content: Some(json!("<p>hi</p>")),
            last_updated: Some(json!("2024-01-01T00:00:00.000Z")),
        };

        let item: HashMap<String, AttributeValue> = to_item(&record).unwrap();
        assert_eq!(item.get("id"), Some(&AttributeValue::S("main".to_string())));
        assert_eq!(
            item.get("lastUpdated"),
            Some(&AttributeValue::S("2024-01-01T00:00:00.000Z".to_string()))
        );
        assert!(item.contains_key("content"));
    }

    #[test]
    fn test_item_without_content_decodes() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("main".to_string()));

        let record: ContentRecord = from_item(item).unwrap();
        assert_eq!(record.id, "main");
        assert_eq!(record.html(), None);
        assert_eq!(record.last_updated, None);
    }

    #[test]
    fn test_item_with_non_string_content_has_no_html() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("main".to_string()));
        item.insert("content".to_string(), AttributeValue::Bool(true));

        let record: ContentRecord = from_item(item).unwrap();
        assert_eq!(record.html(), None);
    }

    #[test]
    fn test_numeric_last_updated_is_passed_through() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("main".to_string()));
        item.insert("content".to_string(), AttributeValue::S("<p>hi</p>".to_string()));
        item.insert("lastUpdated".to_string(), AttributeValue::N("1704067200".to_string()));

        let record: ContentRecord = from_item(item).unwrap();
        assert_eq!(record.html(), Some("<p>hi</p>"));
        assert_eq!(record.last_updated, Some(json!(1704067200)));
    }

    #[test]
    fn test_missing_table_is_not_found() {
        let err = get_item_failure(GetItemError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Requested resource not found")
                .build(),
        ));

        let classified = get_item_error("WeddingData", &err);
        assert!(classified.is_not_found());
        assert!(matches!(classified, ContentError::NotFound(table) if table == "WeddingData"));
    }

    #[test]
    fn test_throttling_is_unavailable() {
        let err = get_item_failure(GetItemError::ProvisionedThroughputExceededException(
            ProvisionedThroughputExceededException::builder()
                .message("Rate exceeded")
                .build(),
        ));

        let classified = get_item_error("WeddingData", &err);
        assert!(matches!(classified, ContentError::Unavailable(_)));
    }

    #[test]
    fn test_transport_failures_are_unavailable() {
        let timeout: SdkError<GetItemError, ()> = SdkError::timeout_error("connect timed out");
        assert!(matches!(
            get_item_error("WeddingData", &timeout),
            ContentError::Unavailable(_)
        ));

        let dispatch: SdkError<GetItemError, ()> =
            SdkError::dispatch_failure(ConnectorError::io("connection reset".into()));
        assert!(matches!(
            get_item_error("WeddingData", &dispatch),
            ContentError::Unavailable(_)
        ));
    }

    #[test]
    fn test_put_into_missing_table_is_not_found() {
        let err: SdkError<PutItemError, ()> = SdkError::service_error(
            PutItemError::ResourceNotFoundException(ResourceNotFoundException::builder().build()),
            (),
        );
        assert!(put_item_error("WeddingData", &err).is_not_found());

        let timeout: SdkError<PutItemError, ()> = SdkError::timeout_error("write timed out");
        assert!(matches!(
            put_item_error("WeddingData", &timeout),
            ContentError::WriteFailed(_)
        ));
    }
}
