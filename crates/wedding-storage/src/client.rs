//! S3 client implementation.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::config::Builder;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{StorageError, StorageResult};

/// Configuration for the photo bucket client.
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Bucket name
    pub bucket_name: String,
    /// Custom S3 endpoint (local emulators); `None` uses the regional AWS endpoint
    pub endpoint_url: Option<String>,
}

/// Listing and URL signing over a single photo bucket.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// List at most `max_keys` objects from the bucket.
    async fn list_objects(&self, max_keys: i32) -> StorageResult<Vec<ObjectInfo>>;

    /// Generate a presigned GET URL for `key`.
    async fn presign_get(&self, key: &str, expires_in: Duration) -> StorageResult<String>;
}

/// S3 photo bucket client.
#[derive(Clone)]
pub struct S3PhotoClient {
    client: Client,
    bucket: String,
}

impl S3PhotoClient {
    /// Create a new client from a loaded SDK configuration.
    pub fn new(sdk_config: &SdkConfig, config: S3Config) -> Self {
        let mut builder = Builder::from(sdk_config);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket_name,
        }
    }
}

#[async_trait]
impl PhotoStore for S3PhotoClient {
    async fn list_objects(&self, max_keys: i32) -> StorageResult<Vec<ObjectInfo>> {
        debug!(bucket = %self.bucket, max_keys, "Listing photos");

        let response = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .max_keys(max_keys)
            .send()
            .await
            .map_err(|e| StorageError::list_failed(e.to_string()))?;

        let objects = response
            .contents
            .unwrap_or_default()
            .into_iter()
            .map(|obj| ObjectInfo {
                key: obj.key.unwrap_or_default(),
                size: obj.size.unwrap_or(0).max(0) as u64,
                last_modified: obj
                    .last_modified
                    .and_then(|t| t.to_millis().ok())
                    .and_then(DateTime::<Utc>::from_timestamp_millis),
            })
            .collect();

        Ok(objects)
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> StorageResult<String> {
        let presign_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| StorageError::presign_failed(e.to_string()))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presign_config)
            .await
            .map_err(|e| StorageError::presign_failed(e.to_string()))?;

        Ok(presigned.uri().to_string())
    }
}

/// Information about a stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    /// Object key
    pub key: String,
    /// Size in bytes
    pub size: u64,
    /// Last modified timestamp
    pub last_modified: Option<DateTime<Utc>>,
}
