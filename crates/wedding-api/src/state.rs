//! Application state.

use std::sync::Arc;

use aws_config::BehaviorVersion;

use wedding_content::{ContentStore, DynamoContentStore};
use wedding_secrets::{SecretStore, SecretsManagerStore};
use wedding_storage::{PhotoStore, S3Config, S3PhotoClient};

use crate::config::ApiConfig;

/// Shared application state.
///
/// Clients are created once per Lambda container and reused across
/// invocations.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub secrets: Arc<dyn SecretStore>,
    pub content: Arc<dyn ContentStore>,
    /// `None` when the photo gallery is disabled.
    pub photos: Option<Arc<dyn PhotoStore>>,
}

impl AppState {
    /// Create state from already-built collaborators.
    pub fn new(
        config: ApiConfig,
        secrets: Arc<dyn SecretStore>,
        content: Arc<dyn ContentStore>,
        photos: Option<Arc<dyn PhotoStore>>,
    ) -> Self {
        Self {
            config,
            secrets,
            content,
            photos,
        }
    }

    /// Create state backed by AWS clients from the default credential and region chain.
    pub async fn from_config(config: ApiConfig) -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        let secrets = SecretsManagerStore::new(&sdk_config);
        let content = DynamoContentStore::new(&sdk_config, config.content_table.clone());
        let photos = config.photos_enabled.then(|| {
            let s3_config = S3Config {
                bucket_name: config.photo_bucket.clone(),
                endpoint_url: config.s3_endpoint_url.clone(),
            };
            Arc::new(S3PhotoClient::new(&sdk_config, s3_config)) as Arc<dyn PhotoStore>
        });

        Self::new(config, Arc::new(secrets), Arc::new(content), photos)
    }
}
