//! Secrets Manager client implementation.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_secretsmanager::error::SdkError;
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::Client;
use tracing::{debug, warn};

use crate::error::{SecretsError, SecretsResult};

/// Read access to named secrets.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the string value of a secret.
    ///
    /// Returns `Ok(None)` when the secret exists but carries no string value
    /// (binary-only secrets).
    async fn secret_string(&self, name: &str) -> SecretsResult<Option<String>>;
}

/// Secrets Manager backed secret store.
#[derive(Clone)]
pub struct SecretsManagerStore {
    client: Client,
}

impl SecretsManagerStore {
    /// Create a store from a loaded SDK configuration.
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl SecretStore for SecretsManagerStore {
    async fn secret_string(&self, name: &str) -> SecretsResult<Option<String>> {
        debug!(secret = name, "Fetching secret");

        let response = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| {
                warn!(secret = name, error = %e, "Secret lookup failed");
                get_secret_error(name, &e)
            })?;

        Ok(response.secret_string)
    }
}

/// Only a missing secret is a configuration problem; everything else means the
/// service could not answer.
fn get_secret_error<R>(name: &str, err: &SdkError<GetSecretValueError, R>) -> SecretsError {
    if err
        .as_service_error()
        .is_some_and(GetSecretValueError::is_resource_not_found_exception)
    {
        SecretsError::not_found(name)
    } else {
        SecretsError::unavailable(err.to_string())
    }
}
