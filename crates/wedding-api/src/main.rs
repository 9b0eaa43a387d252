//! Lambda entry point for the content endpoint.

use std::sync::Arc;

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use tracing::info;

use wedding_api::{get_content, logging, ApiConfig, AppState, Invocation};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env();
    logging::init_tracing(&config);

    info!(
        secret = %config.secret_name,
        table = %config.content_table,
        photos_enabled = config.photos_enabled,
        bucket = %config.photo_bucket,
        "Starting wedding-api"
    );

    let state = Arc::new(AppState::from_config(config).await);

    run(service_fn(move |request: Request| {
        let state = Arc::clone(&state);
        async move { handle(&state, request).await }
    }))
    .await
}

async fn handle(state: &AppState, request: Request) -> Result<Response<Body>, Error> {
    let invocation = Invocation::from_request(&request);
    let envelope = get_content(state, invocation).await;
    Ok(envelope.into_response()?)
}
