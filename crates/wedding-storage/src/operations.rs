//! High-level gallery operations.

use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{debug, warn};

use wedding_models::{format_timestamp, is_image_key, Photo};

use crate::client::PhotoStore;
use crate::error::StorageResult;

/// Build the photo gallery.
///
/// Lists at most `max_keys` objects, keeps image keys, presigns each one
/// concurrently and returns them newest first. Objects whose URL cannot be
/// signed are left out. Only a listing failure is returned as an error.
pub async fn list_photos<S>(
    store: &S,
    max_keys: i32,
    url_expiry: Duration,
) -> StorageResult<Vec<Photo>>
where
    S: PhotoStore + ?Sized,
{
    let objects = store.list_objects(max_keys).await?;
    let listed = objects.len();

    let images: Vec<_> = objects
        .into_iter()
        .take(max_keys.max(0) as usize)
        .filter(|obj| is_image_key(&obj.key))
        .collect();

    let signed = join_all(images.into_iter().map(|obj| async move {
        match store.presign_get(&obj.key, url_expiry).await {
            Ok(url) => Some((obj, url)),
            Err(e) => {
                warn!(key = %obj.key, error = %e, "Skipping photo, presign failed");
                None
            }
        }
    }))
    .await;

    let mut photos: Vec<(DateTime<Utc>, Photo)> = signed
        .into_iter()
        .flatten()
        .map(|(obj, url)| {
            let modified = obj.last_modified.unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
            let photo = Photo {
                key: obj.key,
                url,
                size: obj.size,
                last_modified: format_timestamp(modified),
            };
            (modified, photo)
        })
        .collect();

    photos.sort_by(|a, b| b.0.cmp(&a.0));

    debug!(listed, photos = photos.len(), "Built photo gallery");
    Ok(photos.into_iter().map(|(_, photo)| photo).collect())
}
