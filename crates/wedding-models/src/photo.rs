//! Photo gallery entries.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// File extensions served by the gallery. Matched case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// A photo in the gallery, derived from one bucket object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Object key
    pub key: String,
    /// Presigned GET URL
    pub url: String,
    /// Size in bytes
    pub size: u64,
    /// ISO-8601 last modified time
    pub last_modified: String,
}

/// Check whether an object key names a gallery image.
pub fn is_image_key(key: &str) -> bool {
    let key = key.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| key.ends_with(ext))
}

/// Format a timestamp as ISO-8601 UTC with millisecond precision (`...T00:00:00.000Z`).
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_is_image_key() {
        assert!(is_image_key("ceremony/first-kiss.jpg"));
        assert!(is_image_key("reception.JPEG"));
        assert!(is_image_key("cake.Png"));
        assert!(is_image_key("dance.gif"));
        assert!(is_image_key("venue.webp"));

        assert!(!is_image_key("video.mp4"));
        assert!(!is_image_key("notes.txt"));
        assert!(!is_image_key("folder/"));
        assert!(!is_image_key("jpg"));
        assert!(!is_image_key("photo.jpg.bak"));
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_photo_serializes_camel_case() {
        let photo = Photo {
            key: "a.jpg".to_string(),
            url: "https://example.com/a.jpg".to_string(),
            size: 1024,
            last_modified: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&photo).unwrap();
        assert_eq!(json["lastModified"], "2024-01-01T00:00:00.000Z");
        assert_eq!(json["size"], 1024);
    }
}
