//! Wire types exchanged with the shortening backend

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A shortened URL as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlEntry {
    pub id: i64,
    pub alias: String,
    pub short_url: String,
    pub original_url: String,
    /// Local wall-clock time of creation
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
}

/// Body of `POST /shorten`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub original_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,
}

impl ShortenRequest {
    /// Build a request from raw form input.
    ///
    /// Both values are trimmed; a blank alias is sent as absent so the
    /// backend generates one.
    pub fn from_input(original_url: &str, custom_alias: Option<&str>) -> Self {
        let custom_alias = custom_alias
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
            .map(String::from);

        Self {
            original_url: original_url.trim().to_string(),
            custom_alias,
        }
    }
}

/// Response of `POST /shorten`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub alias: String,
    pub short_url: String,
    pub original_url: String,
}

/// Error payload returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `createdAt` (de)serialization.
///
/// The backend emits zone-less local date-times; RFC 3339 values with an
/// offset are converted to local time.
pub mod timestamp {
    use chrono::{DateTime, Local, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.with_timezone(&Local).naive_local());
        }
        NaiveDateTime::parse_from_str(value, FORMAT).ok()
    }

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_url_entry_from_backend_json() {
        let json = r#"{
            "id": 7,
            "alias": "abc123",
            "shortUrl": "http://localhost:8080/abc123",
            "originalUrl": "https://example.com",
            "createdAt": "2024-05-01T10:15:30.123456"
        }"#;

        let entry: UrlEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.alias, "abc123");
        assert_eq!(entry.short_url, "http://localhost:8080/abc123");
        assert_eq!(
            entry.created_at.date(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(entry.created_at.hour(), 10);
    }

    #[test]
    fn test_timestamp_without_fraction() {
        assert!(timestamp::parse("2024-05-01T10:15:30").is_some());
    }

    #[test]
    fn test_timestamp_with_offset() {
        assert!(timestamp::parse("2024-05-01T10:15:30Z").is_some());
        assert!(timestamp::parse("2024-05-01T10:15:30+02:00").is_some());
    }

    #[test]
    fn test_timestamp_garbage_rejected() {
        assert!(timestamp::parse("yesterday").is_none());
        let json = r#"{"id":1,"alias":"a","shortUrl":"s","originalUrl":"o","createdAt":"nope"}"#;
        assert!(serde_json::from_str::<UrlEntry>(json).is_err());
    }

    #[test]
    fn test_shorten_request_omits_missing_alias() {
        let req = ShortenRequest::from_input("example.com", None);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "originalUrl": "example.com" }));
    }

    #[test]
    fn test_shorten_request_trims_input() {
        let req = ShortenRequest::from_input("  example.com ", Some("  my-alias "));
        assert_eq!(req.original_url, "example.com");
        assert_eq!(req.custom_alias.as_deref(), Some("my-alias"));

        let req = ShortenRequest::from_input("example.com", Some("   "));
        assert_eq!(req.custom_alias, None);
    }

    #[test]
    fn test_shorten_response_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "alias": "abc123",
            "shortUrl": "http://localhost:8080/abc123",
            "originalUrl": "example.com",
            "createdAt": "2024-05-01T10:15:30"
        }"#;
        let resp: ShortenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.alias, "abc123");
    }

    #[test]
    fn test_api_error_body_partial() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"Alias already exists: x"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Alias already exists: x"));
        assert!(body.status.is_none());
    }
}
