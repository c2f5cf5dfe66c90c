//! Post entity
//!
//! The single record type the blog backend stores, plus the helpers used to
//! display it.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned post identifier.
///
/// Backends disagree on whether ids are numbers or strings, so the client
/// treats them as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<u64> for PostId {
    fn from(raw: u64) -> Self {
        Self(raw.to_string())
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Number(number) => Self(number.to_string()),
        })
    }
}

/// A persisted blog post as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub message: String,
    /// URL or server-relative path of the cover image
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default, with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// `Published on 3rd Jan, 2025 | Admin`, in the reader's local time.
    ///
    /// `None` when the backend sent no usable `created_at`.
    pub fn publish_line(&self) -> Option<String> {
        self.publish_line_in(&Local)
    }

    pub fn publish_line_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<String>
    where
        Tz::Offset: fmt::Display,
    {
        self.created_at.map(|created_at| {
            format!(
                "Published on {} | Admin",
                format_publish_date(&created_at.with_timezone(tz))
            )
        })
    }
}

/// Format a timestamp as `Do MMM, YYYY`, e.g. `21st Mar, 2024`.
pub fn format_publish_date<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let day = timestamp.day();
    format!("{}{} {}", day, ordinal_suffix(day), timestamp.format("%b, %Y"))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Parse the timestamp shapes backends commonly emit.
///
/// Accepts RFC 3339 (with or without fractional seconds), `YYYY-MM-DD HH:MM:SS`
/// and a bare `YYYY-MM-DD`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

mod lenient_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(timestamp) => {
                serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Micros, true))
            }
            None => serializer.serialize_none(),
        }
    }

    // Unparseable timestamps degrade to None rather than failing the whole post.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(text)) => super::parse_timestamp(&text),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_numeric_and_string_ids() {
        let post: Post = serde_json::from_str(
            r#"{"id": 42, "title": "T", "message": "M", "cover_image": null,
                "created_at": "2024-03-21T10:15:00.000000Z"}"#,
        )
        .unwrap();
        assert_eq!(post.id, PostId::new("42"));

        let post: Post =
            serde_json::from_str(r#"{"id": "abc-1", "title": "T", "message": "M"}"#).unwrap();
        assert_eq!(post.id.as_str(), "abc-1");
        assert!(post.cover_image.is_none());
        assert!(post.created_at.is_none());
    }

    #[test]
    fn test_lenient_timestamps() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 21, 10, 15, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-21T10:15:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-21T10:15:00.000000Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-21 10:15:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-03-21"),
            Some(Utc.with_ymd_and_hms(2024, 3, 21, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp("yesterday"), None);

        let post: Post = serde_json::from_str(
            r#"{"id": 1, "title": "T", "message": "M", "created_at": "garbage"}"#,
        )
        .unwrap();
        assert!(post.created_at.is_none());
    }

    #[test]
    fn test_publish_date_ordinals() {
        let date = |day| Utc.with_ymd_and_hms(2025, 1, day, 12, 0, 0).unwrap();
        assert_eq!(format_publish_date(&date(1)), "1st Jan, 2025");
        assert_eq!(format_publish_date(&date(2)), "2nd Jan, 2025");
        assert_eq!(format_publish_date(&date(3)), "3rd Jan, 2025");
        assert_eq!(format_publish_date(&date(4)), "4th Jan, 2025");
        assert_eq!(format_publish_date(&date(11)), "11th Jan, 2025");
        assert_eq!(format_publish_date(&date(12)), "12th Jan, 2025");
        assert_eq!(format_publish_date(&date(13)), "13th Jan, 2025");
        assert_eq!(format_publish_date(&date(21)), "21st Jan, 2025");
        assert_eq!(format_publish_date(&date(22)), "22nd Jan, 2025");
        assert_eq!(format_publish_date(&date(23)), "23rd Jan, 2025");
        assert_eq!(format_publish_date(&date(31)), "31st Jan, 2025");
    }

    #[test]
    fn test_publish_line() {
        let mut post: Post =
            serde_json::from_str(r#"{"id": 1, "title": "T", "message": "M"}"#).unwrap();
        assert_eq!(post.publish_line(), None);

        post.created_at = Some(Utc.with_ymd_and_hms(2024, 10, 2, 8, 0, 0).unwrap());
        assert_eq!(
            post.publish_line_in(&Utc).as_deref(),
            Some("Published on 2nd Oct, 2024 | Admin")
        );
    }

    #[test]
    fn test_publish_line_uses_reader_offset() {
        let mut post: Post =
            serde_json::from_str(r#"{"id": 1, "title": "T", "message": "M"}"#).unwrap();
        post.created_at = Some(Utc.with_ymd_and_hms(2024, 12, 31, 22, 30, 0).unwrap());

        let ahead = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(
            post.publish_line_in(&ahead).as_deref(),
            Some("Published on 1st Jan, 2025 | Admin")
        );
        assert_eq!(
            post.publish_line(),
            post.publish_line_in(&Local)
        );
    }
}
