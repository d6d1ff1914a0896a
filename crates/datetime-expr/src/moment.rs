//! Timezone-aware input moments.
//!
//! A [`Moment`] always carries an explicit UTC offset. Typed callers build one
//! from any `chrono::DateTime<Tz>`; textual callers parse RFC 3339, and text
//! that names a wall-clock time without an offset is rejected with
//! [`ExprError::NaiveTimestamp`] instead of being silently localized.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ExprError, Result};

/// An instant with an explicit UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Moment(DateTime<FixedOffset>);

impl Moment {
    /// The current instant.
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Parse an RFC 3339 datetime string (e.g. `"2018-06-06T15:00:00+09:00"`).
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::NaiveTimestamp`] if the text is a valid datetime
    /// without an offset, or [`ExprError::InvalidMoment`] if it is not a
    /// datetime at all.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt));
        }
        if is_naive_datetime(trimmed) {
            return Err(ExprError::NaiveTimestamp(format!(
                "'{trimmed}' has no UTC offset; all moments must be offset-aware"
            )));
        }
        Err(ExprError::InvalidMoment(format!(
            "'{trimmed}' is not an RFC 3339 datetime"
        )))
    }

    /// Project this instant into `tz`. The instant is preserved; only the
    /// calendar view changes.
    pub fn project(&self, tz: &Tz) -> DateTime<Tz> {
        self.0.with_timezone(tz)
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }
}

impl<T: TimeZone> From<DateTime<T>> for Moment {
    fn from(dt: DateTime<T>) -> Self {
        Self(dt.fixed_offset())
    }
}

impl FromStr for Moment {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Moment {
    type Error = ExprError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Moment> for String {
    fn from(moment: Moment) -> Self {
        moment.0.to_rfc3339()
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// One scheduled range for list output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRangeEntry {
    pub start: Moment,
    pub end: Moment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl TimeRangeEntry {
    pub fn new(start: impl Into<Moment>, end: impl Into<Moment>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Parse an IANA timezone string into `Tz`.
pub(crate) fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| ExprError::InvalidTimezone(format!("'{s}'")))
}

/// Whether `s` is a calendar datetime (or date) that simply lacks an offset.
fn is_naive_datetime(s: &str) -> bool {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(s, fmt).is_ok())
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_with_offset() {
        let m = Moment::parse("2018-06-06T15:00:00+09:00").unwrap();
        assert_eq!(m.as_datetime().hour(), 15);
        assert_eq!(m.as_datetime().offset().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_parse_utc_designator() {
        let m: Moment = "2018-06-06T06:00:00Z".parse().unwrap();
        assert_eq!(m.as_datetime().offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_naive_datetime_is_rejected() {
        let err = Moment::parse("2018-06-06T15:00:00").unwrap_err();
        assert!(matches!(err, ExprError::NaiveTimestamp(_)), "got: {err}");
        assert!(err.to_string().contains("Naive timestamp"));
    }

    #[test]
    fn test_parse_naive_date_and_space_forms_are_rejected() {
        for s in ["2018-06-06", "2018-06-06 15:00", "2018-06-06 15:00:00.5"] {
            let err = Moment::parse(s).unwrap_err();
            assert!(matches!(err, ExprError::NaiveTimestamp(_)), "{s}: {err}");
        }
    }

    #[test]
    fn test_parse_garbage_is_invalid_moment() {
        let err = Moment::parse("next tuesday").unwrap_err();
        assert!(matches!(err, ExprError::InvalidMoment(_)), "got: {err}");
        let err = Moment::parse("").unwrap_err();
        assert!(matches!(err, ExprError::InvalidMoment(_)), "got: {err}");
    }

    #[test]
    fn test_project_preserves_instant() {
        let m = Moment::parse("2018-06-06T20:00:00Z").unwrap();
        let seoul = m.project(&chrono_tz::Asia::Seoul);
        assert_eq!(seoul.day(), 7);
        assert_eq!(seoul.hour(), 5);
        assert_eq!(seoul.timestamp(), m.as_datetime().timestamp());
    }

    #[test]
    fn test_from_typed_datetime() {
        let dt = chrono_tz::Asia::Seoul
            .with_ymd_and_hms(2018, 6, 6, 15, 0, 0)
            .unwrap();
        let m = Moment::from(dt);
        assert_eq!(m.to_string(), "2018-06-06T15:00:00+09:00");
    }

    #[test]
    fn test_entry_deserializes_and_rejects_naive() {
        let entry: TimeRangeEntry = serde_json::from_str(
            r#"{"start": "2018-06-06T15:00:00+09:00", "end": "2018-06-06T16:00:00+09:00", "label": "standup"}"#,
        )
        .unwrap();
        assert_eq!(entry.label.as_deref(), Some("standup"));

        let err = serde_json::from_str::<TimeRangeEntry>(
            r#"{"start": "2018-06-06T15:00:00", "end": "2018-06-06T16:00:00+09:00"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Naive timestamp"), "got: {err}");
    }

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("Asia/Seoul").is_ok());
        let err = parse_timezone("Invalid/Zone").unwrap_err();
        assert!(err.to_string().contains("Invalid timezone"), "got: {err}");
    }
}
