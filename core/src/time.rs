//! Time related utils.

use crate::Error;
use chrono::{NaiveDateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// ISO 8601 basic format: "20220313T072004Z"
const ISO8601: &str = "%Y%m%dT%H%M%SZ";

/// Create datetime of now.
///
/// Signing never calls this itself: the instant is always passed in, this is
/// only a convenience for callers.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 basic format: "20220313T072004Z"
pub fn format_iso8601(t: DateTime) -> String {
    t.format(ISO8601).to_string()
}

/// Format time into date: "20220313"
///
/// The date is cut from [`format_iso8601`] so the two can never disagree.
pub fn format_date(t: DateTime) -> String {
    SigningTime::new(t).date_stamp
}

/// Parse ISO 8601 basic format ("20220313T072004Z") into a datetime.
pub fn parse_iso8601(s: &str) -> crate::Result<DateTime> {
    let t = NaiveDateTime::parse_from_str(s, ISO8601).map_err(|e| {
        Error::request_invalid(format!("timestamp {s:?} is not ISO 8601 basic format"))
            .with_source(e)
    })?;
    Ok(t.and_utc())
}

/// The pair of timestamp strings a signature is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningTime {
    timestamp: String,
    date_stamp: String,
}

impl SigningTime {
    /// Build the timestamp (`YYYYMMDDTHHMMSSZ`) and date stamp (`YYYYMMDD`)
    /// for the given instant.
    pub fn new(t: DateTime) -> Self {
        let timestamp = format_iso8601(t);
        // Everything before the `T`: the first 8 characters for any
        // four-digit year.
        let date_stamp = match timestamp.find('T') {
            Some(idx) => timestamp[..idx].to_string(),
            None => timestamp.clone(),
        };

        Self {
            timestamp,
            date_stamp,
        }
    }

    /// The full timestamp, `YYYYMMDDTHHMMSSZ`.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The date stamp, `YYYYMMDD`.
    pub fn date_stamp(&self) -> &str {
        &self.date_stamp
    }
}

impl From<DateTime> for SigningTime {
    fn from(t: DateTime) -> Self {
        Self::new(t)
    }
}

impl FromStr for SigningTime {
    type Err = Error;

    /// Accepts a timestamp in ISO 8601 basic format, `YYYYMMDDTHHMMSSZ`.
    fn from_str(s: &str) -> crate::Result<Self> {
        parse_iso8601(s).map(Self::new)
    }
}

impl fmt::Display for SigningTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.timestamp)
    }
}
