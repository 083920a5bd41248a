use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// RFC 3339 timestamps in UTC.
#[derive(Debug, Clone, Copy)]
pub struct UtcRfc3339;

impl FormatTime for UtcRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match OffsetDateTime::now_utc().format(&Rfc3339) {
            Ok(ts) => write!(w, "{ts} "),
            Err(_) => write!(w, "<invalid-time> "),
        }
    }
}
