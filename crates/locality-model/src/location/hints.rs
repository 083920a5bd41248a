//! Helpers for hint lists as they travel through string-based APIs.
use std::collections::HashSet;

use tracing::{trace, warn};

use crate::{error::LocationResult, location::TaskLocation};

use super::codec::{decode, encode};

/// Decode every token, failing on the first one that does not parse.
pub fn decode_all<I, S>(tokens: I) -> LocationResult<Vec<TaskLocation>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().map(|t| decode(t.as_ref())).collect()
}

/// Decode every token, dropping the ones that do not parse.
///
/// A dropped hint means "no preference" for that entry; each drop is logged at `warn`.
pub fn decode_lenient<I, S>(tokens: I) -> Vec<TaskLocation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    for token in tokens {
        let hint = token.as_ref();
        match decode(hint) {
            Ok(loc) => {
                trace!(hint, kind = loc.kind(), "location hint decoded");
                out.push(loc);
            }
            Err(e) => warn!(hint, reason = %e, "dropping unparseable location hint"),
        }
    }
    out
}

/// Encode every location, keeping order.
pub fn encode_all(locations: &[TaskLocation]) -> Vec<String> {
    locations.iter().map(encode).collect()
}

/// Distinct host names in first-seen order.
pub fn hosts(locations: &[TaskLocation]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(locations.len());
    locations
        .iter()
        .map(TaskLocation::host_name)
        .filter(|host| seen.insert(*host))
        .collect()
}
