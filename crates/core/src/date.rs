//! Date canonicalization.
//!
//! The service emits timestamps either as RFC 3339 strings or, on a few
//! legacy endpoints, as epoch milliseconds. Decoded form is always the
//! RFC 3339 rendering, so re-decoding an already-decoded value is a no-op.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Parse an RFC 3339 string and re-render it canonically.
///
/// Canonicalization normalizes case and collapses a `+00:00` offset to `Z`.
/// Returns `None` for anything `time` cannot parse as RFC 3339 — notably
/// strings missing a UTC offset.
pub fn canonicalize(raw: &str) -> Option<String> {
    let parsed = OffsetDateTime::parse(raw, &Rfc3339).ok()?;
    parsed.format(&Rfc3339).ok()
}

/// Render an epoch-millisecond timestamp as RFC 3339.
pub fn from_epoch_millis(millis: i64) -> Option<String> {
    let odt = OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()?;
    odt.format(&Rfc3339).ok()
}
