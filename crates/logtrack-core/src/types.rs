//! Core types for logtrack-core.
//!
//! This module defines the event schema emitted for every successfully
//! transformed line — the [`TrackEvent`] envelope and its fixed
//! [`EventProperties`] set — plus the per-line [`Outcome`] discriminant.

use serde::{Deserialize, Serialize};

/// One analytics event in the tracking pipeline's ingestion schema.
///
/// Serializes to the wire shape the event collector expects:
///
/// ```json
/// {"type":"track","distinct_id":"<id>","time":1507374273000,
///  "event":"PageView","properties":{...}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackEvent {
    /// Record type; always `"track"` for access-log page views.
    #[serde(rename = "type")]
    pub kind: String,
    /// Identifier attributing the event to a user/session. Taken from the
    /// uuid cookie field, quote-stripped and escape-decoded.
    pub distinct_id: String,
    /// Event time in epoch milliseconds, parsed from `$time_local`.
    pub time: i64,
    /// Event name, `"PageView"` unless reconfigured.
    pub event: String,
    /// The fixed per-event property set.
    pub properties: EventProperties,
}

/// The fixed property set attached to every event.
///
/// The key set is closed, so it is a typed struct rather than a map; serde
/// renames cover the `$`-prefixed keys the pipeline treats specially
/// (`$user_agent` is auto-parsed, `$ip` is geo-resolved downstream).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventProperties {
    /// Path token of the HTTP request line, `"/"` when unparseable.
    pub request_line: String,
    pub status_code: u16,
    pub body_bytes_sent: u64,
    pub referrer: String,
    #[serde(rename = "$user_agent")]
    pub user_agent: String,
    #[serde(rename = "$ip")]
    pub ip: String,
    pub user_name: String,
    pub session_id: String,
    /// Request duration in seconds, as nginx reports it.
    pub request_time: f64,
    pub upstream_address: String,
    /// Host concatenated with the request path, e.g. `read.csdn.net/`.
    pub curl: String,
    pub host: String,
}

/// What the transformer produced for one structurally valid line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line produced an event ready for serialization.
    Event(TrackEvent),
    /// The line was deliberately filtered. Not an error.
    Skipped(SkipReason),
}

/// Why a structurally valid line produced no event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The decoded request line contained a configured noise marker
    /// (favicon fetches, by default).
    Noise { marker: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Noise { marker } => {
                write!(f, "request line matched skip marker {marker:?}")
            }
        }
    }
}
