//! The per-line transformer — the core of the pipeline.
//!
//! [`LineTransformer::transform`] takes one raw access-log line through three
//! steps: field split + structural validation, per-field decode/normalize,
//! and event assembly. It performs no I/O, never logs, and holds no state
//! beyond read-only configuration, so one transformer can serve any number of
//! threads concurrently.

use chrono::DateTime;

use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::escape;
use crate::types::{EventProperties, Outcome, SkipReason, TrackEvent};

/// Number of separator-delimited fields in the fixed access-log layout.
pub const FIELD_COUNT: usize = 13;

// Field indices per the nginx log_format:
// $remote_addr|$host|$upstream_addr|$cookie_UserName|[$time_local]|
// "$request"|$status|$body_bytes_sent|"$http_referer"|"$http_user_agent"|
// $request_time|"$cookie_uuid_tt_dd"|"$cookie_dc_session_id"
const REMOTE_ADDR: usize = 0;
const HOST: usize = 1;
const UPSTREAM_ADDR: usize = 2;
const COOKIE_USER_NAME: usize = 3;
const TIME_LOCAL: usize = 4;
const REQUEST: usize = 5;
const STATUS: usize = 6;
const BODY_BYTES_SENT: usize = 7;
const REFERRER: usize = 8;
const USER_AGENT: usize = 9;
const REQUEST_TIME: usize = 10;
const COOKIE_UUID: usize = 11;
const SESSION_ID: usize = 12;

/// Stateless per-line transformer.
///
/// Construct once from a [`TransformConfig`] and call
/// [`transform`](Self::transform) per line. All scratch buffers are
/// call-local; the struct itself is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct LineTransformer {
    config: TransformConfig,
}

impl LineTransformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Transform one raw line into an event or a skip signal.
    ///
    /// Every failure is a recoverable [`TransformError`]; the caller decides
    /// whether to log, count, or drop the line.
    pub fn transform(&self, line: &str) -> Result<Outcome, TransformError> {
        let fields = self.split_fields(line)?;

        let request_line = escape::decode(fields[REQUEST])?;
        if let Some(marker) = self
            .config
            .skip_markers
            .iter()
            .find(|m| request_line.contains(m.as_str()))
        {
            return Ok(Outcome::Skipped(SkipReason::Noise {
                marker: marker.clone(),
            }));
        }

        let time = self.parse_time_local(fields[TIME_LOCAL])?;
        let host = fields[HOST];
        let request_target = extract_path(&request_line);

        let properties = EventProperties {
            request_line: request_target.to_string(),
            status_code: parse_number(fields[STATUS], "status_code")?,
            body_bytes_sent: parse_number(fields[BODY_BYTES_SENT], "body_bytes_sent")?,
            referrer: escape::decode(strip_quotes(fields[REFERRER]))?,
            user_agent: escape::decode(strip_quotes(fields[USER_AGENT]))?,
            ip: fields[REMOTE_ADDR].to_string(),
            user_name: fields[COOKIE_USER_NAME].to_string(),
            session_id: strip_quotes(fields[SESSION_ID]).to_string(),
            request_time: parse_number(fields[REQUEST_TIME], "request_time")?,
            upstream_address: fields[UPSTREAM_ADDR].to_string(),
            curl: format!("{host}{request_target}"),
            host: host.to_string(),
        };

        Ok(Outcome::Event(TrackEvent {
            kind: "track".to_string(),
            distinct_id: escape::decode(strip_quotes(fields[COOKIE_UUID]))?,
            time,
            event: self.config.event.clone(),
            properties,
        }))
    }

    /// Split on the separator as a literal string and validate the count.
    fn split_fields<'a>(&self, line: &'a str) -> Result<Vec<&'a str>, TransformError> {
        if line.is_empty() {
            return Err(TransformError::EmptyInput);
        }
        let fields: Vec<&str> = line.split(self.config.separator.as_str()).collect();
        if fields.len() != FIELD_COUNT {
            return Err(TransformError::MalformedLine {
                expected: FIELD_COUNT,
                found: fields.len(),
                raw: line.to_string(),
            });
        }
        Ok(fields)
    }

    /// Parse `[07/Oct/2017:19:04:33 +0800]` into epoch milliseconds.
    ///
    /// chrono's `%b` table is English-only regardless of process locale,
    /// which is exactly what nginx emits.
    fn parse_time_local(&self, field: &str) -> Result<i64, TransformError> {
        let raw = field.replace(['[', ']'], "");
        DateTime::parse_from_str(&raw, &self.config.time_format)
            .map(|dt| dt.timestamp_millis())
            .map_err(|source| TransformError::TimestampParse { raw, source })
    }
}

/// Extract the PATH token from a `METHOD PATH VERSION` request line.
///
/// Returns `"/"` whenever the input does not split into exactly three
/// space-separated tokens. Total: never fails, never panics.
pub fn extract_path(request_line: &str) -> &str {
    let mut tokens = request_line.split(' ');
    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(_), Some(path), Some(_), None) => path,
        _ => "/",
    }
}

/// Strip the surrounding quotes nginx puts around quoted fields.
fn strip_quotes(field: &str) -> &str {
    field.trim_matches('"')
}

fn parse_number<T: std::str::FromStr>(
    raw: &str,
    field: &'static str,
) -> Result<T, TransformError> {
    raw.parse().map_err(|_| TransformError::NumericParse {
        field,
        raw: raw.to_string(),
    })
}
