//! logtrack-core — turns nginx access-log lines into analytics track events.
//!
//! The core is a single stateless component, the [`LineTransformer`]. It maps
//! one raw pipe-delimited log line to one of three outcomes: a [`TrackEvent`]
//! ready for serialization, a deliberate skip, or a typed error the caller
//! can log and move past.
//!
//! # Pipeline
//!
//! ```text
//! raw line ──► split + validate ──► decode / normalize ──► assemble ──► TrackEvent
//! ```
//!
//! The transformer never performs I/O and never logs; outcome policy (log,
//! count, drop) belongs entirely to the caller. Reading lines and delivering
//! events is the host binary's job.

pub mod config;
pub mod error;
pub mod escape;
pub mod transform;
pub mod types;

pub use config::{Config, TransformConfig};
pub use error::TransformError;
pub use transform::{extract_path, LineTransformer, FIELD_COUNT};
pub use types::{EventProperties, Outcome, SkipReason, TrackEvent};
