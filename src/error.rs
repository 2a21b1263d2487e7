//! # Error Types
//!
//! Typed failures surfaced by the model and the dispatch seam. Editing
//! operations on a session never construct these; they come from the
//! enumeration boundaries (method and body-kind parsing), timing
//! construction, send-readiness validation, and the defaults loader.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A method token outside the supported enumeration.
    #[error("invalid HTTP method: {method}")]
    InvalidMethod { method: String },

    /// A raw-body kind token outside the supported enumeration.
    #[error("invalid raw body kind: {kind}")]
    InvalidBodyKind { kind: String },

    /// Timing endpoints that cannot describe a real exchange.
    #[error("invalid timing: start={start}, end={end}")]
    InvalidTiming { start: f64, end: f64 },

    /// The draft method was still the unset placeholder at dispatch time.
    #[error("request method is not set")]
    UnsetMethod,

    /// The draft URL was still empty at dispatch time.
    #[error("request URL is not set")]
    UnsetUrl,

    /// The session defaults file exists but could not be read or parsed.
    #[error("session defaults: {message}")]
    Defaults { message: String },

    /// Failure reported by a transport implementation.
    #[error("transport: {message}")]
    Transport { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
