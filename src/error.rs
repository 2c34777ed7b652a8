use thiserror::Error;

/// Errors raised by the strict color entry points.
///
/// The lenient converters never return these; they substitute defaults instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color '{0}': expected 6 hex digits with optional leading '#'")]
    InvalidHex(String),

    #[error("{channel} channel out of range: {value} (expected 0-255)")]
    ChannelOutOfRange { channel: &'static str, value: i64 },
}
