//! Error taxonomy for the generation pipeline.
//!
//! Every failure is terminal for the run: errors propagate straight up to the
//! binary, which prints the message and exits non-zero. No partial output is
//! ever written.

use std::fmt;

/// Error that can occur while fetching, extracting, emitting or writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The start-marker heading was never seen in the document.
    MarkerMissing,
    /// The marker was seen but no qualifying table followed it.
    NoWebhookTable,
    /// A qualifying table's name cell contained no link; payload is the
    /// cell's literal text, for diagnosing the upstream document change.
    EventNameMissing(String),
    /// Remote fetch failed (transport, non-2xx status, or body read).
    Fetch(String),
    /// rustfmt could not be found, run, or rejected the generated source.
    Format(String),
    /// Local file read or write failed.
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MarkerMissing => {
                write!(
                    f,
                    "\"## About events that trigger workflows\" heading was missing"
                )
            }
            Error::NoWebhookTable => {
                write!(f, "no webhook table was found in given markdown source")
            }
            Error::EventNameMissing(cell) => {
                write!(
                    f,
                    "\"Webhook event payload\" table was found, but first cell did not contain hook name: {cell:?}"
                )
            }
            Error::Fetch(msg) => write!(f, "{msg}"),
            Error::Format(msg) => write!(f, "{msg}"),
            Error::Io(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}
