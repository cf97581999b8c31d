//! gverify - query Gmail to see if an email address is valid.
//!
//! Addresses are fed through a bounded [`queue`] to a fixed pool of workers
//! managed by the [`Dispatcher`]. Each worker asks a [`Probe`] for an
//! [`Outcome`] and hands the resulting [`Verdict`] to a [`Report`] sink.

use std::fmt;

pub mod client;
pub mod dispatcher;
mod error;
#[cfg(test)]
mod fakes;
pub(crate) mod heuristics;
pub mod queue;
pub mod report;
pub(crate) mod worker;

pub use client::{Client, Config, Probe};
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use report::Report;

/// Email check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Gmail disclosed that the mailbox exists
    Valid,
    /// No mailbox behind this address
    Invalid,
    /// The probe failed, so nothing can be said about the address
    Error(ProbeError),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Valid => f.write_str("valid"),
            Outcome::Invalid => f.write_str("invalid"),
            Outcome::Error(error) => write!(f, "could not be verified: {error}"),
        }
    }
}

/// Reasons a single probe could not produce a classification.
///
/// These are terminal for the address they belong to and never
/// affect other addresses of the same run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// The outgoing request could not be built
    #[error("unable to create verification request: {0}")]
    RequestConstruction(String),
    /// No response arrived within the configured timeout
    #[error("request timed out")]
    Timeout,
    /// Connecting or talking to the remote endpoint failed
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            Self::RequestConstruction(describe(&error))
        } else if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(describe(&error))
        }
    }
}

/// Render an error together with its chain of sources,
/// reqwest hides the interesting part (e.g. "Connection refused") there.
fn describe(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// The result of checking one address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub address: String,
    pub outcome: Outcome,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Error(error) => write!(f, "{} could not be verified: {error}", self.address),
            outcome => write!(f, "{} is {outcome}", self.address),
        }
    }
}
