use std::fmt;
use std::path::PathBuf;

use pixels_core::{LoadMode, Query, ResultPage};

/// Normalized remote-call failure. Every failure mode of a search request is
/// folded into one of these at the boundary; nothing is thrown further up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "malformed response body"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// A search issued for `query` finished, one way or the other.
    SearchCompleted {
        query: Query,
        mode: LoadMode,
        result: Result<ResultPage, ApiError>,
    },
    /// An image download finished. Failures arrive as display strings since
    /// they only feed a user-facing alert.
    DownloadCompleted {
        url: String,
        result: Result<PathBuf, String>,
    },
}
