use std::fmt;

/// Shown when the user submits an empty or whitespace-only link.
pub const VALIDATION_MESSAGE: &str = "Please enter a valid YouTube URL.";
/// Shown when a failure carries no usable message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unknown error occurred.";
/// Shown when the conversion service does not answer within the configured timeout.
pub const TIMEOUT_MESSAGE: &str = "The conversion service did not respond in time.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Empty input, caught before any call is made.
    Validation,
    /// The call could not complete (network failure, bad status without an error body).
    Transport,
    /// The service answered with an explicit `error` message.
    Service,
    /// The payload lacked fields the result needs.
    MalformedResponse,
    /// The call exceeded the configured timeout.
    Timeout,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Validation => write!(f, "validation error"),
            FailureKind::Transport => write!(f, "transport error"),
            FailureKind::Service => write!(f, "service error"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Timeout => write!(f, "timeout"),
        }
    }
}

/// Failure reported back for one conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionFailure {
    pub kind: FailureKind,
    /// Service-provided text, if the service sent any.
    pub message: Option<String>,
}

impl ConversionFailure {
    pub fn new(kind: FailureKind, message: Option<String>) -> Self {
        Self { kind, message }
    }

    pub fn transport(message: Option<String>) -> Self {
        Self::new(FailureKind::Transport, message)
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Service, Some(message.into()))
    }

    pub fn malformed() -> Self {
        Self::new(FailureKind::MalformedResponse, None)
    }

    pub fn timeout() -> Self {
        Self::new(FailureKind::Timeout, None)
    }

    /// The single line of text the user sees for this failure.
    pub fn user_message(&self) -> String {
        match self.kind {
            FailureKind::Validation => VALIDATION_MESSAGE.to_string(),
            FailureKind::Timeout => TIMEOUT_MESSAGE.to_string(),
            FailureKind::MalformedResponse => GENERIC_FAILURE_MESSAGE.to_string(),
            FailureKind::Transport | FailureKind::Service => self
                .message
                .as_deref()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or(GENERIC_FAILURE_MESSAGE)
                .to_string(),
        }
    }
}

/// Failure as held by the state once a cycle ends in `Phase::Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionError {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmissionError {
    pub(crate) fn validation() -> Self {
        Self {
            kind: FailureKind::Validation,
            message: VALIDATION_MESSAGE.to_string(),
        }
    }
}

impl From<ConversionFailure> for SubmissionError {
    fn from(failure: ConversionFailure) -> Self {
        Self {
            kind: failure.kind,
            message: failure.user_message(),
        }
    }
}
