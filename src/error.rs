use thiserror::Error;

/// Failure of a single model fetch.
///
/// Every variant is terminal at this layer; callers decide whether to retry.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a readable response (DNS, refused, reset, timeout).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The registry answered with something other than `200 OK`.
    #[error("Server returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// A `200 OK` body that is not the expected JSON document.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Status code carried by [`FetchError::UnexpectedStatus`].
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoParseError {
    #[error("Repository `{0}` must have the form host/user/name")]
    Format(String),

    #[error("Repository `{input}` has an empty {segment}")]
    EmptySegment { input: String, segment: &'static str },
}

pub type Result<T> = std::result::Result<T, FetchError>;
