use {super::*, thiserror::Error};

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to decode response from {url}")]
  Decode {
    #[source]
    source: serde_json::Error,
    url: String,
  },
  #[error("invalid item kind `{0}`")]
  InvalidKind(String),
  #[error(transparent)]
  KindMismatch(#[from] KindMismatch),
  #[error("request to {url} failed")]
  Network {
    #[source]
    source: reqwest::Error,
    url: String,
  },
  #[error("nothing found at {url}")]
  NotFound { url: String },
  #[error(
    "item #{id} has unrecognised kind `{}`",
    kind.as_deref().unwrap_or("none")
  )]
  UnknownKind { id: u64, kind: Option<String> },
}

/// An item was requested as one kind but turned out to be another.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error(
  "requested item #{id} as a {expected}, but its kind is `{}`",
  actual.as_deref().unwrap_or("none")
)]
pub struct KindMismatch {
  /// The `type` tag the item actually carries, if any.
  pub actual: Option<String>,
  pub expected: Kind,
  pub id: u64,
}
