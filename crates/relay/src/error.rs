//! Error taxonomy shared by configuration loading and send attempts.

use thiserror::Error;

/// Errors produced by the relay.
///
/// Transport failures keep their `reqwest::Error` source intact and
/// are never remapped into the semantic variants. Nothing here is
/// retryable at this layer.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The config file could not be opened.
    #[error("no config provided and the config file could not be read")]
    NoConfig,

    /// The config is unparseable or has a missing/empty field.
    #[error("bad config: {0}")]
    BadConfig(String),

    /// The outgoing request could not be built, or Mailgun rejected
    /// it with a 4xx status.
    #[error("the request was rejected as invalid")]
    BadRequest,

    /// Mailgun reported a server-side failure (5xx).
    #[error("mailgun is unavailable (status {0})")]
    ProviderUnavailable(u16),

    /// A response status outside the recognized 200/4xx/5xx ranges.
    #[error("unexpected response status {0}")]
    Unknown(u16),

    /// The HTTP transport itself failed (DNS, connect, TLS, timeout).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
