//! The relay client: formats an error report and posts it to the
//! Mailgun messages endpoint.

use std::fmt::Display;

use chrono::Utc;
use reqwest::StatusCode;
use url::Url;

use crate::config::Config;
use crate::error::RelayError;

/// Default Mailgun API base. Regional deployments (e.g.
/// `https://api.eu.mailgun.net/v2`) can be selected with
/// [`Relay::with_base_url`].
pub const MAILGUN_API_BASE: &str = "https://api.mailgun.net/v2";

/// RFC 1123 timestamp layout, rendered against UTC.
const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// A client that reports errors as emails through Mailgun.
///
/// Holds the validated [`Config`] and a pooled [`reqwest::Client`].
/// Immutable after construction; safe to share and reuse across tasks
/// for any number of [`send`](Relay::send) calls.
#[derive(Debug, Clone)]
pub struct Relay {
    client: reqwest::Client,
    config: Config,
    base_url: String,
}

impl Relay {
    /// Builds a relay from a config.
    ///
    /// Fails with [`RelayError::BadConfig`] if any of the four fields
    /// is empty.
    pub fn new(config: Config) -> Result<Self, RelayError> {
        config.validate()?;
        Ok(Self {
            client: reqwest::Client::new(),
            config,
            base_url: MAILGUN_API_BASE.to_string(),
        })
    }

    /// Points the relay at a different API base.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sends `err` to the configured recipient under `subject`.
    ///
    /// The message body is the current RFC 1123 timestamp, `": \n"`,
    /// then the error's rendered message. One attempt, no retry; the
    /// response body is not read.
    ///
    /// Responses are classified by status: 200 is success, 4xx is
    /// [`RelayError::BadRequest`], 5xx is
    /// [`RelayError::ProviderUnavailable`], anything else is
    /// [`RelayError::Unknown`]. Transport failures surface as
    /// [`RelayError::Transport`] with the source error intact.
    pub async fn send(&self, subject: &str, err: &dyn Display) -> Result<(), RelayError> {
        let body = encode_form(&self.config, subject, &compose_body(err));

        let endpoint = format!("{}/{}/messages", self.base_url, self.config.domain);
        let url = Url::parse(&endpoint).map_err(|_| RelayError::BadRequest)?;

        tracing::debug!(domain = %self.config.domain, subject, "sending error report");

        let response = self
            .client
            .post(url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .basic_auth("api", Some(&self.config.api_key))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        match classify_status(status) {
            Ok(()) => {
                tracing::info!(to = %self.config.to, subject, "error report delivered");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%status, subject, "mailgun returned non-success status");
                Err(e)
            }
        }
    }
}

/// Renders the message body: RFC 1123 timestamp, `": \n"`, message.
fn compose_body(err: &dyn Display) -> String {
    format!("{}: \n{}", Utc::now().format(RFC1123_FORMAT), err)
}

/// Percent-encodes the four message fields as a form payload.
fn encode_form(config: &Config, subject: &str, text: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("from", &config.from)
        .append_pair("to", &config.to)
        .append_pair("subject", subject)
        .append_pair("text", text)
        .finish()
}

/// Maps a response status onto the send outcome.
///
/// 200 is the only success; 4xx means the request was rejected, 5xx
/// means Mailgun is down, anything else is out of contract for this
/// endpoint.
fn classify_status(status: StatusCode) -> Result<(), RelayError> {
    match status.as_u16() {
        200 => Ok(()),
        400..=499 => Err(RelayError::BadRequest),
        s @ 500..=599 => Err(RelayError::ProviderUnavailable(s)),
        s => Err(RelayError::Unknown(s)),
    }
}
