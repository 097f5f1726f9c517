//! relay — report errors by email through Mailgun.
//!
//! This crate provides:
//! - [`Config`] — the four values Mailgun needs (domain, recipient,
//!   sender, API key), loadable from a JSON file
//! - [`Relay`] — posts a subject and an error message as a
//!   form-encoded request to the Mailgun messages endpoint
//! - [`RelayError`] — a closed taxonomy classifying every failure
//!
//! One attempt per send. No retry, no batching, no response-body
//! parsing.

pub mod client;
pub mod config;
pub mod error;

pub use client::Relay;
pub use config::Config;
pub use error::RelayError;
