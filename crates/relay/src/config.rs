//! Relay configuration: the four values needed to authenticate and
//! address Mailgun.
//!
//! File IO is deliberately kept out of [`Relay::new`](crate::Relay::new);
//! callers decide whether a config comes from a file
//! ([`Config::from_file`]) or is built in code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// Well-known config file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// The four required values for sending through Mailgun.
///
/// All fields must be non-empty. An empty-but-present field is
/// rejected the same way a missing key is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Mailgun sending domain (e.g. `mg.example.com`).
    pub domain: String,
    /// Recipient address.
    pub to: String,
    /// Sender address.
    pub from: String,
    /// Mailgun API key, used as the Basic Auth password.
    pub api_key: String,
}

impl Config {
    /// Checks that all four fields are non-empty.
    pub fn validate(&self) -> Result<(), RelayError> {
        for (name, value) in [
            ("domain", &self.domain),
            ("to", &self.to),
            ("from", &self.from),
            ("api_key", &self.api_key),
        ] {
            if value.is_empty() {
                return Err(RelayError::BadConfig(format!(
                    "field '{name}' is missing or empty"
                )));
            }
        }
        Ok(())
    }

    /// Reads a config from a JSON file.
    ///
    /// Returns [`RelayError::NoConfig`] when the file cannot be
    /// opened and [`RelayError::BadConfig`] when its contents don't
    /// parse as the expected four-field object. Field values are not
    /// checked for emptiness here; that happens in
    /// [`Relay::new`](crate::Relay::new).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RelayError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|_| RelayError::NoConfig)?;
        serde_json::from_str(&contents)
            .map_err(|e| RelayError::BadConfig(format!("failed to parse config file: {e}")))
    }

    /// Reads [`DEFAULT_CONFIG_FILE`] from the current directory.
    pub fn load_default() -> Result<Self, RelayError> {
        Self::from_file(DEFAULT_CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid() -> Config {
        Config {
            domain: "mg.example.com".to_string(),
            to: "ops@example.com".to_string(),
            from: "relay@mg.example.com".to_string(),
            api_key: "key-123".to_string(),
        }
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn validate_rejects_each_empty_field() {
        for field in ["domain", "to", "from", "api_key"] {
            let mut config = valid();
            match field {
                "domain" => config.domain.clear(),
                "to" => config.to.clear(),
                "from" => config.from.clear(),
                _ => config.api_key.clear(),
            }
            let err = config.validate().unwrap_err();
            match err {
                RelayError::BadConfig(msg) => {
                    assert!(msg.contains(field), "expected '{field}' in: {msg}")
                }
                other => panic!("expected BadConfig, got: {other:?}"),
            }
        }
    }

    #[test]
    fn from_file_missing_is_no_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("does-not-exist.json"));
        assert!(matches!(result, Err(RelayError::NoConfig)));
    }

    #[test]
    fn from_file_invalid_json_is_bad_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(RelayError::BadConfig(_))));
    }

    #[test]
    fn from_file_missing_key_is_bad_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"domain": "mg.example.com", "to": "ops@example.com", "from": "relay@mg.example.com"}}"#
        )
        .unwrap();
        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(RelayError::BadConfig(_))));
    }

    #[test]
    fn from_file_parses_all_four_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"domain": "mg.example.com", "to": "ops@example.com", "from": "relay@mg.example.com", "api_key": "key-123"}}"#
        )
        .unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.domain, "mg.example.com");
        assert_eq!(config.to, "ops@example.com");
        assert_eq!(config.from, "relay@mg.example.com");
        assert_eq!(config.api_key, "key-123");
    }

    #[test]
    fn from_file_empty_field_parses_but_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"domain": "", "to": "ops@example.com", "from": "relay@mg.example.com", "api_key": "key-123"}}"#
        )
        .unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert!(matches!(
            config.validate(),
            Err(RelayError::BadConfig(_))
        ));
    }
}
