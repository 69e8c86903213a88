//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid grid or canvas configuration, unknown tiling names, malformed cell keys,
//! project document failures, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown tiling kind '{name}'")]
    UnknownTilingKind { name: String },

    #[error("invalid cell key '{key}'")]
    InvalidCellKey { key: String },

    #[error("invalid project document: {0}")]
    Document(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Document(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_messages_become_other() {
        let owned: Error = String::from("grid missing").into();
        assert!(matches!(owned, Error::Other(ref msg) if msg == "grid missing"));
        let borrowed: Error = "no partition".into();
        assert_eq!(borrowed.to_string(), "no partition");
    }

    #[test]
    fn display_names_the_offending_value() {
        let err = Error::UnknownTilingKind {
            name: "PENTAGON".into(),
        };
        assert_eq!(err.to_string(), "unknown tiling kind 'PENTAGON'");

        let err = Error::InvalidCellKey { key: "1;2".into() };
        assert_eq!(err.to_string(), "invalid cell key '1;2'");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_errors_become_document_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Document(_)));
    }
}
