//! Error types for selectbox.
//!
//! The widget itself never fails; these cover the host program's I/O,
//! configuration and terminal setup.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for selectbox
#[derive(Debug, Error)]
pub enum SelectboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for SelectboxError
pub type Result<T> = std::result::Result<T, SelectboxError>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_names_file() {
        let source = toml::from_str::<toml::Table>("width = ").unwrap_err();
        let err = SelectboxError::Config {
            path: PathBuf::from("/tmp/selectbox.toml"),
            source,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid config file /tmp/selectbox.toml: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_and_terminal_messages() {
        let io: SelectboxError = std::io::Error::other("disk gone").into();
        assert_eq!(io.to_string(), "IO error: disk gone");
        assert_eq!(
            SelectboxError::Terminal("no tty".into()).to_string(),
            "Terminal error: no tty"
        );
    }
}
