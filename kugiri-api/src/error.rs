//! API error types

use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
///
/// Only construction and input reading can fail; segmenting and querying a
/// constructed segmenter never does.
#[derive(Error, Debug)]
pub enum ApiError {
    /// An enumerated option got a value outside its set
    #[error("invalid value {value:?} for option {option}, expected one of: {expected}")]
    InvalidOption {
        /// Option name as spelled in the options bag
        option: &'static str,
        /// Rejected value
        value: String,
        /// Accepted values, comma separated
        expected: &'static str,
    },

    /// Structurally invalid language tag
    #[error("invalid language tag: {0:?}")]
    InvalidLocale(String),

    /// Locale configuration failed to parse or validate
    #[error("locale data error: {0}")]
    LocaleData(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Build an [`ApiError::InvalidOption`]
    pub fn invalid_option(
        option: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        ApiError::InvalidOption {
            option,
            value: value.into(),
            expected,
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
