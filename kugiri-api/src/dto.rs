//! Data Transfer Objects for API

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Input source for segmentation
pub enum Input {
    /// Text string
    Text(String),
    /// UTF-16 code units; lone surrogates are allowed
    Utf16(Vec<u16>),
    /// UTF-8 file
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader producing UTF-8
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::Utf16(units) => f.debug_tuple("Utf16").field(&units.len()).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from UTF-16 code units
    pub fn from_utf16(units: impl Into<Vec<u16>>) -> Self {
        Input::Utf16(units.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the input as UTF-16 code units
    pub fn read_units(self) -> Result<Vec<u16>> {
        match self {
            Input::Utf16(units) => Ok(units),
            other => Ok(other.read_text()?.encode_utf16().collect()),
        }
    }

    /// Read the input as text
    ///
    /// Lone surrogates in [`Input::Utf16`] become U+FFFD.
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::Utf16(units) => Ok(String::from_utf16_lossy(&units)),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

/// Serializable segment record
///
/// Serializes with the keys `segment`, `index`, `input` and `isWordLike`;
/// `input` is only present for `containing` results and `isWordLike` only
/// at word granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentData {
    /// Segment text
    pub segment: String,
    /// Code unit offset of the segment start
    pub index: usize,
    /// Whole input text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Whether the segment is word-like
    #[serde(
        default,
        rename = "isWordLike",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_word_like: Option<bool>,
}

impl SegmentData {
    /// Compact JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_text_variants() {
        assert_eq!(Input::from_text("abc").read_text().unwrap(), "abc");
        assert_eq!(Input::from_bytes(b"abc".to_vec()).read_text().unwrap(), "abc");
        assert_eq!(
            Input::from_reader(Cursor::new("abc")).read_text().unwrap(),
            "abc"
        );
        assert!(matches!(
            Input::from_bytes(vec![0xff, 0xfe]).read_text(),
            Err(ApiError::Utf8(_))
        ));
    }

    #[test]
    fn test_read_units_keeps_lone_surrogates() {
        let units = vec![0x61, 0xD800, 0x62];
        assert_eq!(Input::from_utf16(units.clone()).read_units().unwrap(), units);
        assert_eq!(Input::from("é").read_units().unwrap(), vec![0xE9]);
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "Hello.").unwrap();
        assert_eq!(Input::from_file(&path).read_text().unwrap(), "Hello.");
        assert!(Input::from_file(dir.path().join("missing.txt")).read_text().is_err());
    }

    #[test]
    fn test_segment_data_json() {
        let data = SegmentData {
            segment: "y".to_string(),
            index: 7,
            input: Some("Allons-y!".to_string()),
            is_word_like: Some(true),
        };
        assert_eq!(
            data.to_json().unwrap(),
            r#"{"segment":"y","index":7,"input":"Allons-y!","isWordLike":true}"#
        );

        let plain = SegmentData {
            input: None,
            is_word_like: None,
            ..data
        };
        assert_eq!(plain.to_json().unwrap(), r#"{"segment":"y","index":7}"#);
    }
}
