//! Core types shared by the classifier and its callers

use core::fmt;
use core::str::FromStr;

use crate::error::CoreError;

/// Segmentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Granularity {
    /// Extended grapheme clusters
    #[default]
    Grapheme,
    /// Words, with whitespace and punctuation runs in between
    Word,
    /// Sentences
    Sentence,
}

impl Granularity {
    /// Every granularity, in option-string order
    pub const ALL: [Granularity; 3] = [
        Granularity::Grapheme,
        Granularity::Word,
        Granularity::Sentence,
    ];

    /// Option string for this granularity
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Grapheme => "grapheme",
            Granularity::Word => "word",
            Granularity::Sentence => "sentence",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = CoreError;

    /// Option strings are matched exactly, like other enumerated options
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Granularity::ALL
            .into_iter()
            .find(|granularity| granularity.as_str() == value)
            .ok_or_else(|| CoreError::UnknownGranularity(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_round_trip() {
        for granularity in Granularity::ALL {
            assert_eq!(granularity.as_str().parse::<Granularity>(), Ok(granularity));
        }
    }

    #[test]
    fn test_granularity_rejects_unknown_values() {
        assert!("line".parse::<Granularity>().is_err());
        assert!("Word".parse::<Granularity>().is_err());
        assert!("".parse::<Granularity>().is_err());
    }

    #[test]
    fn test_default_is_grapheme() {
        assert_eq!(Granularity::default(), Granularity::Grapheme);
        assert_eq!(Granularity::Sentence.to_string(), "sentence");
    }
}
