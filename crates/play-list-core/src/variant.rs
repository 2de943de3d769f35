use std::fmt;
use std::str::FromStr;

use crate::error::PlayListError;

/// Optional color variant of a slide card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideVariant {
    Blue,
    Orange,
    Green,
    Purple,
}

impl SlideVariant {
    pub const ALL: [SlideVariant; 4] = [
        SlideVariant::Blue,
        SlideVariant::Orange,
        SlideVariant::Green,
        SlideVariant::Purple,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SlideVariant::Blue => "blue",
            SlideVariant::Orange => "orange",
            SlideVariant::Green => "green",
            SlideVariant::Purple => "purple",
        }
    }

    /// Parses an attribute-style tag where the empty string means "no variant".
    pub fn parse_optional(tag: &str) -> Result<Option<Self>, PlayListError> {
        if tag.trim().is_empty() {
            return Ok(None);
        }
        tag.parse().map(Some)
    }
}

impl fmt::Display for SlideVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlideVariant {
    type Err = PlayListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        SlideVariant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| PlayListError::UnknownVariant(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags_case_insensitively() {
        assert_eq!(" Orange ".parse::<SlideVariant>(), Ok(SlideVariant::Orange));
        assert_eq!(SlideVariant::parse_optional("purple"), Ok(Some(SlideVariant::Purple)));
        assert_eq!(SlideVariant::parse_optional(""), Ok(None));
    }

    #[test]
    fn rejects_unknown_tags() {
        assert_eq!(
            "teal".parse::<SlideVariant>(),
            Err(PlayListError::UnknownVariant("teal".to_string()))
        );
    }
}
