use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::navigation::final_segment;

/// File name served for the course landing page.
pub const LANDING_PAGE: &str = "index.html";

/// Identifier for a chapter page, e.g. `01-intro.html`.
///
/// A chapter is recognised by its file name alone: two ASCII digits followed
/// by a hyphen. The digits give the chapter's position in the course.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChapterId(String);

/// Reasons a path segment is not a chapter identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChapterIdError {
    #[error("empty chapter identifier")]
    Empty,
    #[error("the landing page is not a chapter")]
    LandingPage,
    #[error("`{0}` does not start with a two-digit chapter prefix")]
    MissingPrefix(String),
    #[error("`{0}` contains a path separator")]
    NotASegment(String),
}

impl ChapterId {
    /// Parse a single path segment into a `ChapterId`.
    ///
    /// # Errors
    ///
    /// Returns `ChapterIdError` if the segment is empty, the landing page, or
    /// lacks the `NN-` prefix.
    pub fn parse(segment: &str) -> Result<Self, ChapterIdError> {
        if segment.is_empty() {
            return Err(ChapterIdError::Empty);
        }
        if segment == LANDING_PAGE {
            return Err(ChapterIdError::LandingPage);
        }
        if segment.contains('/') {
            return Err(ChapterIdError::NotASegment(segment.to_owned()));
        }
        if !has_chapter_prefix(segment) {
            return Err(ChapterIdError::MissingPrefix(segment.to_owned()));
        }
        Ok(Self(segment.to_owned()))
    }

    /// Derive the chapter from a page address (absolute URL or path).
    ///
    /// Only the final path segment is considered; query and fragment are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ChapterIdError` when the address points at a non-chapter page.
    pub fn from_address(address: &str) -> Result<Self, ChapterIdError> {
        Self::parse(&final_segment(address))
    }

    /// Position of the chapter in the course, taken from its two-digit prefix.
    #[must_use]
    pub fn ordinal(&self) -> u8 {
        let bytes = self.0.as_bytes();
        (bytes[0] - b'0') * 10 + (bytes[1] - b'0')
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn has_chapter_prefix(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_digit() && bytes[1].is_ascii_digit() && bytes[2] == b'-'
}

impl fmt::Debug for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChapterId({})", self.0)
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChapterId {
    type Err = ChapterIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ChapterId {
    type Error = ChapterIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ChapterId> for String {
    fn from(id: ChapterId) -> Self {
        id.0
    }
}

impl AsRef<str> for ChapterId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
