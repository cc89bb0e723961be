//! Tool categories.
//!
//! Every tool in the catalog belongs to exactly one category, and every
//! parsed intent names a primary category (plus optional secondaries).
//! Category *detection* priority is not defined here - it is the declaration
//! order of the keyword table shipped with the server.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain category for tools and intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Image generation, graphic design, photo editing.
    Visual,
    /// Writing, copywriting, long-form content.
    Text,
    /// Music, voice synthesis, podcasts, sound.
    Audio,
    /// Academic research, literature review, cited answers.
    Research,
    /// Video generation, editing, animation.
    Video,
    /// Data analysis, visualization, dashboards.
    Data,
    /// Programming, software development, debugging.
    Code,
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Visual,
        Self::Text,
        Self::Audio,
        Self::Research,
        Self::Video,
        Self::Data,
        Self::Code,
    ];

    /// Lowercase wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Text => "text",
            Self::Audio => "audio",
            Self::Research => "research",
            Self::Video => "video",
            Self::Data => "data",
            Self::Code => "code",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visual" => Ok(Self::Visual),
            "text" => Ok(Self::Text),
            "audio" => Ok(Self::Audio),
            "research" => Ok(Self::Research),
            "video" => Ok(Self::Video),
            "data" => Ok(Self::Data),
            "code" => Ok(Self::Code),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
