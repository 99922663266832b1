//! Structured documents built from typed bot options.
//!
//! Each bot has an options struct built from [`RawOptions`] (required fields,
//! defaults and value checks live there) and a pure builder that turns those
//! options plus a timestamp into a serializable document.

pub mod decomposition;
pub mod lesson;
pub mod quiz;
pub mod review;
pub mod visualization;

use crate::args::RawOptions;
use crate::text::is_path_safe;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

pub use decomposition::{DecompositionDocument, DecompositionOptions, Outline};
pub use lesson::{LessonDocument, LessonOptions};
pub use quiz::{QuizDocument, QuizOptions};
pub use review::{Review, ReviewOptions};
pub use visualization::{VisualizationOptions, VisualizationSpec};

pub const FORMAT_VERSION: &str = "1.0";

/// Generation stamp carried in every document's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    pub generated_date: String,
    pub version: String,
}

impl Stamp {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            generated_date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: FORMAT_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Mixed,
}

impl Difficulty {
    pub fn parse(value: &str, allow_mixed: bool) -> Result<Self, String> {
        match value {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            "mixed" if allow_mixed => Ok(Difficulty::Mixed),
            _ if allow_mixed => Err(format!(
                "Invalid --difficulty '{}' (expected beginner, intermediate, advanced or mixed)",
                value
            )),
            _ => Err(format!(
                "Invalid --difficulty '{}' (expected beginner, intermediate or advanced)",
                value
            )),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Mixed => "mixed",
        };
        f.write_str(s)
    }
}

/// Look up a required, non-empty flag.
pub(crate) fn required<'a>(raw: &'a RawOptions, name: &str) -> Result<&'a str, String> {
    match raw.get(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format!("Missing required argument: --{}", name)),
    }
}

/// Flag values that end up as a file or directory name.
pub(crate) fn path_token(name: &str, value: &str) -> Result<String, String> {
    if is_path_safe(value) {
        Ok(value.to_string())
    } else {
        Err(format!(
            "Invalid --{} '{}' (must be a plain name, no path separators or control characters)",
            name, value
        ))
    }
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
