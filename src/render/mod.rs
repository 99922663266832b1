pub mod html;
pub mod markdown;

use crate::error::BotError;
use serde::Serialize;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Markdown,
    Html,
}

impl Format {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "json" => Ok(Format::Json),
            "markdown" => Ok(Format::Markdown),
            "html" => Ok(Format::Html),
            _ => Err(format!(
                "Invalid --format '{}' (expected json, markdown or html)",
                value
            )),
        }
    }

    /// File extension used for generated files
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Markdown => "markdown",
            Format::Html => "html",
        }
    }
}

/// Pretty-print a document as JSON with 2-space indentation.
pub fn to_json<T: Serialize>(document: &T) -> Result<String, BotError> {
    Ok(serde_json::to_string_pretty(document)?)
}
