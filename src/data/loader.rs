use crate::document::Outline;
use crate::error::BotError;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Reads files that a bot was pointed at with a flag.
pub struct InputLoader;

impl InputLoader {
    /// Fail with `InputNotFound` unless `path` exists.
    pub fn ensure_exists(path: &Path, kind: &'static str) -> Result<(), BotError> {
        if path.exists() {
            Ok(())
        } else {
            Err(BotError::InputNotFound {
                kind,
                path: path.display().to_string(),
            })
        }
    }

    fn read(path: &Path, kind: &'static str) -> Result<String, BotError> {
        let path_str = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BotError::InputNotFound {
                kind,
                path: path_str.clone(),
            },
            _ => BotError::InputRead {
                path: path_str.clone(),
                source: e,
            },
        })?;

        debug!("read {} bytes from {}", content.len(), path_str);
        Ok(content)
    }

    /// Load a file that must contain JSON, whatever its extension.
    pub fn load_json(path: &Path, kind: &'static str) -> Result<Value, BotError> {
        let content = Self::read(path, kind)?;
        serde_json::from_str(&content).map_err(|e| BotError::InputParse {
            path: path.display().to_string(),
            source: anyhow::Error::new(e),
        })
    }

    /// Load a curriculum outline
    ///
    /// `.json`, `.yaml` and `.yml` outlines are parsed and kept alongside the
    /// raw text; anything else is treated as plain text.
    pub fn load_outline(path: &Path) -> Result<Outline, BotError> {
        let raw = Self::read(path, "Outline")?;
        let path_str = path.display().to_string();

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let structured = match extension.as_str() {
            "yaml" | "yml" => Some(serde_yaml::from_str::<Value>(&raw).map_err(|e| {
                BotError::InputParse {
                    path: path_str,
                    source: anyhow::Error::new(e),
                }
            })?),
            "json" => Some(serde_json::from_str::<Value>(&raw).map_err(|e| {
                BotError::InputParse {
                    path: path_str,
                    source: anyhow::Error::new(e),
                }
            })?),
            _ => None,
        };

        Ok(Outline { raw, structured })
    }
}
