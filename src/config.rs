use crate::error::BotError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Example configuration shipped with the repository, used by `geociv setup`.
pub const EXAMPLE_CONFIG: &str = include_str!("../config.example.json");

/// The bots that can be toggled in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotKind {
    ContentGenerator,
    QuizGenerator,
    VisualizationGenerator,
    Assessment,
    ImageDecomposer,
}

impl BotKind {
    pub const ALL: [BotKind; 5] = [
        BotKind::ContentGenerator,
        BotKind::QuizGenerator,
        BotKind::VisualizationGenerator,
        BotKind::Assessment,
        BotKind::ImageDecomposer,
    ];

    /// Key under `bots` in the config file
    pub fn config_key(self) -> &'static str {
        match self {
            BotKind::ContentGenerator => "contentGenerator",
            BotKind::QuizGenerator => "quizGenerator",
            BotKind::VisualizationGenerator => "visualizationGenerator",
            BotKind::Assessment => "assessment",
            BotKind::ImageDecomposer => "imageDecomposer",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            BotKind::ContentGenerator => "Content Generator Bot",
            BotKind::QuizGenerator => "Quiz Generator Bot",
            BotKind::VisualizationGenerator => "Visualization Generator Bot",
            BotKind::Assessment => "Assessment Bot",
            BotKind::ImageDecomposer => "Image Decomposition Bot",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parsed `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub bots: BTreeMap<String, BotSettings>,

    #[serde(default)]
    pub ai: Value,

    #[serde(default)]
    pub curriculum: Value,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Config {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Config with every listed bot enabled
    pub fn with_enabled(bots: &[BotKind]) -> Self {
        let bots = bots
            .iter()
            .map(|b| {
                (
                    b.config_key().to_string(),
                    BotSettings {
                        enabled: true,
                        extra: Map::new(),
                    },
                )
            })
            .collect();

        Config {
            bots,
            ..Config::default()
        }
    }

    /// Fail unless `bots.<key>.enabled` is true. A missing entry counts as disabled.
    pub fn ensure_enabled(&self, bot: BotKind) -> Result<(), BotError> {
        let enabled = self
            .bots
            .get(bot.config_key())
            .map(|settings| settings.enabled)
            .unwrap_or(false);

        if enabled {
            Ok(())
        } else {
            Err(BotError::BotDisabled {
                name: bot.display_name(),
                key: bot.config_key(),
            })
        }
    }
}

/// Where a bot gets its configuration from.
pub trait ConfigSource {
    fn load(&self) -> Result<Config, BotError>;
}

/// Reads the config file from disk on every call.
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> Result<Config, BotError> {
        let path_str = self.path.display().to_string();

        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BotError::ConfigMissing {
                path: path_str.clone(),
            },
            _ => BotError::ConfigRead {
                path: path_str.clone(),
                source: e,
            },
        })?;

        let config = Config::from_json(&content).map_err(|e| BotError::ConfigParse {
            path: path_str.clone(),
            source: e,
        })?;

        debug!(path = %path_str, bots = config.bots.len(), "loaded config");
        Ok(config)
    }
}

/// An in-memory config acts as its own source.
impl ConfigSource for Config {
    fn load(&self) -> Result<Config, BotError> {
        Ok(self.clone())
    }
}
