use std::fmt;

/// Exit codes. Every failure category maps to the same code.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

const SETUP_HINT: &str = concat!(
    "Create one with `geociv setup`, or copy the example config:\n",
    "  cp config.example.json config.json"
);

/// Location information for template error reporting
#[derive(Debug, Clone)]
pub struct Location {
    pub template: String,
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Calculate location from content and byte offset
    pub fn from_offset(content: &str, offset: usize, template: &str) -> Self {
        let before = &content[..offset.min(content.len())];
        let lines: Vec<&str> = before.split('\n').collect();
        let line = lines.len();
        let column = lines.last().map(|l| l.len() + 1).unwrap_or(1);

        Location {
            template: template.to_string(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.template, self.line, self.column)
    }
}

/// Main error type for the curriculum bots
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    // Usage errors
    #[error("{message}")]
    Usage {
        message: String,
        help: &'static str,
    },

    // Configuration errors
    #[error("config file '{path}' not found")]
    ConfigMissing { path: String },

    #[error("could not read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("could not parse config file '{path}': {source}")]
    ConfigParse {
        path: String,
        source: serde_json::Error,
    },

    #[error("{name} is disabled in the config file")]
    BotDisabled { name: &'static str, key: &'static str },

    // Input errors
    #[error("{kind} file not found: {path}")]
    InputNotFound { kind: &'static str, path: String },

    #[error("failed to read '{path}': {source}")]
    InputRead {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': {source}")]
    InputParse {
        path: String,
        source: anyhow::Error,
    },

    // Template errors
    #[error("undefined variable '{name}' at {location}")]
    UndefinedVariable { name: String, location: Location },

    #[error("template not found: '{name}' referenced from {from}")]
    TemplateNotFound { name: String, from: String },

    #[error("circular include detected: {name}")]
    CircularInclude { name: String },

    #[error("include depth limit exceeded (max: {max_depth})")]
    IncludeDepthExceeded { max_depth: usize },

    // Output errors
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write '{path}': {source}")]
    OutputWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] rustyline::error::ReadlineError),
}

impl BotError {
    /// Build a usage error carrying the help text of the bot that raised it
    pub fn usage(message: impl Into<String>, help: &'static str) -> Self {
        BotError::Usage {
            message: message.into(),
            help,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }

    /// Help text printed after the message, if any
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BotError::Usage { help, .. } => Some(help),
            _ => None,
        }
    }

    /// Remediation hint printed after the message
    pub fn remediation(&self) -> String {
        let hint = match self {
            BotError::Usage { .. } => "",
            BotError::ConfigMissing { .. } => SETUP_HINT,
            BotError::ConfigRead { .. } => {
                "Check that the config file is readable, or pass another one with --config."
            }
            BotError::ConfigParse { .. } => "Make sure the config file contains valid JSON.",
            BotError::BotDisabled { key, .. } => {
                return format!("Set bots.{}.enabled to true to use this bot.", key);
            }
            BotError::InputNotFound { .. } => "Make sure the path is correct and try again.",
            _ => "Run `geociv tutor` for help debugging this issue.",
        };
        hint.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_offset() {
        let content = "line one\nline two {{ x }}";
        let offset = content.find("{{").unwrap();
        let location = Location::from_offset(content, offset, "page.html");

        assert_eq!(location.line, 2);
        assert_eq!(location.column, 10);
        assert_eq!(location.to_string(), "page.html:2:10");
    }

    #[test]
    fn test_every_error_exits_with_one() {
        let errors = vec![
            BotError::usage("missing --topic", "help"),
            BotError::ConfigMissing {
                path: "config.json".to_string(),
            },
            BotError::InputNotFound {
                kind: "Image",
                path: "a.jpg".to_string(),
            },
            BotError::IncludeDepthExceeded { max_depth: 3 },
        ];

        for error in errors {
            assert_eq!(error.exit_code(), EXIT_FAILURE);
        }
    }

    #[test]
    fn test_disabled_remediation_names_key() {
        let error = BotError::BotDisabled {
            name: "Quiz Generator Bot",
            key: "quizGenerator",
        };

        assert!(error.remediation().contains("bots.quizGenerator.enabled"));
        assert_eq!(
            error.to_string(),
            "Quiz Generator Bot is disabled in the config file"
        );
    }

    #[test]
    fn test_usage_carries_help() {
        let error = BotError::usage("Missing required argument: --shape", "HELP TEXT");
        assert_eq!(error.help(), Some("HELP TEXT"));
        assert_eq!(error.to_string(), "Missing required argument: --shape");
    }
}
