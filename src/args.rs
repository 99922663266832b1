//! Raw `--flag value` parsing shared by every bot.

use std::collections::BTreeMap;
use tracing::warn;

/// Returns true when `--help` or `-h` appears anywhere in the tokens.
pub fn wants_help(tokens: &[String]) -> bool {
    tokens.iter().any(|t| t == "--help" || t == "-h")
}

/// Direct membership test for a bare flag such as `--demo`.
pub fn has_flag(tokens: &[String], flag: &str) -> bool {
    tokens.iter().any(|t| t == flag)
}

/// Flag values keyed by flag name (without the leading `--`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    values: BTreeMap<String, String>,
}

impl RawOptions {
    /// Parse tokens as strict `--flag value` pairs.
    ///
    /// A flag without a value, or whose value is itself a `--flag`, is
    /// rejected instead of shifting every later pair. Repeated flags keep the
    /// last value.
    pub fn parse(tokens: &[String]) -> Result<Self, String> {
        let mut values = BTreeMap::new();
        let mut iter = tokens.iter();

        while let Some(token) = iter.next() {
            let name = match token.strip_prefix("--") {
                Some(name) if !name.is_empty() => name,
                _ => {
                    return Err(format!(
                        "Unexpected argument '{}' (flags look like --name value)",
                        token
                    ));
                }
            };

            let value = match iter.next() {
                Some(value) if !value.starts_with("--") => value,
                _ => return Err(format!("Missing value for --{}", name)),
            };

            if let Some(previous) = values.insert(name.to_string(), value.clone()) {
                warn!(
                    flag = name,
                    previous = %previous,
                    value = %value,
                    "flag repeated, keeping last value"
                );
            }
        }

        Ok(RawOptions { values })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_pairs() {
        let opts = RawOptions::parse(&tokens(&[
            "--civilization",
            "ancient-egypt",
            "--topic",
            "circles",
        ]))
        .unwrap();
        assert_eq!(opts.get("civilization"), Some("ancient-egypt"));
        assert_eq!(opts.get("topic"), Some("circles"));
        assert_eq!(opts.len(), 2);
    }

    #[test]
    fn test_values_stay_strings() {
        let opts =
            RawOptions::parse(&tokens(&["--questions", "10", "--interactive", "false"])).unwrap();
        assert_eq!(opts.get("questions"), Some("10"));
        assert_eq!(opts.get("interactive"), Some("false"));
    }

    #[test]
    fn test_empty_is_ok() {
        let opts = RawOptions::parse(&[]).unwrap();
        assert_eq!(opts.len(), 0);
        assert_eq!(opts.get_or("difficulty", "intermediate"), "intermediate");
    }

    #[test]
    fn test_repeated_flag_last_wins() {
        let opts = RawOptions::parse(&tokens(&["--topic", "a", "--topic", "b"])).unwrap();
        assert_eq!(opts.get("topic"), Some("b"));
    }

    #[test]
    fn test_trailing_flag_without_value() {
        let result = RawOptions::parse(&tokens(&["--topic", "circles", "--civilization"]));
        assert_eq!(result.unwrap_err(), "Missing value for --civilization");
    }

    #[test]
    fn test_bare_flag_in_the_middle() {
        let result = RawOptions::parse(&tokens(&["--topic", "--civilization", "egypt"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_positional_token_rejected() {
        let result = RawOptions::parse(&tokens(&["circles", "--topic", "x"]));
        assert!(result.unwrap_err().contains("circles"));
    }

    #[test]
    fn test_double_dash_alone_rejected() {
        assert!(RawOptions::parse(&tokens(&["--", "x"])).is_err());
    }

    #[test]
    fn test_negative_number_value_allowed() {
        let opts = RawOptions::parse(&tokens(&["--questions", "-3"])).unwrap();
        assert_eq!(opts.get("questions"), Some("-3"));
    }

    #[test]
    fn test_membership_checks() {
        let t = tokens(&["--image", "a.jpg", "--demo"]);
        assert!(has_flag(&t, "--demo"));
        assert!(!wants_help(&t));
        assert!(wants_help(&tokens(&["--topic", "x", "-h"])));
    }
}
