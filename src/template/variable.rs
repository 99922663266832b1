use crate::error::{BotError, Location};
use crate::text::html_escape;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    // Match {{ var }}, {{& var }} (raw) or \{{ (escaped)
    // Group 1: optional backslash for escape
    // Group 2: optional ampersand for raw output
    // Group 3: variable name/path
    static ref VAR_PATTERN: Regex = Regex::new(r"(\\)?\{\{(&)?\s*([^}]+?)\s*\}\}").unwrap();
}

/// Undefined variables are always errors: every page context is built in code.
pub struct VariableSubstitutor;

impl VariableSubstitutor {
    /// Substitute all variables in the content
    pub fn substitute(
        &self,
        content: &str,
        data: &Value,
        template: &str,
    ) -> Result<String, BotError> {
        let mut result = String::with_capacity(content.len());
        let mut last_end = 0;

        for cap in VAR_PATTERN.captures_iter(content) {
            let full_match = cap.get(0).unwrap();
            let start = full_match.start();
            let end = full_match.end();

            result.push_str(&content[last_end..start]);

            if cap.get(1).is_some() {
                // Escaped: \{{ ... }} -> {{ ... }}
                result.push_str("{{");
                if cap.get(2).is_some() {
                    result.push('&');
                }
                result.push(' ');
                result.push_str(&cap[3]);
                result.push_str(" }}");
            } else {
                let var_path = cap[3].trim();
                let raw = cap.get(2).is_some();
                let location = Location::from_offset(content, start, template);

                let value = Self::resolve_variable(var_path, data, &location)?;
                if raw {
                    result.push_str(&value);
                } else {
                    result.push_str(&html_escape(&value));
                }
            }

            last_end = end;
        }

        result.push_str(&content[last_end..]);

        Ok(result)
    }

    /// Resolve a variable path like "lesson.title" or "sections.0"
    fn resolve_variable(path: &str, data: &Value, location: &Location) -> Result<String, BotError> {
        let mut current = data;

        for part in path.split('.') {
            if let Ok(index) = part.parse::<usize>() {
                if let Some(value) = current.get(index) {
                    current = value;
                    continue;
                }
            }

            current = current.get(part).ok_or_else(|| BotError::UndefinedVariable {
                name: path.to_string(),
                location: location.clone(),
            })?;
        }

        Ok(Self::value_to_string(current))
    }

    fn value_to_string(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            Value::Array(_) | Value::Object(_) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_substitution() {
        let sub = VariableSubstitutor;
        let data = json!({"shape": "hexagon"});
        let result = sub.substitute("Shape: {{ shape }}!", &data, "t").unwrap();
        assert_eq!(result, "Shape: hexagon!");
    }

    #[test]
    fn test_nested_and_array_path() {
        let sub = VariableSubstitutor;
        let data = json!({"lesson": {"objectives": ["first", "second"]}});
        let result = sub
            .substitute("{{ lesson.objectives.1 }}", &data, "t")
            .unwrap();
        assert_eq!(result, "second");
    }

    #[test]
    fn test_values_are_html_escaped() {
        let sub = VariableSubstitutor;
        let data = json!({"title": "<Circles & Squares>"});
        let result = sub.substitute("<h1>{{ title }}</h1>", &data, "t").unwrap();
        assert_eq!(result, "<h1>&lt;Circles &amp; Squares&gt;</h1>");
    }

    #[test]
    fn test_raw_values_are_not_escaped() {
        let sub = VariableSubstitutor;
        let data = json!({"list": "<li>One</li>"});
        let result = sub.substitute("<ul>{{& list }}</ul>", &data, "t").unwrap();
        assert_eq!(result, "<ul><li>One</li></ul>");
    }

    #[test]
    fn test_number_and_bool_values() {
        let sub = VariableSubstitutor;
        let data = json!({"sides": 6, "interactive": false});
        let result = sub
            .substitute("{{ sides }} {{ interactive }}", &data, "t")
            .unwrap();
        assert_eq!(result, "6 false");
    }

    #[test]
    fn test_escape_marker() {
        let sub = VariableSubstitutor;
        let result = sub.substitute(r"Use \{{ name }} here", &json!({}), "t").unwrap();
        assert_eq!(result, "Use {{ name }} here");
    }

    #[test]
    fn test_undefined_variable_is_error() {
        let sub = VariableSubstitutor;
        let result = sub.substitute("line\n{{ missing }}", &json!({}), "page.html");
        match result {
            Err(BotError::UndefinedVariable { name, location }) => {
                assert_eq!(name, "missing");
                assert_eq!(location.line, 2);
                assert_eq!(location.template, "page.html");
            }
            _ => panic!("Expected UndefinedVariable error"),
        }
    }

    #[test]
    fn test_single_braces_untouched() {
        let sub = VariableSubstitutor;
        let css = "body { margin: 0; } function f() { return 1; }";
        assert_eq!(sub.substitute(css, &json!({}), "t").unwrap(), css);
    }
}
