use crate::error::BotError;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use super::registry::TemplateRegistry;

lazy_static! {
    // Match {{> partial-name }}
    static ref INCLUDE_PATTERN: Regex = Regex::new(r"\{\{>\s*([^}]+?)\s*\}\}").unwrap();
}

pub struct IncludeResolver<'a> {
    registry: &'a TemplateRegistry,
    max_depth: usize,
}

impl<'a> IncludeResolver<'a> {
    pub fn new(registry: &'a TemplateRegistry, max_depth: usize) -> Self {
        Self { registry, max_depth }
    }

    /// Resolve all includes in the content recursively
    pub fn resolve(
        &self,
        content: &str,
        current: &str,
        visited: &mut HashSet<String>,
        depth: usize,
    ) -> Result<String, BotError> {
        if depth > self.max_depth {
            return Err(BotError::IncludeDepthExceeded {
                max_depth: self.max_depth,
            });
        }

        let mut result = String::with_capacity(content.len());
        let mut last_end = 0;

        for cap in INCLUDE_PATTERN.captures_iter(content) {
            let full_match = cap.get(0).unwrap();
            let name = cap[1].trim();

            result.push_str(&content[last_end..full_match.start()]);

            if visited.contains(name) {
                return Err(BotError::CircularInclude {
                    name: name.to_string(),
                });
            }

            let included = self.registry.get(name).ok_or_else(|| BotError::TemplateNotFound {
                name: name.to_string(),
                from: current.to_string(),
            })?;

            visited.insert(name.to_string());
            let expanded = self.resolve(included, name, visited, depth + 1)?;
            result.push_str(&expanded);
            // Allow including the same partial from different branches
            visited.remove(name);

            last_end = full_match.end();
        }

        result.push_str(&content[last_end..]);

        Ok(result)
    }
}
