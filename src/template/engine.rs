use crate::error::BotError;
use serde_json::Value;
use std::collections::HashSet;

use super::include::IncludeResolver;
use super::registry::TemplateRegistry;
use super::variable::VariableSubstitutor;

pub const DEFAULT_MAX_DEPTH: usize = 8;

pub struct TemplateEngine {
    registry: TemplateRegistry,
    max_depth: usize,
}

impl TemplateEngine {
    pub fn new(registry: TemplateRegistry, max_depth: usize) -> Self {
        Self { registry, max_depth }
    }

    /// Engine over the built-in templates
    pub fn builtin() -> Self {
        Self::new(TemplateRegistry::builtin(), DEFAULT_MAX_DEPTH)
    }

    /// Render a named template with the given context
    ///
    /// Processing order:
    /// 1. Look up template
    /// 2. Resolve includes (recursively)
    /// 3. Substitute variables (once)
    pub fn render(&self, name: &str, context: &Value) -> Result<String, BotError> {
        let content = self.registry.get(name).ok_or_else(|| BotError::TemplateNotFound {
            name: name.to_string(),
            from: "<engine>".to_string(),
        })?;

        let include_resolver = IncludeResolver::new(&self.registry, self.max_depth);
        let mut visited = HashSet::new();
        visited.insert(name.to_string());
        let expanded = include_resolver.resolve(content, name, &mut visited, 0)?;

        VariableSubstitutor.substitute(&expanded, context, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_with_partial() {
        let mut registry = TemplateRegistry::empty();
        registry.insert("title.html", "<title>{{ title }}</title>");
        registry.insert(
            "page.html",
            "<head>{{> title.html }}</head><p>{{& body }}</p>",
        );

        let engine = TemplateEngine::new(registry, 4);
        let result = engine
            .render("page.html", &json!({"title": "A & B", "body": "<b>hi</b>"}))
            .unwrap();

        assert_eq!(
            result,
            "<head><title>A &amp; B</title></head><p><b>hi</b></p>"
        );
    }

    #[test]
    fn test_unknown_template() {
        let engine = TemplateEngine::new(TemplateRegistry::empty(), 4);
        match engine.render("missing.html", &json!({})) {
            Err(BotError::TemplateNotFound { name, .. }) => assert_eq!(name, "missing.html"),
            other => panic!("Expected TemplateNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_self_include_is_circular() {
        let mut registry = TemplateRegistry::empty();
        registry.insert("loop.html", "x {{> loop.html }}");

        let engine = TemplateEngine::new(registry, 4);
        assert!(matches!(
            engine.render("loop.html", &json!({})),
            Err(BotError::CircularInclude { .. })
        ));
    }

    #[test]
    fn test_variables_inside_partials_use_page_context() {
        let mut registry = TemplateRegistry::empty();
        registry.insert("footer.html", "Grade {{ grade }}");
        registry.insert("page.html", "{{> footer.html }}");

        let engine = TemplateEngine::new(registry, 4);
        assert_eq!(
            engine.render("page.html", &json!({"grade": "3-5"})).unwrap(),
            "Grade 3-5"
        );
    }

    #[test]
    fn test_demo_template_needs_no_context() {
        let engine = TemplateEngine::builtin();
        let html = engine.render("decomposition-demo.html", &json!({})).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("{{"));
    }
}
