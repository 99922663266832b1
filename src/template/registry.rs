use std::collections::HashMap;

/// Templates compiled into the binary, keyed by file name.
const BUILTIN: &[(&str, &str)] = &[
    ("head.html", include_str!("../../templates/head.html")),
    (
        "print-button.html",
        include_str!("../../templates/print-button.html"),
    ),
    ("lesson.html", include_str!("../../templates/lesson.html")),
    (
        "visualization.html",
        include_str!("../../templates/visualization.html"),
    ),
    (
        "visualization-controls.html",
        include_str!("../../templates/visualization-controls.html"),
    ),
    (
        "decomposition.html",
        include_str!("../../templates/decomposition.html"),
    ),
    (
        "decomposition-demo.html",
        include_str!("../../templates/decomposition-demo.html"),
    ),
];

/// Named template sources that `{{> name }}` can refer to.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, String>,
}

impl TemplateRegistry {
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (name, source) in BUILTIN {
            registry.insert(name, source);
        }
        registry
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, source: &str) {
        self.templates.insert(name.to_string(), source.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }
}
