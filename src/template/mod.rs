pub mod engine;
pub mod include;
pub mod registry;
pub mod variable;

pub use engine::TemplateEngine;
