//! HTML pages rendered through the built-in templates.
//!
//! Values placed with `{{ name }}` are escaped by the engine; the list
//! fragments built here escape their own items and go in with `{{& name }}`.

use crate::document::visualization::POLYGON_RADIUS;
use crate::document::{DecompositionDocument, LessonDocument, VisualizationSpec};
use crate::error::BotError;
use crate::template::TemplateEngine;
use crate::text::{capitalize, html_escape};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::fmt::Write;

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect()
}

pub fn lesson(engine: &TemplateEngine, doc: &LessonDocument) -> Result<String, BotError> {
    let mut sections = String::new();
    for section in &doc.lesson.sections {
        let _ = writeln!(
            sections,
            "  <h2>{}</h2>\n  <p>{}</p>",
            html_escape(&section.title),
            html_escape(&section.content)
        );
        if let Some(activities) = &section.activities {
            let _ = writeln!(
                sections,
                "  <div class=\"activities\"><strong>Activities:</strong><ul>{}</ul></div>",
                list_items(activities)
            );
        }
        if let Some(points) = &section.key_points {
            let _ = writeln!(
                sections,
                "  <div class=\"key-points\"><ul>{}</ul></div>",
                list_items(points)
            );
        }
    }

    let context = json!({
        "page_title": doc.lesson.title,
        "title": doc.lesson.title,
        "civilization": doc.metadata.civilization,
        "topic": doc.metadata.topic,
        "difficulty": doc.metadata.difficulty.to_string(),
        "introduction": doc.lesson.introduction,
        "objectives": list_items(&doc.lesson.learning_objectives),
        "sections": sections,
    });
    engine.render("lesson.html", &context)
}

pub fn visualization(
    engine: &TemplateEngine,
    spec: &VisualizationSpec,
) -> Result<String, BotError> {
    let (controls, click_handler) = if spec.interactive {
        (
            engine.render("visualization-controls.html", &json!({}))?,
            "    canvas.addEventListener('click', rotate);".to_string(),
        )
    } else {
        (String::new(), String::new())
    };

    let context = json!({
        "page_title": format!("{} Visualization - {}", spec.shape, spec.civilization),
        "heading": format!("{} - {}", capitalize(&spec.shape), spec.civilization),
        "cursor": if spec.interactive { "pointer" } else { "default" },
        "sides": spec.sides,
        "radius": POLYGON_RADIUS,
        "controls": controls,
        "click_handler": click_handler,
    });
    engine.render("visualization.html", &context)
}

/// Area, perimeter or volume notes for each shape the lesson covers.
fn formula_card(shape: &str) -> Option<&'static str> {
    let card = match shape {
        "circles" => {
            "<h3>Circles</h3>\
             <p><strong>Area:</strong> A = &pi; &times; r&sup2;</p>\
             <p><strong>Circumference:</strong> C = 2 &times; &pi; &times; r</p>\
             <p><em>Example:</em> a wheel with radius 10 cm has area about 314 cm&sup2;.</p>"
        }
        "triangles" => {
            "<h3>Triangles</h3>\
             <p><strong>Area:</strong> A = &frac12; &times; base &times; height</p>\
             <p><strong>Perimeter:</strong> P = a + b + c</p>\
             <p><em>Example:</em> a roof with base 8 m and height 3 m has area 12 m&sup2;.</p>"
        }
        "rectangles" => {
            "<h3>Rectangles</h3>\
             <p><strong>Area:</strong> A = length &times; width</p>\
             <p><strong>Perimeter:</strong> P = 2 &times; (length + width)</p>\
             <p><em>Example:</em> a door 2 m tall and 1 m wide has area 2 m&sup2;.</p>"
        }
        "squares" => {
            "<h3>Squares</h3>\
             <p><strong>Area:</strong> A = side &times; side</p>\
             <p><strong>Perimeter:</strong> P = 4 &times; side</p>\
             <p><em>Example:</em> a window with 50 cm sides has perimeter 200 cm.</p>"
        }
        "cubes" => {
            "<h3>Cubes</h3>\
             <p><strong>Volume:</strong> V = side &times; side &times; side</p>\
             <p><strong>Surface Area:</strong> SA = 6 &times; side&sup2;</p>\
             <p><em>Example:</em> a box with 3 cm sides holds 27 cm&sup3;.</p>"
        }
        "cylinders" => {
            "<h3>Cylinders</h3>\
             <p><strong>Volume:</strong> V = &pi; &times; r&sup2; &times; height</p>\
             <p><em>Example:</em> a can with radius 4 cm and height 10 cm holds about \
             502 cm&sup3;.</p>"
        }
        "spheres" => {
            "<h3>Spheres</h3>\
             <p><strong>Volume:</strong> V = 4/3 &times; &pi; &times; r&sup3;</p>\
             <p><em>Example:</em> a ball with radius 3 cm has volume about 113 cm&sup3;.</p>"
        }
        _ => return None,
    };
    Some(card)
}

pub fn decomposition(
    engine: &TemplateEngine,
    doc: &DecompositionDocument,
    image_name: &str,
    at: DateTime<Utc>,
) -> Result<String, BotError> {
    let shapes = &doc.lesson.detected_shapes;

    let mut shape_lists = String::new();
    if !shapes.two_d.is_empty() {
        let _ = writeln!(
            shape_lists,
            "      <h3>2D Shapes</h3>\n      <ul>{}</ul>",
            list_items(&shapes.two_d)
        );
    }
    if !shapes.three_d.is_empty() {
        let _ = writeln!(
            shape_lists,
            "      <h3>3D Shapes</h3>\n      <ul>{}</ul>",
            list_items(&shapes.three_d)
        );
    }

    let formula_cards: String = shapes
        .two_d
        .iter()
        .chain(shapes.three_d.iter())
        .filter_map(|shape| formula_card(shape))
        .map(|card| format!("      <div class=\"formula-card\">{}</div>\n", card))
        .collect();

    let context = json!({
        "page_title": format!("{} - Grade {}", doc.lesson.title, doc.lesson.target_grade),
        "title": doc.lesson.title,
        "grade": doc.lesson.target_grade,
        "image_name": image_name,
        "shape_lists": shape_lists,
        "formula_cards": formula_cards,
        "outline": doc.lesson.outline_content,
        "activities": list_items(&doc.lesson.activities),
        "questions": list_items(&doc.lesson.student_worksheet.questions),
        "teacher_notes": doc.lesson.teacher_notes,
        "generated_on": at.format("%Y-%m-%d").to_string(),
    });
    engine.render("decomposition.html", &context)
}

/// The fixed sample lesson shown by `decompose --demo`.
pub fn demo(engine: &TemplateEngine) -> Result<String, BotError> {
    engine.render("decomposition-demo.html", &json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::RawOptions;
    use crate::document::{DecompositionOptions, LessonOptions, Outline, VisualizationOptions};

    fn raw(items: &[&str]) -> RawOptions {
        let tokens: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        RawOptions::parse(&tokens).unwrap()
    }

    fn visualization_page(items: &[&str]) -> String {
        let opts = VisualizationOptions::from_raw(&raw(items)).unwrap();
        visualization(&TemplateEngine::builtin(), &VisualizationSpec::build(&opts)).unwrap()
    }

    /// Visualization: side count follows the shape name
    #[test]
    fn test_visualization_sides() {
        assert!(visualization_page(&["--shape", "hexagon"]).contains("const sides = 6;"));
        assert!(visualization_page(&["--shape", "triangle"]).contains("const sides = 3;"));
        assert!(visualization_page(&["--shape", "circle"]).contains("const sides = 4;"));
    }

    /// Visualization: interactive pages get controls and a click handler
    #[test]
    fn test_visualization_interactivity() {
        let page = visualization_page(&["--shape", "hexagon", "--civilization", "islamic"]);
        assert!(page.contains("<h1>Hexagon - islamic</h1>"));
        assert!(page.contains("<title>hexagon Visualization - islamic</title>"));
        assert!(page.contains("cursor: pointer;"));
        assert!(page.contains("onclick=\"rotate()\""));
        assert!(page.contains("canvas.addEventListener('click', rotate);"));
        assert!(page.contains("const radius = 150;"));

        let page = visualization_page(&["--shape", "hexagon", "--interactive", "false"]);
        assert!(page.contains("cursor: default;"));
        assert!(!page.contains("onclick="));
        assert!(!page.contains("addEventListener"));
    }

    /// Lesson: every section becomes a heading, content is escaped
    #[test]
    fn test_lesson_page() {
        let opts = LessonOptions::from_raw(&raw(&[
            "--civilization",
            "ancient-egypt",
            "--topic",
            "pyramids",
        ]))
        .unwrap();
        let doc = LessonDocument::build(&opts, Utc::now());
        let page = lesson(&TemplateEngine::builtin(), &doc).unwrap();

        assert!(page.contains("<title>Pyramids in Ancient Egypt</title>"));
        assert!(page.contains("<h2>Historical Context</h2>"));
        assert!(page.contains("<li>Puzzle-solving challenges</li>"));
        assert!(!page.contains("{{"));
    }

    /// Decomposition: 3D heading only when 3D shapes are in focus
    #[test]
    fn test_decomposition_shape_focus() {
        let engine = TemplateEngine::builtin();
        let outline = || Outline {
            raw: "Unit <1>: shapes".to_string(),
            structured: None,
        };

        let opts = DecompositionOptions::from_raw(&raw(&[
            "--image",
            "car.jpg",
            "--outline",
            "o.txt",
            "--shapes",
            "2d",
        ]))
        .unwrap();
        let doc = DecompositionDocument::build(&opts, outline(), Utc::now());
        let page = decomposition(&engine, &doc, "car.jpg", Utc::now()).unwrap();
        assert!(page.contains("<h3>2D Shapes</h3>"));
        assert!(!page.contains("<h3>3D Shapes</h3>"));
        assert!(page.contains("<h3>Circles</h3>"));
        assert!(!page.contains("<h3>Cubes</h3>"));
        assert!(page.contains("Unit &lt;1&gt;: shapes"));
        assert!(page.contains("Image: car.jpg"));

        let opts =
            DecompositionOptions::from_raw(&raw(&["--image", "car.jpg", "--outline", "o.txt"]))
                .unwrap();
        let doc = DecompositionDocument::build(&opts, outline(), Utc::now());
        let page = decomposition(&engine, &doc, "car.jpg", Utc::now()).unwrap();
        assert!(page.contains("<h3>3D Shapes</h3>"));
        assert!(page.contains("<h3>Spheres</h3>"));
    }

    #[test]
    fn test_demo_page() {
        let page = demo(&TemplateEngine::builtin()).unwrap();
        assert!(page.contains("Shape Decomposition Demo"));
    }
}
