use super::{owned, required, Stamp};
use crate::args::RawOptions;
use crate::render::Format;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

const SHAPES_2D: &[&str] = &["circles", "triangles", "rectangles", "squares"];
const SHAPES_3D: &[&str] = &["cubes", "cylinders", "spheres"];
const GRADES: &[&str] = &["3", "4", "5", "3-5"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShapeFocus {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

impl ShapeFocus {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "all" => Ok(ShapeFocus::All),
            "2d" => Ok(ShapeFocus::TwoD),
            "3d" => Ok(ShapeFocus::ThreeD),
            _ => Err(format!("Invalid --shapes '{}' (expected 2d, 3d or all)", value)),
        }
    }

    /// Flag value, as shown in progress output
    pub fn name(self) -> &'static str {
        match self {
            ShapeFocus::All => "all",
            ShapeFocus::TwoD => "2d",
            ShapeFocus::ThreeD => "3d",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ShapeFocus::All => "",
            ShapeFocus::TwoD => "2D ",
            ShapeFocus::ThreeD => "3D ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecompositionOptions {
    pub image: PathBuf,
    pub outline: PathBuf,
    pub grade: String,
    pub shapes: ShapeFocus,
    pub format: Format,
    pub output_dir: Option<PathBuf>,
}

impl DecompositionOptions {
    pub fn from_raw(raw: &RawOptions) -> Result<Self, String> {
        let (image, outline) = match (required(raw, "image"), required(raw, "outline")) {
            (Ok(i), Ok(o)) => (i, o),
            (Err(_), Err(_)) => {
                return Err("Missing required arguments: --image, --outline".to_string());
            }
            (Err(e), _) | (_, Err(e)) => return Err(e),
        };

        let grade = raw.get_or("grade", "3-5");
        if !GRADES.contains(&grade) {
            return Err(format!("Invalid --grade '{}' (expected 3, 4, 5 or 3-5)", grade));
        }

        let format = match Format::parse(raw.get_or("format", "html"))? {
            Format::Markdown => {
                return Err("Invalid --format 'markdown' (expected html or json)".to_string());
            }
            other => other,
        };

        Ok(DecompositionOptions {
            image: PathBuf::from(image),
            outline: PathBuf::from(outline),
            grade: grade.to_string(),
            shapes: ShapeFocus::parse(raw.get_or("shapes", "all"))?,
            format,
            output_dir: raw.get("output").map(PathBuf::from),
        })
    }

    /// `photos/stop-sign.jpg` -> `stop-sign`
    pub fn image_stem(&self) -> String {
        self.image
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image")
            .to_string()
    }

    pub fn image_file_name(&self) -> String {
        file_name(&self.image)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// Curriculum outline read from disk: the raw text, plus the parsed value
/// when the file is JSON or YAML.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub raw: String,
    pub structured: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DecompositionDocument {
    pub metadata: DecompositionMetadata,
    pub lesson: DecompositionLesson,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompositionMetadata {
    pub image_path: String,
    pub outline_path: String,
    pub grade: String,
    pub shape_focus: ShapeFocus,
    #[serde(flatten)]
    pub stamp: Stamp,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompositionLesson {
    pub title: String,
    pub target_grade: String,
    pub outline_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Value>,
    pub detected_shapes: DetectedShapes,
    pub activities: Vec<String>,
    pub teacher_notes: String,
    pub student_worksheet: Worksheet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedShapes {
    #[serde(rename = "2d")]
    pub two_d: Vec<String>,
    #[serde(rename = "3d")]
    pub three_d: Vec<String>,
}

impl DetectedShapes {
    pub fn for_focus(focus: ShapeFocus) -> Self {
        DetectedShapes {
            two_d: if focus == ShapeFocus::ThreeD {
                Vec::new()
            } else {
                owned(SHAPES_2D)
            },
            three_d: if focus == ShapeFocus::TwoD {
                Vec::new()
            } else {
                owned(SHAPES_3D)
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Worksheet {
    pub questions: Vec<String>,
}

impl DecompositionDocument {
    pub fn build(opts: &DecompositionOptions, outline: Outline, at: DateTime<Utc>) -> Self {
        DecompositionDocument {
            metadata: DecompositionMetadata {
                image_path: opts.image.display().to_string(),
                outline_path: opts.outline.display().to_string(),
                grade: opts.grade.clone(),
                shape_focus: opts.shapes,
                stamp: Stamp::new(at),
            },
            lesson: DecompositionLesson {
                title: "Finding Shapes in Everyday Objects".to_string(),
                target_grade: opts.grade.clone(),
                outline_content: outline.raw,
                outline: outline.structured,
                detected_shapes: DetectedShapes::for_focus(opts.shapes),
                activities: vec![
                    format!("Identify all {}shapes in the image", opts.shapes.label()),
                    "Draw or trace the shapes you find".to_string(),
                    "Count how many of each shape type".to_string(),
                    "Create your own design using similar shapes".to_string(),
                ],
                teacher_notes: "Use this lesson to help students see geometry in their world. \
                                Point out how complex objects are made of simple shapes."
                    .to_string(),
                student_worksheet: Worksheet {
                    questions: owned(&[
                        "How many circles can you find?",
                        "What shapes make up the main object?",
                        "Can you draw this object using only basic shapes?",
                    ]),
                },
            },
        }
    }
}
