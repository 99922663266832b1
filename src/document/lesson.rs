use super::{owned, path_token, required, Difficulty, Stamp};
use crate::args::RawOptions;
use crate::render::Format;
use crate::text::{prose, title_case};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

const TEACHER_NOTES: &str = "This lesson requires basic geometric tools and historical resources.";

#[derive(Debug, Clone, PartialEq)]
pub struct LessonOptions {
    pub civilization: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub format: Format,
    pub output: Option<PathBuf>,
}

impl LessonOptions {
    pub fn from_raw(raw: &RawOptions) -> Result<Self, String> {
        let civilization = required(raw, "civilization");
        let topic = required(raw, "topic");
        let (civilization, topic) = match (civilization, topic) {
            (Ok(c), Ok(t)) => (c, t),
            (Err(_), Err(_)) => {
                return Err("Missing required arguments: --civilization, --topic".to_string());
            }
            (Err(e), _) | (_, Err(e)) => return Err(e),
        };

        Ok(LessonOptions {
            civilization: path_token("civilization", civilization)?,
            topic: path_token("topic", topic)?,
            difficulty: Difficulty::parse(raw.get_or("difficulty", "intermediate"), false)?,
            format: Format::parse(raw.get_or("format", "json"))?,
            output: raw.get("output").map(PathBuf::from),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonDocument {
    pub metadata: LessonMetadata,
    pub lesson: Lesson,
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonMetadata {
    pub civilization: String,
    pub topic: String,
    pub difficulty: Difficulty,
    #[serde(flatten)]
    pub stamp: Stamp,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub title: String,
    pub introduction: String,
    pub learning_objectives: Vec<String>,
    pub sections: Vec<Section>,
    pub assessment: Assessment,
    pub resources: Resources,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub formative: Vec<String>,
    pub summative: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    pub teacher_notes: String,
    pub student_materials: Vec<String>,
    pub extensions: Vec<String>,
}

impl LessonDocument {
    pub fn build(opts: &LessonOptions, at: DateTime<Utc>) -> Self {
        let civ = prose(&opts.civilization);
        let topic = prose(&opts.topic);

        let sections = vec![
            Section {
                title: "Historical Context".to_string(),
                content: format!(
                    "In {}, geometric thinking played a crucial role in architecture, art, \
                     and daily life. The study of {} was essential for understanding the world.",
                    civ, topic
                ),
                activities: Some(owned(&[
                    "Research primary sources from the period",
                    "Analyze geometric patterns in artifacts",
                    "Compare with modern understanding",
                ])),
                key_points: None,
            },
            Section {
                title: "Geometric Concepts".to_string(),
                content: format!("Key concepts related to {}:", topic),
                activities: None,
                key_points: Some(owned(&[
                    "Fundamental properties and definitions",
                    "Relationships between geometric elements",
                    "Applications in problem-solving",
                ])),
            },
            Section {
                title: "Interactive Activities".to_string(),
                content: "Hands-on activities to reinforce learning:".to_string(),
                activities: Some(owned(&[
                    "Construction exercises using traditional tools",
                    "Puzzle-solving challenges",
                    "Creative application projects",
                ])),
                key_points: None,
            },
        ];

        LessonDocument {
            metadata: LessonMetadata {
                civilization: opts.civilization.clone(),
                topic: opts.topic.clone(),
                difficulty: opts.difficulty,
                stamp: Stamp::new(at),
            },
            lesson: Lesson {
                title: format!(
                    "{} in {}",
                    title_case(&opts.topic),
                    title_case(&opts.civilization)
                ),
                introduction: format!(
                    "This lesson explores {} through the lens of {} civilization.",
                    topic, civ
                ),
                learning_objectives: vec![
                    format!("Understand the historical context of {} in {}", topic, civ),
                    format!(
                        "Apply geometric thinking to solve problems related to {}",
                        topic
                    ),
                    "Appreciate the cultural significance of geometric concepts".to_string(),
                ],
                sections,
                assessment: Assessment {
                    formative: owned(&[
                        "Quick checks throughout the lesson",
                        "Discussion questions",
                        "Peer review activities",
                    ]),
                    summative: owned(&[
                        "Project-based assessment",
                        "Written reflection",
                        "Practical demonstration",
                    ]),
                },
                resources: Resources {
                    teacher_notes: TEACHER_NOTES.to_string(),
                    student_materials: owned(&[
                        "Compass",
                        "Straightedge",
                        "Grid paper",
                        "Historical images",
                    ]),
                    extensions: owned(&[
                        "Research project on related topics",
                        "Cross-cultural comparisons",
                        "Modern applications",
                    ]),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn raw(items: &[&str]) -> RawOptions {
        let tokens: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        RawOptions::parse(&tokens).unwrap()
    }

    fn egypt_circles() -> LessonOptions {
        LessonOptions::from_raw(&raw(&[
            "--civilization",
            "ancient-egypt",
            "--topic",
            "pythagorean-theorem",
        ]))
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let opts = egypt_circles();
        assert_eq!(opts.difficulty, Difficulty::Intermediate);
        assert_eq!(opts.format, Format::Json);
        assert_eq!(opts.output, None);
    }

    #[test]
    fn test_missing_civilization() {
        let err = LessonOptions::from_raw(&raw(&["--topic", "circles"])).unwrap_err();
        assert_eq!(err, "Missing required argument: --civilization");
    }

    #[test]
    fn test_missing_both() {
        let err = LessonOptions::from_raw(&raw(&[])).unwrap_err();
        assert!(err.contains("--civilization") && err.contains("--topic"));
    }

    #[test]
    fn test_invalid_format() {
        let tokens = ["--civilization", "a", "--topic", "b", "--format", "pdf"];
        let err = LessonOptions::from_raw(&raw(&tokens));
        assert!(err.is_err());
    }

    #[test]
    fn test_path_unsafe_topic() {
        let err = LessonOptions::from_raw(&raw(&["--civilization", "a", "--topic", "../b"]));
        assert!(err.is_err());
    }

    #[test]
    fn test_metadata_verbatim_prose_converted() {
        let doc = LessonDocument::build(&egypt_circles(), Utc::now());

        assert_eq!(doc.metadata.civilization, "ancient-egypt");
        assert_eq!(doc.metadata.topic, "pythagorean-theorem");
        assert_eq!(doc.lesson.title, "Pythagorean Theorem in Ancient Egypt");
        assert_eq!(
            doc.lesson.introduction,
            "This lesson explores pythagorean theorem through the lens of ancient egypt civilization."
        );
        assert_eq!(
            doc.lesson.learning_objectives[0],
            "Understand the historical context of pythagorean theorem in ancient egypt"
        );
    }

    #[test]
    fn test_json_shape() {
        let doc = LessonDocument::build(&egypt_circles(), Utc::now());
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["metadata"]["version"], json!("1.0"));
        assert_eq!(value["metadata"]["difficulty"], json!("intermediate"));
        assert!(value["metadata"]["generatedDate"].is_string());
        assert_eq!(value["lesson"]["sections"].as_array().unwrap().len(), 3);
        assert_eq!(value["lesson"]["sections"][1].get("activities"), None);
        assert_eq!(
            value["lesson"]["sections"][1]["keyPoints"].as_array().unwrap().len(),
            3
        );
        assert_eq!(
            value["lesson"]["resources"]["studentMaterials"],
            json!(["Compass", "Straightedge", "Grid paper", "Historical images"])
        );
        assert!(matches!(value["lesson"]["assessment"]["formative"], Value::Array(_)));
    }
}
