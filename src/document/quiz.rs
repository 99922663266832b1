use super::{path_token, required, Difficulty, Stamp};
use crate::args::RawOptions;
use crate::text::{prose, title_case};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Minutes allotted per question
const MINUTES_PER_QUESTION: usize = 2;
pub const MAX_QUESTIONS: usize = 100;
const INSTRUCTIONS: &str =
    "Answer all questions to test your understanding. Some questions may have multiple parts.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

impl QuestionType {
    const ROTATION: [QuestionType; 3] = [
        QuestionType::MultipleChoice,
        QuestionType::TrueFalse,
        QuestionType::ShortAnswer,
    ];

    pub fn points(self) -> u32 {
        match self {
            QuestionType::ShortAnswer => 5,
            _ => 2,
        }
    }
}

/// `--type`: one question type for every question, or a fixed rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizType {
    Mixed,
    Only(QuestionType),
}

impl QuizType {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "mixed" => Ok(QuizType::Mixed),
            "multiple-choice" => Ok(QuizType::Only(QuestionType::MultipleChoice)),
            "true-false" => Ok(QuizType::Only(QuestionType::TrueFalse)),
            "short-answer" => Ok(QuizType::Only(QuestionType::ShortAnswer)),
            _ => Err(format!(
                "Invalid --type '{}' (expected multiple-choice, true-false, short-answer or mixed)",
                value
            )),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QuizType::Mixed => "mixed",
            QuizType::Only(QuestionType::MultipleChoice) => "multiple-choice",
            QuizType::Only(QuestionType::TrueFalse) => "true-false",
            QuizType::Only(QuestionType::ShortAnswer) => "short-answer",
        }
    }

    /// Type of the question with the given 1-based id
    pub fn question_type(self, id: usize) -> QuestionType {
        match self {
            QuizType::Only(kind) => kind,
            QuizType::Mixed => QuestionType::ROTATION[(id - 1) % QuestionType::ROTATION.len()],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizOptions {
    pub topic: String,
    pub civilization: String,
    pub questions: usize,
    pub difficulty: Difficulty,
    pub kind: QuizType,
    pub output: Option<PathBuf>,
}

impl QuizOptions {
    pub fn from_raw(raw: &RawOptions) -> Result<Self, String> {
        let topic = path_token("topic", required(raw, "topic")?)?;
        let civilization = path_token("civilization", raw.get_or("civilization", "general"))?;

        let questions_raw = raw.get_or("questions", "10");
        let questions = match questions_raw.parse::<usize>() {
            Ok(n) if (1..=MAX_QUESTIONS).contains(&n) => n,
            _ => {
                return Err(format!(
                    "Invalid --questions '{}' (expected a whole number from 1 to {})",
                    questions_raw, MAX_QUESTIONS
                ));
            }
        };

        Ok(QuizOptions {
            topic,
            civilization,
            questions,
            difficulty: Difficulty::parse(raw.get_or("difficulty", "intermediate"), true)?,
            kind: QuizType::parse(raw.get_or("type", "mixed"))?,
            output: raw.get("output").map(PathBuf::from),
        })
    }

    pub fn is_general(&self) -> bool {
        self.civilization == "general"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizDocument {
    pub metadata: QuizMetadata,
    pub quiz: Quiz,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizMetadata {
    pub topic: String,
    pub civilization: String,
    pub difficulty: Difficulty,
    pub question_count: usize,
    #[serde(flatten)]
    pub stamp: Stamp,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub title: String,
    pub instructions: String,
    pub time_limit: usize,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub difficulty: Difficulty,
    pub points: u32,
    pub question: String,
    #[serde(flatten)]
    pub body: QuestionBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QuestionBody {
    MultipleChoice {
        options: Vec<String>,
        #[serde(rename = "correctAnswer")]
        correct_answer: String,
        explanation: String,
    },
    TrueFalse {
        #[serde(rename = "correctAnswer")]
        correct_answer: bool,
        explanation: String,
    },
    ShortAnswer {
        #[serde(rename = "sampleAnswer")]
        sample_answer: String,
        rubric: Vec<String>,
    },
}

impl Question {
    fn new(id: usize, topic: &str, kind: QuestionType, difficulty: Difficulty) -> Self {
        let (question, body) = match kind {
            QuestionType::MultipleChoice => (
                format!("Question {} about {}?", id, topic),
                QuestionBody::MultipleChoice {
                    options: ["Option A", "Option B", "Option C", "Option D"]
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                    correct_answer: "A".to_string(),
                    explanation: "Explanation of why this answer is correct.".to_string(),
                },
            ),
            QuestionType::TrueFalse => (
                format!("Statement about {}", topic),
                QuestionBody::TrueFalse {
                    correct_answer: true,
                    explanation: "Explanation of the concept.".to_string(),
                },
            ),
            QuestionType::ShortAnswer => (
                format!("Explain a concept related to {}", topic),
                QuestionBody::ShortAnswer {
                    sample_answer: "Sample answer showing expected response.".to_string(),
                    rubric: vec![
                        "Clear explanation (2 points)".to_string(),
                        "Use of examples (2 points)".to_string(),
                        "Correct terminology (1 point)".to_string(),
                    ],
                },
            ),
        };

        Question {
            id,
            kind,
            difficulty,
            points: kind.points(),
            question,
            body,
        }
    }
}

impl QuizDocument {
    pub fn build(opts: &QuizOptions, at: DateTime<Utc>) -> Self {
        let topic = prose(&opts.topic);
        let questions = (1..=opts.questions)
            .map(|id| Question::new(id, &topic, opts.kind.question_type(id), opts.difficulty))
            .collect();

        QuizDocument {
            metadata: QuizMetadata {
                topic: opts.topic.clone(),
                civilization: opts.civilization.clone(),
                difficulty: opts.difficulty,
                question_count: opts.questions,
                stamp: Stamp::new(at),
            },
            quiz: Quiz {
                title: format!("{} Quiz", title_case(&opts.topic)),
                instructions: INSTRUCTIONS.to_string(),
                time_limit: opts.questions * MINUTES_PER_QUESTION,
                questions,
            },
        }
    }
}
