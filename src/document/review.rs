use super::required;
use crate::args::RawOptions;
use serde_json::Value;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criteria {
    Readability,
    Accuracy,
    Engagement,
    All,
}

impl Criteria {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "readability" => Ok(Criteria::Readability),
            "accuracy" => Ok(Criteria::Accuracy),
            "engagement" => Ok(Criteria::Engagement),
            "all" => Ok(Criteria::All),
            _ => Err(format!(
                "Invalid --criteria '{}' (expected readability, accuracy, engagement or all)",
                value
            )),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Criteria::Readability => "readability",
            Criteria::Accuracy => "accuracy",
            Criteria::Engagement => "engagement",
            Criteria::All => "all",
        }
    }

    fn suggestions(self) -> Vec<&'static str> {
        const READABILITY: &[&str] = &[
            "Break long sections into shorter paragraphs",
            "Define key vocabulary before using it",
        ];
        const ACCURACY: &[&str] = &[
            "Cross-check historical dates and attributions",
            "Verify formulas and worked examples",
        ];
        const ENGAGEMENT: &[&str] = &[
            "Consider adding more interactive elements",
            "Include real-world applications",
            "Add visual aids where possible",
        ];

        match self {
            Criteria::Readability => READABILITY.to_vec(),
            Criteria::Accuracy => ACCURACY.to_vec(),
            Criteria::Engagement => ENGAGEMENT.to_vec(),
            Criteria::All => {
                let mut all = [READABILITY, ACCURACY, ENGAGEMENT].concat();
                all.push("Ensure accessibility for all learners");
                all
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewOptions {
    pub file: PathBuf,
    pub criteria: Criteria,
}

impl ReviewOptions {
    pub fn from_raw(raw: &RawOptions) -> Result<Self, String> {
        Ok(ReviewOptions {
            file: PathBuf::from(required(raw, "file")?),
            criteria: Criteria::parse(raw.get_or("criteria", "all"))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl Check {
    fn new(name: &'static str, passed: bool, ok: &str, failed: &str) -> Self {
        Check {
            name,
            passed,
            detail: (if passed { ok } else { failed }).to_string(),
        }
    }
}

/// Quality report for a generated content file.
#[derive(Debug, Clone)]
pub struct Review {
    pub criteria: Criteria,
    pub checks: Vec<Check>,
    pub suggestions: Vec<&'static str>,
}

impl Review {
    /// Evaluate parsed JSON content. Reaching this point means the file was valid JSON.
    pub fn evaluate(content: &Value, criteria: Criteria) -> Self {
        let metadata = content.get("metadata");
        let has_stamp = metadata
            .map(|m| m.get("version").is_some() && m.get("generatedDate").is_some())
            .unwrap_or(false);
        let body = content.get("lesson").or_else(|| content.get("quiz"));

        let checks = vec![
            Check::new("File Format", true, "Valid JSON", "Invalid JSON"),
            Check::new(
                "Structure",
                content.is_object(),
                "Well-organized",
                "Top level is not an object",
            ),
            Check::new(
                "Metadata",
                has_stamp,
                "Present and complete",
                "Missing metadata, version or generatedDate",
            ),
            Check::new(
                "Content",
                body.is_some(),
                "Properly structured",
                "No lesson or quiz body found",
            ),
            Check::new(
                "Completeness",
                Self::is_complete(content),
                "Every expected part is filled in",
                "Sections, activities or questions are missing",
            ),
        ];

        Review {
            criteria,
            checks,
            suggestions: criteria.suggestions(),
        }
    }

    fn is_complete(content: &Value) -> bool {
        let non_empty = |v: Option<&Value>| {
            v.and_then(Value::as_array)
                .map(|a| !a.is_empty())
                .unwrap_or(false)
        };

        if let Some(lesson) = content.get("lesson") {
            return non_empty(lesson.get("sections")) || non_empty(lesson.get("activities"));
        }

        if let Some(quiz) = content.get("quiz") {
            let questions = quiz.get("questions").and_then(Value::as_array);
            let expected = content
                .get("metadata")
                .and_then(|m| m.get("questionCount"))
                .and_then(Value::as_u64);
            return match (questions, expected) {
                (Some(q), Some(n)) => q.len() as u64 == n && n > 0,
                (Some(q), None) => !q.is_empty(),
                _ => false,
            };
        }

        false
    }

    /// Number of passed checks, which is also the star rating out of 5.
    pub fn rating(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn report(&self) -> String {
        let mut out = String::from("Assessment Results:\n\n");
        for check in &self.checks {
            let mark = if check.passed { "✓" } else { "✗" };
            let _ = writeln!(out, "  {} {}: {}", mark, check.name, check.detail);
        }

        let _ = writeln!(out, "\nSuggestions ({}):", self.criteria.name());
        for suggestion in &self.suggestions {
            let _ = writeln!(out, "  • {}", suggestion);
        }

        let rating = self.rating();
        let _ = writeln!(
            out,
            "\nOverall Quality: {}{} ({}/5)",
            "★".repeat(rating),
            "☆".repeat(5 - rating),
            rating
        );
        out
    }
}
