use crate::document::LessonDocument;
use std::fmt::Write;

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {}", item);
    }
    out.push('\n');
}

pub fn lesson(doc: &LessonDocument) -> String {
    let metadata = &doc.metadata;
    let lesson = &doc.lesson;

    let mut md = format!("# {}\n\n", lesson.title);
    let _ = writeln!(md, "**Civilization:** {}  ", metadata.civilization);
    let _ = writeln!(md, "**Topic:** {}  ", metadata.topic);
    let _ = writeln!(md, "**Difficulty:** {}  \n", metadata.difficulty);

    let _ = write!(md, "## Introduction\n\n{}\n\n", lesson.introduction);
    md.push_str("## Learning Objectives\n\n");
    bullets(&mut md, &lesson.learning_objectives);

    for section in &lesson.sections {
        let _ = write!(md, "## {}\n\n{}\n\n", section.title, section.content);
        if let Some(activities) = &section.activities {
            md.push_str("**Activities:**\n");
            bullets(&mut md, activities);
        }
        if let Some(points) = &section.key_points {
            bullets(&mut md, points);
        }
    }

    md
}
