use super::{destination, Bot, BotContext, ConfigNeed};
use crate::args::RawOptions;
use crate::config::BotKind;
use crate::document::{QuizDocument, QuizOptions};
use crate::error::BotError;
use crate::output::OutputWriter;
use crate::render::to_json;
use chrono::Utc;
use indoc::indoc;

pub struct QuizBot;

impl Bot for QuizBot {
    type Options = QuizOptions;

    const NAME: &'static str = "Quiz Generator Bot";
    const CONFIG: ConfigNeed = ConfigNeed::Enabled(BotKind::QuizGenerator);
    const HELP: &'static str = indoc! {"
        Quiz Generator Bot - Creates quizzes for a geometry topic

        Usage:
          geociv quiz --topic <topic> [options]

        Required Arguments:
          --topic          The topic for the quiz
                           Examples: pythagorean-theorem, circles, geometric-patterns

        Optional Arguments:
          --civilization   Focus on a specific civilization (default: general)
          --questions      Number of questions, 1 to 100 (default: 10)
          --difficulty     Difficulty level (default: intermediate)
                           Options: beginner, intermediate, advanced, mixed
          --type           Question type (default: mixed)
                           Options: multiple-choice, true-false, short-answer, mixed
          --output         Output file path
                           Default: curriculum/<civilization or quizzes>/<topic>-quiz.json

        Examples:
          geociv quiz --topic pythagorean-theorem --questions 15
          geociv quiz --topic circles --civilization ancient-egypt --difficulty beginner
          geociv quiz --topic geometric-patterns --type multiple-choice

        Note: this bot must be enabled in config.json (bots.quizGenerator.enabled).
    "};

    fn options(raw: &RawOptions) -> Result<QuizOptions, String> {
        QuizOptions::from_raw(raw)
    }

    fn execute(ctx: &BotContext, opts: QuizOptions) -> Result<(), BotError> {
        println!("Generating quiz for:");
        println!("  Topic: {}", opts.topic);
        if !opts.is_general() {
            println!("  Civilization: {}", opts.civilization);
        }
        println!("  Questions: {}", opts.questions);
        println!("  Difficulty: {}", opts.difficulty);
        println!("  Type: {}\n", opts.kind.name());

        let doc = QuizDocument::build(&opts, Utc::now());
        let text = to_json(&doc)?;

        let subdir = if opts.is_general() {
            "quizzes"
        } else {
            opts.civilization.as_str()
        };
        let file_name = format!("{}-quiz.json", opts.topic);
        let dest = destination(ctx, opts.output.as_deref(), subdir, &file_name);
        let path = OutputWriter::write(&dest, &text)?;

        println!("✅ Quiz generated successfully!");
        println!("📁 Saved to: {}\n", path.display());
        println!("Next steps:");
        println!("  • Review the quiz questions");
        println!("  • Test the quiz with students");
        println!(
            "  • Run `geociv assess --file {}` to check quality",
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bots::run;
    use crate::bots::testing::{context, tokens};
    use serde_json::Value;
    use std::fs;

    fn read(path: std::path::PathBuf) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_general_quiz_goes_to_quizzes() {
        let (_temp, ctx) = context(&[BotKind::QuizGenerator]);
        run::<QuizBot>(&ctx, &tokens(&["--topic", "circles", "--questions", "4"])).unwrap();

        let value = read(ctx.content_root.join("quizzes/circles-quiz.json"));
        assert_eq!(value["metadata"]["questionCount"], 4);
        assert_eq!(value["quiz"]["questions"].as_array().unwrap().len(), 4);
        assert_eq!(value["quiz"]["timeLimit"], 8);
    }

    #[test]
    fn test_civilization_quiz_directory() {
        let (_temp, ctx) = context(&[BotKind::QuizGenerator]);
        run::<QuizBot>(
            &ctx,
            &tokens(&["--topic", "triangles", "--civilization", "ancient-egypt"]),
        )
        .unwrap();

        let value = read(ctx.content_root.join("ancient-egypt/triangles-quiz.json"));
        assert_eq!(value["quiz"]["questions"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_bad_question_count() {
        let (_temp, ctx) = context(&[BotKind::QuizGenerator]);
        let err = run::<QuizBot>(&ctx, &tokens(&["--topic", "circles", "--questions", "ten"]))
            .unwrap_err();
        assert!(matches!(err, BotError::Usage { .. }));
        assert!(!ctx.content_root.exists());
    }
}
