use super::{Bot, BotContext, ConfigNeed};
use crate::args::RawOptions;
use crate::data::InputLoader;
use crate::document::{Review, ReviewOptions};
use crate::error::BotError;
use indoc::indoc;

pub struct AssessBot;

impl Bot for AssessBot {
    type Options = ReviewOptions;

    const NAME: &'static str = "Assessment Bot";
    const CONFIG: ConfigNeed = ConfigNeed::None;
    const HELP: &'static str = indoc! {"
        Assessment Bot - Evaluates content quality and suggests improvements

        Usage:
          geociv assess --file <path> [options]

        Required Arguments:
          --file           Path to the JSON content file to assess

        Optional Arguments:
          --criteria       Assessment criteria (default: all)
                           Options: readability, accuracy, engagement, all

        Examples:
          geociv assess --file curriculum/ancient-egypt/circles-lesson.json
          geociv assess --file curriculum/quizzes/circles-quiz.json --criteria engagement

        Run 'geociv tutor' for help!
    "};

    fn options(raw: &RawOptions) -> Result<ReviewOptions, String> {
        ReviewOptions::from_raw(raw)
    }

    fn execute(_ctx: &BotContext, opts: ReviewOptions) -> Result<(), BotError> {
        println!("Assessing: {}\n", opts.file.display());

        let content = InputLoader::load_json(&opts.file, "Content")?;
        let review = Review::evaluate(&content, opts.criteria);
        print!("{}", review.report());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bots::testing::{context_without_config, tokens};
    use crate::bots::{run, ContentBot};
    use crate::config::{BotKind, Config};
    use std::fs;

    #[test]
    fn test_missing_file() {
        let (_temp, ctx) = context_without_config();
        match run::<AssessBot>(&ctx, &tokens(&["--file", "nope/lesson.json"])) {
            Err(BotError::InputNotFound { path, .. }) => assert_eq!(path, "nope/lesson.json"),
            other => panic!("Expected InputNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_not_json() {
        let (temp, ctx) = context_without_config();
        let file = temp.path().join("lesson.markdown");
        fs::write(&file, "# Circles").unwrap();

        let err = run::<AssessBot>(&ctx, &tokens(&["--file", file.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().contains("lesson.markdown"));
    }

    /// Assessment reads generated lessons back
    #[test]
    fn test_generated_lesson_passes() {
        let (_temp, mut ctx) = context_without_config();
        ctx.config = Box::new(Config::with_enabled(&[BotKind::ContentGenerator]));
        run::<ContentBot>(
            &ctx,
            &tokens(&["--civilization", "ancient-egypt", "--topic", "circles"]),
        )
        .unwrap();

        let file = ctx.content_root.join("ancient-egypt/circles-lesson.json");
        let content = InputLoader::load_json(&file, "Content").unwrap();
        let review = Review::evaluate(&content, crate::document::review::Criteria::All);
        assert_eq!(review.rating(), 5);

        run::<AssessBot>(
            &ctx,
            &tokens(&["--file", file.to_str().unwrap(), "--criteria", "accuracy"]),
        )
        .unwrap();
    }
}
