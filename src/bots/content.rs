use super::{destination, Bot, BotContext, ConfigNeed};
use crate::args::RawOptions;
use crate::config::BotKind;
use crate::document::{LessonDocument, LessonOptions};
use crate::error::BotError;
use crate::output::OutputWriter;
use crate::render::{html, markdown, to_json, Format};
use crate::template::TemplateEngine;
use chrono::Utc;
use indoc::indoc;

pub struct ContentBot;

impl Bot for ContentBot {
    type Options = LessonOptions;

    const NAME: &'static str = "Content Generator Bot";
    const CONFIG: ConfigNeed = ConfigNeed::Enabled(BotKind::ContentGenerator);
    const HELP: &'static str = indoc! {"
        Content Generator Bot - Creates curriculum lessons

        Usage:
          geociv content --civilization <name> --topic <topic> [options]

        Required Arguments:
          --civilization   The civilization to focus on
                           Examples: ancient-egypt, ancient-greece, islamic-golden-age
          --topic          The geometric topic to teach
                           Examples: circles, triangles, pythagorean-theorem, geometric-patterns

        Optional Arguments:
          --difficulty     Target difficulty level (default: intermediate)
                           Options: beginner, intermediate, advanced
          --output         Output file path
                           Default: curriculum/<civilization>/<topic>-lesson.<format>
          --format         Output format (default: json)
                           Options: json, markdown, html

        Examples:
          geociv content --civilization ancient-egypt --topic circles
          geociv content --civilization ancient-greece --topic triangles --difficulty beginner
          geociv content --civilization islamic-golden-age --topic geometric-patterns --format html

        Note: this bot must be enabled in config.json (bots.contentGenerator.enabled).
        Run 'geociv setup' to create one, or 'geociv tutor' for help.
    "};

    fn options(raw: &RawOptions) -> Result<LessonOptions, String> {
        LessonOptions::from_raw(raw)
    }

    fn execute(ctx: &BotContext, opts: LessonOptions) -> Result<(), BotError> {
        println!("Generating content for:");
        println!("  Civilization: {}", opts.civilization);
        println!("  Topic: {}", opts.topic);
        println!("  Difficulty: {}", opts.difficulty);
        println!("  Format: {}\n", opts.format.extension());

        let doc = LessonDocument::build(&opts, Utc::now());
        let text = match opts.format {
            Format::Json => to_json(&doc)?,
            Format::Markdown => markdown::lesson(&doc),
            Format::Html => html::lesson(&TemplateEngine::builtin(), &doc)?,
        };

        let file_name = format!("{}-lesson.{}", opts.topic, opts.format.extension());
        let dest = destination(ctx, opts.output.as_deref(), &opts.civilization, &file_name);
        let path = OutputWriter::write(&dest, &text)?;

        println!("✅ Content generated successfully!");
        println!("📁 Saved to: {}\n", path.display());
        println!("Next steps:");
        println!("  • Review the generated content");
        println!(
            "  • Run `geociv assess --file {}` to check quality",
            path.display()
        );
        println!(
            "  • Generate a quiz with `geociv quiz --topic {}`",
            opts.topic
        );
        Ok(())
    }
}
