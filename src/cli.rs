use clap::{ArgAction, Args, Parser, Subcommand};
use indoc::indoc;
use std::path::PathBuf;

/// Printed when `geociv` runs without a subcommand.
pub const BANNER: &str = indoc! {"
    Geometric Civilizations - curriculum bots

    Commands:
      content     Generate a lesson for a civilization and topic
      quiz        Generate a quiz for a topic
      visualize   Generate an interactive shape page
      assess      Check the quality of a generated JSON file
      decompose   Build a shape decomposition lesson from a photo and an outline
      tutor       Start the interactive help shell
      setup       Create config.json from the built-in example

    Quick start:
      geociv setup
      geociv content --civilization ancient-egypt --topic circles
      geociv quiz --topic pythagorean-theorem --questions 5
      geociv decompose --demo

    Run 'geociv <command> --help' for the flags of each bot.
"};

#[derive(Parser, Debug)]
#[command(
    name = "geociv",
    version,
    about = "Curriculum bots for geometry across civilizations",
    long_about = "Generates lessons, quizzes, shape visualizations and shape decomposition lessons \
                  as JSON, Markdown or standalone HTML files, checks generated content, and \
                  offers an interactive tutor."
)]
pub struct Cli {
    /// Config file controlling which bots are enabled
    #[arg(long = "config", value_name = "PATH", default_value = "config.json")]
    pub config: PathBuf,

    /// Directory generated content is written under
    #[arg(long = "content-root", value_name = "DIR", default_value = "curriculum")]
    pub content_root: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a lesson (JSON, Markdown or HTML)
    #[command(disable_help_flag = true)]
    Content(BotArgs),

    /// Generate a quiz
    #[command(disable_help_flag = true)]
    Quiz(BotArgs),

    /// Generate an interactive shape visualization
    #[command(disable_help_flag = true)]
    Visualize(BotArgs),

    /// Assess a generated JSON content file
    #[command(disable_help_flag = true)]
    Assess(BotArgs),

    /// Build a shape decomposition lesson
    #[command(disable_help_flag = true)]
    Decompose(BotArgs),

    /// Start the interactive tutor
    Tutor,

    /// Create config.json from the built-in example
    Setup,
}

/// Flags after a bot subcommand, passed through untouched as `--name value` pairs.
#[derive(Args, Debug)]
pub struct BotArgs {
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        value_name = "FLAGS"
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Validate CLI arguments
    pub fn validate(&self) -> Result<(), String> {
        if self.config.is_dir() {
            return Err(format!(
                "--config '{}' is a directory, expected a JSON file",
                self.config.display()
            ));
        }

        if self.content_root.is_file() {
            return Err(format!(
                "--content-root '{}' is a file, expected a directory",
                self.content_root.display()
            ));
        }

        Ok(())
    }
}
