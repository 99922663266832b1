//! Bot subcommands and the shell they share.
//!
//! Every bot goes through [`run`]: optional shortcut, help, raw option
//! parsing, typed options, config checks, then the bot's own work.

pub mod assess;
pub mod content;
pub mod decompose;
pub mod quiz;
pub mod visualize;

use crate::args::{wants_help, RawOptions};
use crate::config::{BotKind, ConfigSource};
use crate::error::BotError;
use crate::output::Destination;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use assess::AssessBot;
pub use content::ContentBot;
pub use decompose::DecomposeBot;
pub use quiz::QuizBot;
pub use visualize::VisualizeBot;

/// What a bot run can reach outside its own options.
pub struct BotContext {
    pub config: Box<dyn ConfigSource>,
    pub content_root: PathBuf,
}

/// How much of the config file a bot needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigNeed {
    None,
    /// The file must exist and parse
    Load,
    /// The file must parse and enable this bot
    Enabled(BotKind),
}

pub trait Bot {
    type Options;

    const NAME: &'static str;
    const HELP: &'static str;
    const CONFIG: ConfigNeed;

    fn options(raw: &RawOptions) -> Result<Self::Options, String>;

    /// Handle tokens that skip option parsing entirely. Returns true when handled.
    fn shortcut(_ctx: &BotContext, _tokens: &[String]) -> Result<bool, BotError> {
        Ok(false)
    }

    fn execute(ctx: &BotContext, opts: Self::Options) -> Result<(), BotError>;
}

pub fn run<B: Bot>(ctx: &BotContext, tokens: &[String]) -> Result<(), BotError> {
    if B::shortcut(ctx, tokens)? {
        return Ok(());
    }

    if tokens.is_empty() || wants_help(tokens) {
        println!("{}", B::HELP);
        return Ok(());
    }

    let raw = RawOptions::parse(tokens).map_err(|message| BotError::usage(message, B::HELP))?;
    debug!(bot = B::NAME, flags = raw.len(), "parsed options");
    let opts = B::options(&raw).map_err(|message| BotError::usage(message, B::HELP))?;

    match B::CONFIG {
        ConfigNeed::None => {}
        ConfigNeed::Load => {
            ctx.config.load()?;
        }
        ConfigNeed::Enabled(kind) => ctx.config.load()?.ensure_enabled(kind)?,
    }

    println!("{} Starting...\n", B::NAME);
    B::execute(ctx, opts)
}

/// `--output` when given, otherwise `<content root>/<subdir>/<file_name>`.
pub(crate) fn destination(
    ctx: &BotContext,
    output: Option<&Path>,
    subdir: &str,
    file_name: &str,
) -> Destination {
    match output {
        Some(path) => Destination::explicit(path),
        None => Destination::in_root(&ctx.content_root, subdir, file_name),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    struct EchoBot;

    impl Bot for EchoBot {
        type Options = String;

        const NAME: &'static str = "Echo Bot";
        const HELP: &'static str = "echo help";
        const CONFIG: ConfigNeed = ConfigNeed::Enabled(BotKind::Assessment);

        fn options(raw: &RawOptions) -> Result<String, String> {
            raw.get("word")
                .map(str::to_string)
                .ok_or_else(|| "Missing required argument: --word".to_string())
        }

        fn execute(_ctx: &BotContext, _opts: String) -> Result<(), BotError> {
            Ok(())
        }
    }

    /// Shell: no tokens prints help and succeeds without touching config
    #[test]
    fn test_empty_tokens_show_help() {
        let (_temp, ctx) = context_without_config();
        assert!(run::<EchoBot>(&ctx, &[]).is_ok());
        assert!(run::<EchoBot>(&ctx, &tokens(&["--word", "x", "-h"])).is_ok());
    }

    /// Shell: option errors carry the bot's help text
    #[test]
    fn test_usage_error_carries_help() {
        let (_temp, ctx) = context(&[BotKind::Assessment]);
        let err = run::<EchoBot>(&ctx, &tokens(&["--other", "x"])).unwrap_err();
        assert_eq!(err.help(), Some("echo help"));
        assert_eq!(err.to_string(), "Missing required argument: --word");

        let err = run::<EchoBot>(&ctx, &tokens(&["--word"])).unwrap_err();
        assert_eq!(err.to_string(), "Missing value for --word");
    }

    /// Shell: usage errors are reported before config problems
    #[test]
    fn test_usage_checked_before_config() {
        let (_temp, ctx) = context_without_config();
        let err = run::<EchoBot>(&ctx, &tokens(&["stray"])).unwrap_err();
        assert!(matches!(err, BotError::Usage { .. }));

        let err = run::<EchoBot>(&ctx, &tokens(&["--word", "x"])).unwrap_err();
        assert!(matches!(err, BotError::ConfigMissing { .. }));
    }

    /// Shell: a bot missing from the config counts as disabled
    #[test]
    fn test_disabled_bot() {
        let (_temp, ctx) = context(&[BotKind::QuizGenerator]);
        match run::<EchoBot>(&ctx, &tokens(&["--word", "x"])) {
            Err(BotError::BotDisabled { key, .. }) => assert_eq!(key, "assessment"),
            other => panic!("Expected BotDisabled error, got {:?}", other),
        }
    }

    #[test]
    fn test_destination_prefers_output() {
        let (_temp, ctx) = context(&[]);
        let dest = destination(
            &ctx,
            Some(Path::new("out/q.json")),
            "quizzes",
            "circles-quiz.json",
        );
        assert_eq!(dest.file, PathBuf::from("out/q.json"));

        let dest = destination(&ctx, None, "quizzes", "circles-quiz.json");
        assert_eq!(
            dest.file,
            ctx.content_root.join("quizzes/circles-quiz.json")
        );
    }
}
