mod args;
mod bots;
mod cli;
mod config;
mod data;
mod document;
mod error;
mod output;
mod render;
mod template;
mod text;
mod tutor;

use bots::{AssessBot, BotContext, ContentBot, DecomposeBot, QuizBot, VisualizeBot};
use clap::Parser;
use cli::{Cli, Commands, BANNER};
use config::{BotKind, ConfigSource, FileConfigSource, EXAMPLE_CONFIG};
use error::{BotError, EXIT_FAILURE, EXIT_SUCCESS};
use output::{Destination, OutputWriter};
use std::path::Path;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Validate arguments
    if let Err(e) = cli.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_FAILURE);
    }

    match run(cli) {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            match e.help() {
                Some(help) => eprintln!("\n{}", help),
                None => eprintln!("\n{}", e.remediation()),
            }
            std::process::exit(e.exit_code());
        }
    }
}

/// Logs go to stderr so generated output and progress on stdout stay clean.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(verbose >= 2))
        .init();
}

fn run(cli: Cli) -> Result<(), BotError> {
    let ctx = BotContext {
        config: Box::new(FileConfigSource::new(&cli.config)),
        content_root: cli.content_root.clone(),
    };

    match cli.command {
        None => {
            print!("{}", BANNER);
            Ok(())
        }
        Some(Commands::Content(bot)) => bots::run::<ContentBot>(&ctx, &bot.args),
        Some(Commands::Quiz(bot)) => bots::run::<QuizBot>(&ctx, &bot.args),
        Some(Commands::Visualize(bot)) => bots::run::<VisualizeBot>(&ctx, &bot.args),
        Some(Commands::Assess(bot)) => bots::run::<AssessBot>(&ctx, &bot.args),
        Some(Commands::Decompose(bot)) => bots::run::<DecomposeBot>(&ctx, &bot.args),
        Some(Commands::Tutor) => tutor::run(),
        Some(Commands::Setup) => setup(&cli.config),
    }
}

/// Write the example config unless one exists, then show which bots it enables.
fn setup(path: &Path) -> Result<(), BotError> {
    if path.exists() {
        println!(
            "Config file already exists at {}, leaving it untouched.",
            path.display()
        );
    } else {
        let written = OutputWriter::write(&Destination::explicit(path), EXAMPLE_CONFIG)?;
        println!("✅ Created {} from the built-in example.", written.display());
    }

    let config = FileConfigSource::new(path).load()?;
    println!("\nBots:");
    for kind in BotKind::ALL {
        let status = if config.ensure_enabled(kind).is_ok() {
            "enabled"
        } else {
            "disabled"
        };
        println!(
            "  {:<28} {} (bots.{}.enabled)",
            kind.display_name(),
            status,
            kind.config_key()
        );
    }
    Ok(())
}
