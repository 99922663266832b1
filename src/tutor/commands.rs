//! Tutor commands and the canned answers they produce.

use indoc::indoc;

pub const WELCOME: &str = indoc! {"
    ╔════════════════════════════════════════════════════════════╗
    ║                                                            ║
    ║          Geometric Civilizations Tutor                     ║
    ║          Your interactive learning companion               ║
    ║                                                            ║
    ╚════════════════════════════════════════════════════════════╝

    Welcome! I'm here to help you learn and build.

    I can help you with:

      📚 Understanding how this system works
      💻 Learning programming concepts
      🤖 Setting up and using the curriculum bots
      🐛 Debugging issues and errors

    Type 'help' for a list of commands, or just ask me anything!
    Type 'exit' or 'quit' to leave the tutor.
"};

const HELP: &str = indoc! {"
    Available Commands:

      help              - Show this help message
      guide             - Show the beginner's guide
      structure         - Explain the project structure
      bots              - Learn about the bot system
      config            - Help with configuration
      example           - Show usage examples
      concept <topic>   - Explain a programming concept
      debug             - Help debug an issue
      clear             - Clear the screen
      exit/quit         - Exit the tutor

    Or just type your question naturally!
"};

const GUIDE: &str = indoc! {"
    Beginner's Guide

    If you're new to programming, here's what you need to know:

    1. Rust - the programming language this tool is written in
       Install it from https://rustup.rs

    2. Cargo - Rust's build tool and package manager
       Run: cargo install --path .

    3. Bots - small commands that create curriculum content
       Each one is a subcommand of geociv

    4. Configuration - settings for the system
       Stored in config.json (create it with: geociv setup)

    Ready to start? Try: geociv content --help
"};

const STRUCTURE: &str = indoc! {"
    Project Structure

    Here's how the project is organized:

    📁 src/bots/
       One module per bot
       - content: lessons and content
       - quiz: quizzes
       - visualize: interactive shape pages
       - assess: content quality checks
       - decompose: shape decomposition lessons

    📁 src/document/ and src/render/
       Building documents and turning them into JSON, Markdown or HTML

    📁 templates/
       HTML templates built into the binary

    📁 curriculum/
       Generated content, organized by civilization

    📁 src/tutor/
       That's me!
"};

const BOTS: &str = indoc! {"
    Bot System Overview

    Bots are commands that help you create curriculum content.

    🤖 Content Generator Bot
       Creates lesson plans and educational content
       Usage: geociv content --civilization ancient-egypt --topic circles

    📝 Quiz Generator Bot
       Makes quizzes with several question types
       Usage: geociv quiz --topic pythagorean-theorem --questions 10

    🎨 Visualization Bot
       Creates interactive shape pages
       Usage: geociv visualize --shape hexagon --civilization islamic

    ✅ Assessment Bot
       Evaluates content quality and suggests improvements
       Usage: geociv assess --file curriculum/ancient-egypt/circles-lesson.json

    🧩 Image Decomposition Bot
       Shows how everyday objects are made of basic shapes
       Usage: geociv decompose --demo
"};

const CONFIG: &str = indoc! {"
    Configuration Help

    To configure the system:

    1. Create the config file:
       geociv setup
       (or: cp config.example.json config.json)

    2. Edit config.json with your settings:

       bots.<name>.enabled - Turn each bot on or off
       curriculum.difficulty - Target difficulty level
         Options: \"beginner\", \"intermediate\", \"advanced\"
       tutor.learningLevel - Your programming level
         Options: \"beginner\", \"intermediate\", \"advanced\"

    3. Save the file and you're ready to go!

    Use --config <path> to point geociv at a different file.
"};

const EXAMPLES: &str = indoc! {"
    Usage Examples

    Here are some common tasks:

    Example 1: Generate a lesson about circles in Ancient Egypt
      geociv content --civilization ancient-egypt --topic circles

    Example 2: Create a quiz on the Pythagorean theorem
      geociv quiz --topic pythagorean-theorem --questions 15

    Example 3: Visualize an Islamic hexagon
      geociv visualize --shape hexagon --civilization islamic

    Example 4: Check the quality of a lesson
      geociv assess --file curriculum/ancient-egypt/circles-lesson.json
"};

const DEBUG: &str = indoc! {"
    Debug Help

    Tell me about the error you're seeing, and I'll help you fix it!

    Common issues:

    • \"config file 'config.json' not found\" - Run: geociv setup
    • \"... is disabled in the config file\" - Set bots.<name>.enabled to true
    • \"Missing required argument\" - Run the bot with --help to see its flags
    • Want more detail? Add -v, -vv or -vvv before the subcommand
"};

const GETTING_STARTED: &str = indoc! {"
    To get started:

    1. Build and install: cargo install --path .
    2. Create a config: geociv setup
    3. Try running a bot: geociv content --help
"};

const INSTALL: &str = indoc! {"
    To install geociv:

    cargo install --path .

    This compiles the project and puts the geociv binary on your PATH.
"};

const MENU: &str = indoc! {"
    I can help you with:

    • Getting started
    • Understanding the code
    • Using the bots
    • Configuration
    • Debugging issues

    Try typing: help for a list of commands.
"};

const NOT_SURE: &str = "I'm not sure about that. Type 'help' to see what I can do!\n";
const FAREWELL: &str = "Thanks for learning with me! Happy coding! 🚀\n";

const CONCEPT_NAMES: &str = "api, json, async, function, or cargo";

struct Concept {
    title: &'static str,
    explanation: &'static str,
    example: &'static str,
}

fn concept(name: &str) -> Option<Concept> {
    let concept = match name {
        "api" => Concept {
            title: "API (Application Programming Interface)",
            explanation: "An API is like a waiter in a restaurant. You tell the waiter what you \
                          want, and the waiter brings it from the kitchen. Programs use APIs to \
                          ask other programs or services for work.",
            example: "Every bot in geociv exposes the same small API: options go in, \
                      a document comes out.",
        },
        "json" => Concept {
            title: "JSON (JavaScript Object Notation)",
            explanation: "JSON is a way to store and transfer data in a format that's easy for \
                          both humans and computers to read. Think of it like a structured filing \
                          system.",
            example: indoc! {r#"
                {
                  "civilization": "ancient-egypt",
                  "topic": "circles",
                  "difficulty": "beginner"
                }"#},
        },
        "async" => Concept {
            title: "Asynchronous Programming",
            explanation: "Async programming is like ordering food online. You place the order, \
                          keep doing other things, and get notified when the food arrives \
                          instead of waiting idle.",
            example: "A web server handles many requests at once by awaiting slow network calls.",
        },
        "function" => Concept {
            title: "Functions",
            explanation: "A function is a reusable block of code that performs a specific task. \
                          Think of it like a recipe: you write it once and can use it many times.",
            example: indoc! {r#"
                fn greet(name: &str) -> String {
                    format!("Hello, {}!", name)
                }
                greet("Student"); // "Hello, Student!""#},
        },
        "cargo" => Concept {
            title: "Cargo",
            explanation: "Cargo is Rust's build tool and package manager. It downloads libraries \
                          (called crates), compiles your code and runs your tests.",
            example: "cargo test - builds the project and runs every test.",
        },
        _ => return None,
    };
    Some(concept)
}

/// One line typed at the tutor prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TutorCommand {
    Help,
    Guide,
    Structure,
    Bots,
    Config,
    Examples,
    Clear,
    Concept(String),
    Debug,
    Exit,
    Empty,
    Question(String),
}

impl TutorCommand {
    pub fn parse(line: &str) -> Self {
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "" => TutorCommand::Empty,
            "help" => TutorCommand::Help,
            "guide" => TutorCommand::Guide,
            "structure" => TutorCommand::Structure,
            "bots" => TutorCommand::Bots,
            "config" => TutorCommand::Config,
            "example" | "examples" => TutorCommand::Examples,
            "clear" => TutorCommand::Clear,
            "debug" => TutorCommand::Debug,
            "exit" | "quit" => TutorCommand::Exit,
            "concept" => TutorCommand::Concept(String::new()),
            _ => match command.strip_prefix("concept ") {
                Some(name) => TutorCommand::Concept(name.trim().to_string()),
                None => TutorCommand::Question(command),
            },
        }
    }
}

/// What the read loop does after printing a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Clear the screen and show the welcome banner again
    Clear,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub flow: Flow,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            flow: Flow::Continue,
        }
    }
}

fn answer_question(question: &str) -> String {
    let asks = ["how", "what", "why"].iter().any(|w| question.contains(w));
    if !asks {
        return NOT_SURE.to_string();
    }

    let body = if question.contains("start") || question.contains("begin") {
        GETTING_STARTED
    } else if question.contains("bot") {
        BOTS
    } else if question.contains("config") {
        CONFIG
    } else if question.contains("install") {
        INSTALL
    } else {
        MENU
    };
    format!("Great question! Let me help you with that.\n\n{}", body)
}

fn explain(name: &str) -> String {
    match concept(name) {
        Some(c) => format!(
            "{}\n\n{}\n\nExample:\n{}\n",
            c.title,
            c.explanation,
            c.example
        ),
        None => format!("Concept \"{}\" not found. Try: {}\n", name, CONCEPT_NAMES),
    }
}

pub fn respond(command: &TutorCommand) -> Reply {
    match command {
        TutorCommand::Empty => Reply::say(""),
        TutorCommand::Help => Reply::say(HELP),
        TutorCommand::Guide => Reply::say(GUIDE),
        TutorCommand::Structure => Reply::say(STRUCTURE),
        TutorCommand::Bots => Reply::say(BOTS),
        TutorCommand::Config => Reply::say(CONFIG),
        TutorCommand::Examples => Reply::say(EXAMPLES),
        TutorCommand::Debug => Reply::say(DEBUG),
        TutorCommand::Concept(name) => Reply::say(explain(name)),
        TutorCommand::Question(question) => Reply::say(answer_question(question)),
        TutorCommand::Clear => Reply {
            text: WELCOME.to_string(),
            flow: Flow::Clear,
        },
        TutorCommand::Exit => Reply {
            text: FAREWELL.to_string(),
            flow: Flow::Exit,
        },
    }
}
