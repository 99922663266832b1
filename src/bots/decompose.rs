use super::{Bot, BotContext, ConfigNeed};
use crate::args::{has_flag, RawOptions};
use crate::data::InputLoader;
use crate::document::{DecompositionDocument, DecompositionOptions};
use crate::error::BotError;
use crate::output::{Destination, OutputWriter};
use crate::render::{html, to_json, Format};
use crate::template::TemplateEngine;
use chrono::Utc;
use indoc::indoc;

const DEMO_DIR: &str = "decomposed-demo";
const DEMO_FILE: &str = "shape-decomposition-demo.html";

pub struct DecomposeBot;

impl DecomposeBot {
    fn demo(ctx: &BotContext) -> Result<(), BotError> {
        println!("Creating demo lesson with sample images...\n");

        let page = html::demo(&TemplateEngine::builtin())?;
        let dest = Destination::in_root(&ctx.content_root, DEMO_DIR, DEMO_FILE);
        let path = OutputWriter::write(&dest, &page)?;

        println!("✅ Demo lesson created successfully!");
        println!("📁 Saved to: {}", path.display());
        println!("\n🌐 Open this file in a web browser to see the lesson!");
        println!("\nThis demo shows:");
        println!("   • How to break down images into shapes");
        println!("   • Visual examples for grades 3-5");
        println!("   • Student activities and teacher notes");
        println!("\nNext: try `geociv decompose --image <photo> --outline <file>` yourself.");
        Ok(())
    }
}

impl Bot for DecomposeBot {
    type Options = DecompositionOptions;

    const NAME: &'static str = "Image Decomposition Bot";
    const CONFIG: ConfigNeed = ConfigNeed::Load;
    const HELP: &'static str = indoc! {"
        Image Decomposition Bot - Shows how objects are made of basic geometric shapes

        Made for teachers showing grades 3-5 how to see shapes in everyday objects.

        Usage:
          geociv decompose --image <path> --outline <path> [options]
          geociv decompose --demo

        Required Arguments:
          --image          Path to your photo (JPG, PNG)
                           Examples: photos/stop-sign.jpg, photos/building.jpg
          --outline        Path to a curriculum outline (text, JSON or YAML)
                           Example: outlines/shapes-lesson.yaml

        Optional Arguments:
          --grade          Target grade level (default: 3-5)
                           Options: 3, 4, 5, 3-5
          --shapes         Which shapes to highlight (default: all)
                           Options: 2d, 3d, all
          --output         Output directory (default: curriculum/decomposed/)
          --format         Output format (default: html)
                           Options: html, json
          --demo           Write a ready-made sample lesson and exit

        Examples:
          geociv decompose --demo
          geociv decompose --image photos/stop-sign.jpg --outline outlines/shapes.txt
          geociv decompose --image photos/can.png --outline solids.yaml --shapes 3d --grade 5
    "};

    fn options(raw: &RawOptions) -> Result<DecompositionOptions, String> {
        DecompositionOptions::from_raw(raw)
    }

    fn shortcut(ctx: &BotContext, tokens: &[String]) -> Result<bool, BotError> {
        if has_flag(tokens, "--demo") {
            Self::demo(ctx)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn execute(ctx: &BotContext, opts: DecompositionOptions) -> Result<(), BotError> {
        println!("Processing:");
        println!("  Image: {}", opts.image.display());
        println!("  Outline: {}", opts.outline.display());
        println!("  Grade: {}", opts.grade);
        println!("  Shapes: {}", opts.shapes.name());
        println!("  Format: {}\n", opts.format.extension());

        InputLoader::ensure_exists(&opts.image, "Image")?;
        let outline = InputLoader::load_outline(&opts.outline)?;

        let at = Utc::now();
        let image_name = opts.image_file_name();
        let doc = DecompositionDocument::build(&opts, outline, at);
        let text = match opts.format {
            Format::Json => to_json(&doc)?,
            _ => html::decomposition(&TemplateEngine::builtin(), &doc, &image_name, at)?,
        };

        let file_name = format!(
            "{}-decomposition.{}",
            opts.image_stem(),
            opts.format.extension()
        );
        let dest = match &opts.output_dir {
            Some(dir) => Destination::in_dir(dir, &file_name),
            None => Destination::in_root(&ctx.content_root, "decomposed", &file_name),
        };
        let path = OutputWriter::write(&dest, &text)?;

        println!("✅ Decomposition lesson created successfully!");
        println!("📁 Saved to: {}", path.display());
        println!("\nWhat was created:");
        println!("   • Visual shape breakdown");
        println!("   • Matched with your outline content");
        println!("   • Student activities");
        println!("   • Teacher notes");
        Ok(())
    }
}
