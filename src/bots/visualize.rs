use super::{destination, Bot, BotContext, ConfigNeed};
use crate::args::RawOptions;
use crate::document::{VisualizationOptions, VisualizationSpec};
use crate::error::BotError;
use crate::output::OutputWriter;
use crate::render::html;
use crate::template::TemplateEngine;
use indoc::indoc;

pub struct VisualizeBot;

impl Bot for VisualizeBot {
    type Options = VisualizationOptions;

    const NAME: &'static str = "Visualization Generator Bot";
    const CONFIG: ConfigNeed = ConfigNeed::None;
    const HELP: &'static str = indoc! {"
        Visualization Generator Bot - Creates interactive shape pages

        Usage:
          geociv visualize --shape <shape> [options]

        Required Arguments:
          --shape          The geometric shape to visualize
                           Examples: circle, triangle, hexagon, pyramid, star

        Optional Arguments:
          --civilization   Cultural context for the visualization (default: general)
          --interactive    Add rotate/scale controls (default: true)
                           Options: true, false
          --output         Output file path
                           Default: curriculum/<civilization or visualizations>/
                                    <shape>-visualization.html

        Examples:
          geociv visualize --shape hexagon --civilization islamic
          geociv visualize --shape pyramid --civilization ancient-egypt --interactive false

        Run 'geociv tutor' for help!
    "};

    fn options(raw: &RawOptions) -> Result<VisualizationOptions, String> {
        VisualizationOptions::from_raw(raw)
    }

    fn execute(ctx: &BotContext, opts: VisualizationOptions) -> Result<(), BotError> {
        println!("Generating visualization for:");
        println!("  Shape: {}", opts.shape);
        if !opts.is_general() {
            println!("  Civilization: {}", opts.civilization);
        }
        println!("  Interactive: {}\n", opts.interactive);

        let spec = VisualizationSpec::build(&opts);
        let page = html::visualization(&TemplateEngine::builtin(), &spec)?;

        let subdir = if opts.is_general() {
            "visualizations"
        } else {
            opts.civilization.as_str()
        };
        let file_name = format!("{}-visualization.html", opts.shape);
        let dest = destination(ctx, opts.output.as_deref(), subdir, &file_name);
        let path = OutputWriter::write(&dest, &page)?;

        println!("✅ Visualization generated successfully!");
        println!("📁 Saved to: {}", path.display());
        println!("🌐 Open in browser to view!");
        Ok(())
    }
}
