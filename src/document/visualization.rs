use super::{path_token, required};
use crate::args::RawOptions;
use serde::Serialize;
use std::path::PathBuf;

/// Radius of the drawn polygon, in canvas pixels
pub const POLYGON_RADIUS: u32 = 150;

/// Number of sides drawn for a shape name.
pub fn polygon_sides(shape: &str) -> u32 {
    match shape {
        "hexagon" => 6,
        "triangle" => 3,
        _ => 4,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationOptions {
    pub shape: String,
    pub civilization: String,
    pub interactive: bool,
    pub output: Option<PathBuf>,
}

impl VisualizationOptions {
    pub fn from_raw(raw: &RawOptions) -> Result<Self, String> {
        let interactive = match raw.get_or("interactive", "true") {
            "true" => true,
            "false" => false,
            other => {
                return Err(format!(
                    "Invalid --interactive '{}' (expected true or false)",
                    other
                ));
            }
        };

        Ok(VisualizationOptions {
            shape: path_token("shape", required(raw, "shape")?)?,
            civilization: path_token("civilization", raw.get_or("civilization", "general"))?,
            interactive,
            output: raw.get("output").map(PathBuf::from),
        })
    }

    pub fn is_general(&self) -> bool {
        self.civilization == "general"
    }
}

/// What the HTML page draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualizationSpec {
    pub shape: String,
    pub civilization: String,
    pub interactive: bool,
    pub sides: u32,
}

impl VisualizationSpec {
    pub fn build(opts: &VisualizationOptions) -> Self {
        VisualizationSpec {
            shape: opts.shape.clone(),
            civilization: opts.civilization.clone(),
            interactive: opts.interactive,
            sides: polygon_sides(&opts.shape),
        }
    }
}
