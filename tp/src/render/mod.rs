//! Plan rendering
//!
//! - [`view`] - pure `TripPlan -> Vec<ViewNode>` mapping
//! - [`PlanRenderer`] - commits nodes to a surface and the map context
//! - [`html`], [`terminal`] - output adapters over a rendered [`StoryDocument`]

mod context;
pub mod html;
mod renderer;
mod surface;
pub mod terminal;
pub mod view;

pub use context::{MarkerLayer, RenderContext};
pub use renderer::PlanRenderer;
pub use surface::{StoryDocument, StorySurface};
pub use view::{ChapterView, MarkerView, ViewNode, plan_view};

use eyre::Result;
use serde_json::json;

/// Output format of a rendered story
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Present a rendered story in the given format
pub fn present(format: OutputFormat, doc: &StoryDocument, context: Option<&RenderContext>) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut buf = Vec::new();
            terminal::write_story(&mut buf, doc, context)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
        OutputFormat::Html => html::render_page(doc, context),
        OutputFormat::Json => {
            let value = json!({
                "story": doc,
                "map": context,
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}
