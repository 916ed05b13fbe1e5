//! Terminal adapter

use std::io::{self, Write};

use colored::*;

use super::context::RenderContext;
use super::surface::StoryDocument;

/// Write the story and marker list as colored text
pub fn write_story<W: Write>(out: &mut W, doc: &StoryDocument, context: Option<&RenderContext>) -> io::Result<()> {
    if !doc.visible {
        writeln!(out, "{}", "No plan rendered yet".dimmed())?;
        return Ok(());
    }

    writeln!(out, "{}", doc.title.bright_cyan().bold())?;
    if !doc.summary.is_empty() {
        writeln!(out, "{}", doc.summary)?;
    }

    for chapter in &doc.chapters {
        writeln!(out)?;
        writeln!(out, "{}", chapter.heading.yellow().bold())?;
        writeln!(out, "  {}", chapter.description)?;
        writeln!(out, "  {}", "Activities:".bold())?;
        for activity in &chapter.activities {
            writeln!(out, "    - {}", activity)?;
        }
        writeln!(out, "  {} {}", "Restaurant:".bold(), chapter.restaurant)?;
        writeln!(out, "  {} {}", "Location:".bold(), chapter.city)?;
    }

    if let Some(ctx) = context
        && !ctx.markers.is_empty()
    {
        writeln!(out)?;
        writeln!(out, "{}", "Map".bright_cyan().bold())?;
        for marker in ctx.markers.markers() {
            writeln!(
                out,
                "  {} {} ({:.4}, {:.4})",
                "●".green(),
                marker.popup_title,
                marker.lat,
                marker.lng
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::renderer::PlanRenderer;
    use super::super::view::fixtures::{day, plan};
    use super::*;
    use crate::config::MapConfig;

    fn output(doc: &StoryDocument, ctx: Option<&RenderContext>) -> String {
        let mut buf = Vec::new();
        write_story(&mut buf, doc, ctx).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_story() {
        let mut renderer = PlanRenderer::new(MapConfig::default());
        let mut doc = StoryDocument::default();
        renderer.render(&plan("Kyoto", vec![day(2, "Gion", 35.0037, 135.7788)]), &mut doc);

        let text = output(&doc, renderer.context());
        assert!(text.contains("Day 2: Gion"));
        assert!(text.contains("- Tea: Matcha ($15-20)"));
        assert!(text.contains("Izakaya - Small plates ($$)"));
        assert!(text.contains("(35.0037, 135.7788)"));
    }

    #[test]
    fn test_nothing_rendered() {
        let text = output(&StoryDocument::default(), None);
        assert!(text.contains("No plan rendered yet"));
    }
}
