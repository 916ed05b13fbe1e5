//! HTML adapter
//!
//! Writes the story document and map as a standalone page. Text is escaped by
//! handlebars; markers reach Leaflet as embedded JSON.

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde_json::json;
use tracing::debug;

use super::context::RenderContext;
use super::surface::StoryDocument;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{title}}</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <style>
    #map { height: 420px; }
    .chapter { margin: 1em 0; }
  </style>
</head>
<body>
  <section id="storySection" style="display: {{#if visible}}block{{else}}none{{/if}}">
    <h2 id="planTitle">{{title}}</h2>
    <p id="planSummary">{{summary}}</p>
    <div id="map"></div>
    <div id="chapters">
{{#each chapters}}
      <div class="chapter">
        <h3>{{heading}}</h3>
        <p>{{description}}</p>
        <p><strong>Activities:</strong></p>
        <ul>
{{#each activities}}
          <li>{{this}}</li>
{{/each}}
        </ul>
        <p><strong>Restaurant:</strong> {{restaurant}}</p>
        <p><strong>Location:</strong> {{city}}</p>
      </div>
{{/each}}
    </div>
  </section>
{{#if map}}
  <script>
    const view = {{{map}}};
    const map = L.map('map', { scrollWheelZoom: view.scroll_wheel_zoom }).setView(view.center, view.zoom);
    L.tileLayer(view.tile_url, { maxZoom: view.max_zoom }).addTo(map);
    const markersLayer = L.layerGroup().addTo(map);
    const esc = s => String(s).replace(/[&<>"']/g, c => '&#' + c.charCodeAt(0) + ';');
    view.markers.markers.forEach(m => {
      L.marker([m.lat, m.lng]).addTo(markersLayer)
        .bindPopup('<b>' + esc(m.popup_title) + '</b><br>' + esc(m.popup_body));
    });
  </script>
{{/if}}
</body>
</html>
"#;

/// Render the page for a story document and, when present, its map
pub fn render_page(doc: &StoryDocument, context: Option<&RenderContext>) -> Result<String> {
    debug!(chapters = doc.chapters.len(), has_map = context.is_some(), "render_page: called");

    let mut hb = Handlebars::new();
    hb.register_template_string("page", PAGE_TEMPLATE)
        .map_err(|e| eyre!("Failed to register page template: {}", e))?;

    let map = match context {
        Some(ctx) => Some(script_json(&serde_json::to_string(ctx)?)),
        None => None,
    };

    let data = json!({
        "visible": doc.visible,
        "title": doc.title,
        "summary": doc.summary,
        "chapters": doc.chapters,
        "map": map,
    });

    hb.render("page", &data)
        .map_err(|e| eyre!("Failed to render page: {}", e))
}

/// Make JSON safe to embed inside a `<script>` element
fn script_json(raw: &str) -> String {
    raw.replace("</", "<\\/").replace("<!--", "<\\!--")
}

#[cfg(test)]
mod tests {
    use super::super::renderer::PlanRenderer;
    use super::super::view::fixtures::{day, plan};
    use super::*;
    use crate::config::MapConfig;

    #[test]
    fn test_page_contains_chapters_and_markers() {
        let mut renderer = PlanRenderer::new(MapConfig::default());
        let mut doc = StoryDocument::default();
        let p = plan("Kyoto", vec![day(1, "Fushimi Inari", 34.96, 135.77)]);
        renderer.render(&p, &mut doc);

        let html = render_page(&doc, renderer.context()).unwrap();
        assert!(html.contains(r#"<h2 id="planTitle">Kyoto</h2>"#));
        assert!(html.contains("<h3>Day 1: Fushimi Inari</h3>"));
        assert!(html.contains("<li>Temple visit: Morning walk ($10)</li>"));
        assert!(html.contains("display: block"));
        assert!(html.contains("\"popup_title\":\"Fushimi Inari\""));
        assert!(html.contains("tile.openstreetmap.org"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut renderer = PlanRenderer::new(MapConfig::default());
        let mut doc = StoryDocument::default();
        let mut p = plan("<script>alert(1)</script>", vec![day(1, "A</script>", 0.0, 0.0)]);
        p.summary = Some("Fish & chips".to_string());
        renderer.render(&p, &mut doc);

        let html = render_page(&doc, renderer.context()).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("Fish &amp; chips"));
        assert!(!html.contains("A</script>"));
    }

    #[test]
    fn test_hidden_before_first_render() {
        let html = render_page(&StoryDocument::default(), None).unwrap();
        assert!(html.contains("display: none"));
        assert!(!html.contains("L.map("));
    }
}
