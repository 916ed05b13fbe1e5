//! Plan renderer
//!
//! Commits [`plan_view`] nodes: story nodes go to a [`StorySurface`], marker
//! nodes to the [`RenderContext`]. The context is created lazily on the first
//! render and reused for every later one.

use tracing::{debug, info};

use super::context::RenderContext;
use super::surface::StorySurface;
use super::view::{ViewNode, plan_view};
use crate::config::MapConfig;
use crate::domain::TripPlan;

pub struct PlanRenderer {
    settings: MapConfig,
    context: Option<RenderContext>,
}

impl PlanRenderer {
    pub fn new(settings: MapConfig) -> Self {
        Self {
            settings,
            context: None,
        }
    }

    /// Replace everything previously rendered with `plan`
    pub fn render(&mut self, plan: &TripPlan, surface: &mut dyn StorySurface) -> &RenderContext {
        let nodes = plan_view(plan);
        debug!(nodes = nodes.len(), "render: committing nodes");

        let context = self.context.get_or_insert_with(|| RenderContext::new(&self.settings));

        for node in &nodes {
            match node {
                ViewNode::ShowStory => surface.show_story(),
                ViewNode::Title { text } => surface.set_title(text),
                ViewNode::Summary { text } => surface.set_summary(text),
                ViewNode::ClearChapters => surface.clear_chapters(),
                ViewNode::ClearMarkers => context.markers.clear_layers(),
                ViewNode::Chapter(chapter) => surface.append_chapter(chapter),
                ViewNode::Marker(marker) => context.markers.add(marker.clone()),
            }
        }

        info!(days = plan.itinerary.len(), markers = context.markers.len(), "Plan rendered");
        context
    }

    /// Map state, once the first render has happened
    pub fn context(&self) -> Option<&RenderContext> {
        self.context.as_ref()
    }
}
