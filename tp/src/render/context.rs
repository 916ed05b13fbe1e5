//! Map view and marker layer owned by the renderer

use serde::Serialize;
use tracing::debug;

use super::view::MarkerView;
use crate::config::MapConfig;

/// Markers currently on the map, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarkerLayer {
    markers: Vec<MarkerView>,
}

impl MarkerLayer {
    pub fn add(&mut self, marker: MarkerView) {
        self.markers.push(marker);
    }

    pub fn clear_layers(&mut self) {
        debug!(removed = self.markers.len(), "MarkerLayer::clear_layers: called");
        self.markers.clear();
    }

    pub fn markers(&self) -> &[MarkerView] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Tile map with its marker layer
///
/// Created once, on the first render, from [`MapConfig`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderContext {
    pub tile_url: String,
    pub max_zoom: u8,
    pub center: [f64; 2],
    pub zoom: u8,
    pub scroll_wheel_zoom: bool,
    pub markers: MarkerLayer,
}

impl RenderContext {
    pub fn new(settings: &MapConfig) -> Self {
        debug!(?settings.center, settings.zoom, "RenderContext::new: creating map");
        Self {
            tile_url: settings.tile_url.clone(),
            max_zoom: settings.max_zoom,
            center: settings.center,
            zoom: settings.zoom,
            scroll_wheel_zoom: settings.scroll_wheel_zoom,
            markers: MarkerLayer::default(),
        }
    }
}
