//! Plan view model
//!
//! [`plan_view`] is a pure mapping from a plan to the ordered node sequence a
//! surface and a map commit. It never touches either.

use serde::Serialize;

use crate::domain::{DayPlan, TripPlan};

/// One step of a render, in commit order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ViewNode {
    /// Make the story section visible
    ShowStory,
    Title { text: String },
    Summary { text: String },
    /// Remove every chapter rendered so far
    ClearChapters,
    /// Remove every marker on the map
    ClearMarkers,
    Chapter(ChapterView),
    Marker(MarkerView),
}

/// A day card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterView {
    pub day: u32,
    /// "Day {day}: {location}"
    pub heading: String,
    pub description: String,
    /// "{name}: {description} (${price})"
    pub activities: Vec<String>,
    /// "{name} - {description} ({price_range})"
    pub restaurant: String,
    pub city: String,
}

/// A map marker with its popup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub lat: f64,
    pub lng: f64,
    /// Shown in bold
    pub popup_title: String,
    pub popup_body: String,
}

/// Map a plan to its render nodes
///
/// Chapters and markers follow itinerary order, each day's chapter directly
/// followed by its marker.
pub fn plan_view(plan: &TripPlan) -> Vec<ViewNode> {
    let mut nodes = Vec::with_capacity(5 + plan.itinerary.len() * 2);
    nodes.push(ViewNode::ShowStory);
    nodes.push(ViewNode::Title {
        text: plan.display_title(),
    });
    nodes.push(ViewNode::Summary {
        text: plan.display_summary().to_string(),
    });
    nodes.push(ViewNode::ClearChapters);
    nodes.push(ViewNode::ClearMarkers);

    for day in &plan.itinerary {
        nodes.push(ViewNode::Chapter(chapter_view(day)));
        nodes.push(ViewNode::Marker(marker_view(day)));
    }
    nodes
}

fn chapter_view(day: &DayPlan) -> ChapterView {
    ChapterView {
        day: day.day,
        heading: format!("Day {}: {}", day.day, day.location.name),
        description: day.location.description.clone(),
        activities: day
            .activities
            .iter()
            .map(|a| format!("{}: {} (${})", a.name, a.description, a.price))
            .collect(),
        restaurant: format!(
            "{} - {} ({})",
            day.restaurant.name, day.restaurant.description, day.restaurant.price_range
        ),
        city: day.location.city.clone(),
    }
}

fn marker_view(day: &DayPlan) -> MarkerView {
    MarkerView {
        lat: day.location.lat,
        lng: day.location.lng,
        popup_title: day.location.name.clone(),
        popup_body: day.location.description.clone(),
    }
}
