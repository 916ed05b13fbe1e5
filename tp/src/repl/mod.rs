//! Interactive session for TripStory
//!
//! Keeps one form, one theme group and one renderer alive across
//! submissions, so the map context is created once and each successful plan
//! replaces the previous one.

mod session;

pub use session::{ReplSession, SlashResult};

use eyre::Result;

use crate::collector::InputCollector;
use crate::config::Config;
use crate::domain::FormState;
use crate::render::PlanRenderer;

/// Run the interactive session
///
/// This is the main entry point for `tp interactive`.
pub async fn run_interactive(config: &Config) -> Result<()> {
    let collector = InputCollector::from_config(&config.server)?;
    let themes = config.themes.selector().map_err(|e| eyre::eyre!(e))?;

    let mut session = ReplSession::new(collector, FormState::new(themes), PlanRenderer::new(config.map.clone()));
    session.run().await
}
