//! Travel style theme buttons
//!
//! A single-choice button group. Exactly one button is selected at a time and
//! the style value mirrors the selected button's style identifier.

use serde::Serialize;
use tracing::debug;

/// One button in the theme group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeButton {
    pub style: String,
    pub selected: bool,
}

/// Theme button group plus the hidden style value the request reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSelector {
    buttons: Vec<ThemeButton>,
    style_value: String,
}

impl ThemeSelector {
    /// Create a group with `preset` selected
    ///
    /// Fails when the group is empty, lists a style twice, or `preset` is not
    /// one of its styles.
    pub fn new<I, S>(styles: I, preset: &str) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let buttons: Vec<ThemeButton> = styles
            .into_iter()
            .map(|s| {
                let style: String = s.into();
                ThemeButton {
                    selected: style == preset,
                    style,
                }
            })
            .collect();

        if buttons.is_empty() {
            return Err("No themes configured".to_string());
        }
        for (i, button) in buttons.iter().enumerate() {
            if buttons[..i].iter().any(|b| b.style == button.style) {
                return Err(format!("Duplicate theme: {}", button.style));
            }
        }
        if !buttons.iter().any(|b| b.selected) {
            return Err(format!("Unknown default theme: {}", preset));
        }

        debug!(count = buttons.len(), %preset, "ThemeSelector::new: created");
        Ok(Self {
            buttons,
            style_value: preset.to_string(),
        })
    }

    /// Select the button carrying `style`, deselecting every other one
    ///
    /// Unknown styles leave the group untouched.
    pub fn click(&mut self, style: &str) -> Result<(), String> {
        if !self.buttons.iter().any(|b| b.style == style) {
            debug!(%style, "ThemeSelector::click: unknown style");
            return Err(format!("Unknown theme: {}", style));
        }

        for button in &mut self.buttons {
            button.selected = button.style == style;
        }
        self.style_value = style.to_string();
        debug!(%style, "ThemeSelector::click: selected");
        Ok(())
    }

    /// Value of the hidden style field
    pub fn style_value(&self) -> &str {
        &self.style_value
    }

    pub fn selected(&self) -> Option<&ThemeButton> {
        self.buttons.iter().find(|b| b.selected)
    }

    pub fn buttons(&self) -> &[ThemeButton] {
        &self.buttons
    }
}
