use crate::core::OrderPolicy;
use serde::Deserialize;

/// Width of the reference terminal
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Knobs for turning a history into text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Lines longer than this many display columns are cut
    pub max_width: usize,
    /// Glyph on the rail of the commit a row describes
    pub marker: char,
    /// Glyph on every other rail
    pub rail: char,
    /// Append the commit message after the ID
    pub show_messages: bool,
    /// How to treat histories that list a child before its parent
    pub order: OrderPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            marker: 'o',
            rail: '|',
            show_messages: true,
            order: OrderPolicy::default(),
        }
    }
}
