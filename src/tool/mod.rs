mod actions;
mod table;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

pub use actions::ToolContext;
pub use table::{ApplyHandler, PointerHandler, ToolHandlers, handlers};

/// The active editing tool. Only an explicit tool-select command changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    /// Select and move shapes
    #[default]
    Pick,
    /// Create rectangles
    Rect,
    /// Create circles
    Circ,
    /// Fill shapes
    Fill,
}

impl ToolId {
    pub const ALL: [ToolId; 4] = [Self::Pick, Self::Rect, Self::Circ, Self::Fill];

    pub fn name(self) -> &'static str {
        match self {
            Self::Pick => "pick",
            Self::Rect => "rect",
            Self::Circ => "circ",
            Self::Fill => "fill",
        }
    }

    /// Human-readable label for tooltips and the status bar
    pub fn label(self) -> &'static str {
        match self {
            Self::Pick => "Pick / Move",
            Self::Rect => "Rectangle",
            Self::Circ => "Circle",
            Self::Fill => "Fill",
        }
    }

    /// Toolbar glyph
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pick => "↖",
            Self::Rect => "▭",
            Self::Circ => "◯",
            Self::Fill => "■",
        }
    }

    pub fn shortcut(self) -> egui::Key {
        match self {
            Self::Pick => egui::Key::P,
            Self::Rect => egui::Key::R,
            Self::Circ => egui::Key::C,
            Self::Fill => egui::Key::F,
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolId {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| EditorError::InvalidToolId(s.to_owned()))
    }
}
