use egui::{Color32, Stroke};
use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::shape::ShapeStyle;
use crate::tool::ToolId;

/// User-tunable editor settings, persisted across runs.
///
/// Only settings live here. Shapes drawn during a session are never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old settings
pub struct EditorConfig {
    pub outline_color: Color32,
    pub outline_width: f32,
    /// Color applied by the fill tool
    pub fill_color: Color32,
    pub handle_color: Color32,
    pub handle_half_size: f32,
    pub background: Color32,
    /// Tool active when the editor starts
    pub initial_tool: ToolId,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            outline_color: Color32::BLACK,
            outline_width: 1.0,
            fill_color: Color32::RED,
            handle_color: Color32::BLACK,
            handle_half_size: 2.0,
            background: Color32::WHITE,
            initial_tool: ToolId::Pick,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn shape_style(&self) -> ShapeStyle {
        ShapeStyle {
            outline: Stroke::new(self.outline_width, self.outline_color),
            fill: self.fill_color,
            handle_fill: self.handle_color,
            handle_half_size: self.handle_half_size,
        }
    }
}
