// src/renderer.rs
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

/// Opaque handle to one primitive drawn on a [`RenderSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveHandle(u64);

impl PrimitiveHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Outline and fill used when a primitive is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    pub stroke: Stroke,
    pub fill: Color32,
}

impl DrawStyle {
    pub fn outlined(stroke: Stroke) -> Self {
        Self {
            stroke,
            fill: Color32::TRANSPARENT,
        }
    }

    pub fn filled(fill: Color32) -> Self {
        Self {
            stroke: Stroke::NONE,
            fill,
        }
    }
}

/// The 2-D drawing surface shapes issue their draw, move and erase commands to.
///
/// Every draw call returns a handle the caller keeps to address the primitive
/// later. A surface never owns shapes; it only knows about primitives.
pub trait RenderSurface {
    /// Draw an axis-aligned rectangle
    fn draw_rect(&mut self, bounds: Rect, style: DrawStyle) -> PrimitiveHandle;

    /// Draw an ellipse inscribed in `bounds`
    fn draw_oval(&mut self, bounds: Rect, style: DrawStyle) -> PrimitiveHandle;

    /// Draw an open polyline through `points`
    fn draw_line(&mut self, points: &[Pos2], style: DrawStyle) -> PrimitiveHandle;

    /// Draw a closed polygon through `points`
    fn draw_polygon(&mut self, points: &[Pos2], style: DrawStyle) -> PrimitiveHandle;

    /// Translate a primitive by `delta`
    fn move_by(&mut self, handle: PrimitiveHandle, delta: Vec2);

    fn set_visible(&mut self, handle: PrimitiveHandle, visible: bool);

    /// Change the fill color of a primitive
    fn set_fill(&mut self, handle: PrimitiveHandle, color: Color32);

    /// Remove a primitive; its handle is dead afterwards
    fn erase(&mut self, handle: PrimitiveHandle);

    /// Remove every primitive on the surface
    fn clear_all(&mut self);
}
