use std::fmt;

use egui::{Color32, Pos2, Rect, Stroke, Vec2, vec2};

use crate::renderer::{DrawStyle, PrimitiveHandle, RenderSurface};

/// Half-extents of the box used for hit-testing, shared by both kinds.
/// Circles hit-test against this box too, not against their outline.
pub const HIT_HALF_EXTENTS: Vec2 = vec2(30.0, 20.0);

/// Identity of a shape inside its registry; never reused once issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

impl ShapeId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

impl ShapeKind {
    /// Half-extents of the drawn body
    pub fn half_extents(self) -> Vec2 {
        match self {
            Self::Rectangle => vec2(20.0, 15.0),
            Self::Circle => vec2(20.0, 20.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
        }
    }
}

/// Colors and sizes applied to newly created shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub outline: Stroke,
    pub fill: Color32,
    pub handle_fill: Color32,
    pub handle_half_size: f32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            outline: Stroke::new(1.0, Color32::BLACK),
            fill: Color32::RED,
            handle_fill: Color32::BLACK,
            handle_half_size: 2.0,
        }
    }
}

/// A selectable, movable, fillable shape and the primitives that draw it.
///
/// The body and its four handles are drawn once at creation; afterwards the
/// shape only moves, shows/hides or recolors those primitives.
#[derive(Debug)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    center: Pos2,
    selected: bool,
    filled: bool,
    fill_color: Color32,
    body: PrimitiveHandle,
    handles: [PrimitiveHandle; 4],
}

impl Shape {
    /// Create an unselected, unfilled shape centered at `at` and draw it
    pub fn create(
        id: ShapeId,
        kind: ShapeKind,
        at: Pos2,
        style: &ShapeStyle,
        surface: &mut dyn RenderSurface,
    ) -> Self {
        let bounds = Rect::from_center_size(at, kind.half_extents() * 2.0);
        let body_style = DrawStyle::outlined(style.outline);
        let body = match kind {
            ShapeKind::Rectangle => surface.draw_rect(bounds, body_style),
            ShapeKind::Circle => surface.draw_oval(bounds, body_style),
        };

        let handle_size = Vec2::splat(style.handle_half_size * 2.0);
        let handles = handle_positions(at, kind).map(|pos| {
            let handle = surface.draw_rect(
                Rect::from_center_size(pos, handle_size),
                DrawStyle::filled(style.handle_fill),
            );
            surface.set_visible(handle, false);
            handle
        });

        Self {
            id,
            kind,
            center: at,
            selected: false,
            filled: false,
            fill_color: style.fill,
            body,
            handles,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// The drawn body box, always centered on `center`
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, self.kind.half_extents() * 2.0)
    }

    pub fn hit_bounds(&self) -> Rect {
        Rect::from_center_size(self.center, HIT_HALF_EXTENTS * 2.0)
    }

    /// Midpoints of the body edges: left, right, top, bottom
    pub fn handle_positions(&self) -> [Pos2; 4] {
        handle_positions(self.center, self.kind)
    }

    pub fn body_primitive(&self) -> PrimitiveHandle {
        self.body
    }

    pub fn handle_primitives(&self) -> [PrimitiveHandle; 4] {
        self.handles
    }

    pub fn contains(&self, point: Pos2) -> bool {
        self.hit_bounds().contains(point)
    }

    /// Recenter on `point`, moving the body and every handle by the same delta
    pub fn move_to(&mut self, point: Pos2, surface: &mut dyn RenderSurface) {
        let delta = point - self.center;
        self.center = point;
        surface.move_by(self.body, delta);
        for handle in self.handles {
            surface.move_by(handle, delta);
        }
    }

    pub fn set_selected(&mut self, selected: bool, surface: &mut dyn RenderSurface) {
        self.selected = selected;
        for handle in self.handles {
            surface.set_visible(handle, selected);
        }
    }

    /// Fill the body. Only a full clear undoes this.
    pub fn fill(&mut self, surface: &mut dyn RenderSurface) {
        if self.filled {
            return;
        }
        self.filled = true;
        surface.set_fill(self.body, self.fill_color);
    }

    /// Erase every primitive this shape drew
    pub fn destroy(self, surface: &mut dyn RenderSurface) {
        surface.erase(self.body);
        for handle in self.handles {
            surface.erase(handle);
        }
    }
}

fn handle_positions(center: Pos2, kind: ShapeKind) -> [Pos2; 4] {
    let half = kind.half_extents();
    [
        center - vec2(half.x, 0.0),
        center + vec2(half.x, 0.0),
        center - vec2(0.0, half.y),
        center + vec2(0.0, half.y),
    ]
}
