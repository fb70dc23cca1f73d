use std::collections::BTreeMap;

use egui::{Color32, Painter, Pos2, Rect, Shape, Vec2};
use log::warn;

use crate::renderer::{DrawStyle, PrimitiveHandle, RenderSurface};

/// Number of segments used to approximate an oval outline
const OVAL_SEGMENTS: usize = 48;

/// Geometry of a retained primitive, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Rect(Rect),
    Oval(Rect),
    Line(Vec<Pos2>),
    Polygon(Vec<Pos2>),
}

impl Geometry {
    fn translate(&mut self, delta: Vec2) {
        match self {
            Self::Rect(rect) | Self::Oval(rect) => *rect = rect.translate(delta),
            Self::Line(points) | Self::Polygon(points) => {
                for point in points.iter_mut() {
                    *point += delta;
                }
            }
        }
    }

    /// Bounding box of the geometry
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(rect) | Self::Oval(rect) => *rect,
            Self::Line(points) | Self::Polygon(points) => Rect::from_points(points),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub geometry: Geometry,
    pub style: DrawStyle,
    pub visible: bool,
}

/// Retained display list backing the editor.
///
/// Primitives are kept until erased and painted in the order they were drawn,
/// so later primitives render on top.
#[derive(Debug, Default)]
pub struct Canvas {
    primitives: BTreeMap<PrimitiveHandle, Primitive>,
    next_handle: u64,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitive(&self, handle: PrimitiveHandle) -> Option<&Primitive> {
        self.primitives.get(&handle)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.primitives.values().filter(|p| p.visible).count()
    }

    /// Iterate primitives bottom to top
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveHandle, &Primitive)> {
        self.primitives.iter().map(|(handle, primitive)| (*handle, primitive))
    }

    fn push(&mut self, geometry: Geometry, style: DrawStyle) -> PrimitiveHandle {
        let handle = PrimitiveHandle::new(self.next_handle);
        self.next_handle += 1;
        self.primitives.insert(
            handle,
            Primitive {
                geometry,
                style,
                visible: true,
            },
        );
        handle
    }

    fn primitive_mut(&mut self, handle: PrimitiveHandle, op: &str) -> Option<&mut Primitive> {
        let primitive = self.primitives.get_mut(&handle);
        if primitive.is_none() {
            warn!("{} on unknown primitive {:?}", op, handle);
        }
        primitive
    }

    /// Paint every visible primitive, offset by `origin` into screen space
    pub fn paint(&self, painter: &Painter, origin: Vec2) {
        for primitive in self.primitives.values().filter(|p| p.visible) {
            let style = primitive.style;
            let mut geometry = primitive.geometry.clone();
            geometry.translate(origin);

            match geometry {
                Geometry::Rect(rect) => {
                    painter.rect_filled(rect, 0.0, style.fill);
                    painter.rect_stroke(rect, 0.0, style.stroke);
                }
                Geometry::Oval(rect) => {
                    painter.add(Shape::convex_polygon(
                        oval_points(rect),
                        style.fill,
                        style.stroke,
                    ));
                }
                Geometry::Line(points) => {
                    painter.add(Shape::line(points, style.stroke));
                }
                Geometry::Polygon(points) => {
                    painter.add(Shape::convex_polygon(points, style.fill, style.stroke));
                }
            }
        }
    }
}

/// Points along the ellipse inscribed in `rect`
fn oval_points(rect: Rect) -> Vec<Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;
    (0..OVAL_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / OVAL_SEGMENTS as f32 * std::f32::consts::TAU;
            center + Vec2::new(radius.x * angle.cos(), radius.y * angle.sin())
        })
        .collect()
}

impl RenderSurface for Canvas {
    fn draw_rect(&mut self, bounds: Rect, style: DrawStyle) -> PrimitiveHandle {
        self.push(Geometry::Rect(bounds), style)
    }

    fn draw_oval(&mut self, bounds: Rect, style: DrawStyle) -> PrimitiveHandle {
        self.push(Geometry::Oval(bounds), style)
    }

    fn draw_line(&mut self, points: &[Pos2], style: DrawStyle) -> PrimitiveHandle {
        self.push(Geometry::Line(points.to_vec()), style)
    }

    fn draw_polygon(&mut self, points: &[Pos2], style: DrawStyle) -> PrimitiveHandle {
        self.push(Geometry::Polygon(points.to_vec()), style)
    }

    fn move_by(&mut self, handle: PrimitiveHandle, delta: Vec2) {
        if let Some(primitive) = self.primitive_mut(handle, "move") {
            primitive.geometry.translate(delta);
        }
    }

    fn set_visible(&mut self, handle: PrimitiveHandle, visible: bool) {
        if let Some(primitive) = self.primitive_mut(handle, "set_visible") {
            primitive.visible = visible;
        }
    }

    fn set_fill(&mut self, handle: PrimitiveHandle, color: Color32) {
        if let Some(primitive) = self.primitive_mut(handle, "set_fill") {
            primitive.style.fill = color;
        }
    }

    fn erase(&mut self, handle: PrimitiveHandle) {
        if self.primitives.remove(&handle).is_none() {
            warn!("erase on unknown primitive {:?}", handle);
        }
    }

    fn clear_all(&mut self) {
        self.primitives.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Stroke, pos2, vec2};

    fn style() -> DrawStyle {
        DrawStyle::outlined(Stroke::new(1.0, Color32::BLACK))
    }

    #[test]
    fn test_handles_are_unique_and_ordered() {
        let mut canvas = Canvas::new();
        let a = canvas.draw_rect(Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0)), style());
        let b = canvas.draw_oval(Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0)), style());
        assert!(a < b);

        let order: Vec<_> = canvas.iter().map(|(handle, _)| handle).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn test_move_translates_geometry() {
        let mut canvas = Canvas::new();
        let line = canvas.draw_line(&[pos2(0.0, 0.0), pos2(5.0, 5.0)], style());
        canvas.move_by(line, vec2(10.0, -2.0));

        assert_eq!(
            canvas.primitive(line).unwrap().geometry,
            Geometry::Line(vec![pos2(10.0, -2.0), pos2(15.0, 3.0)])
        );
    }

    #[test]
    fn test_visibility_and_fill() {
        let mut canvas = Canvas::new();
        let poly = canvas.draw_polygon(
            &[pos2(0.0, 0.0), pos2(4.0, 0.0), pos2(2.0, 3.0)],
            style(),
        );
        canvas.set_visible(poly, false);
        assert_eq!(canvas.visible_count(), 0);

        canvas.set_fill(poly, Color32::RED);
        assert_eq!(canvas.primitive(poly).unwrap().style.fill, Color32::RED);
    }

    #[test]
    fn test_erase_and_clear() {
        let mut canvas = Canvas::new();
        let rect = canvas.draw_rect(Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)), style());
        canvas.draw_rect(Rect::from_min_max(pos2(2.0, 2.0), pos2(3.0, 3.0)), style());

        canvas.erase(rect);
        assert!(canvas.primitive(rect).is_none());
        assert_eq!(canvas.len(), 1);

        // Unknown handles are ignored
        canvas.erase(rect);
        canvas.move_by(rect, vec2(1.0, 1.0));

        canvas.clear_all();
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_paint_basics() {
        let mut canvas = Canvas::new();
        canvas.draw_rect(Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0)), style());
        canvas.draw_oval(Rect::from_min_max(pos2(5.0, 5.0), pos2(25.0, 25.0)), style());

        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
        let painter = Painter::new(ctx, layer_id, rect);

        canvas.paint(&painter, vec2(20.0, 20.0));
    }

    #[test]
    fn test_oval_points_stay_inside_bounds() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(40.0, 20.0));
        for point in oval_points(rect) {
            assert!(rect.expand(0.001).contains(point));
        }
    }
}
