use egui::Pos2;

use crate::renderer::RenderSurface;
use crate::shape::{Shape, ShapeId, ShapeKind, ShapeStyle};

/// Ordered collection of live shapes.
///
/// Insertion order is z-order: later shapes render on top and win hit-tests.
/// The registry is the only owner of its shapes; everything else refers to
/// them by [`ShapeId`].
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: Vec<Shape>,
    next_id: u64,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_id(&mut self) -> ShapeId {
        self.next_id += 1;
        ShapeId::new(self.next_id)
    }

    /// Create a shape at `at` and append it on top
    pub fn insert(
        &mut self,
        kind: ShapeKind,
        at: Pos2,
        style: &ShapeStyle,
        surface: &mut dyn RenderSurface,
    ) -> ShapeId {
        let id = self.issue_id();
        self.shapes.push(Shape::create(id, kind, at, style, surface));
        id
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    pub fn contains_id(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    /// Shapes bottom to top
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Take a shape out of the registry, keeping the order of the rest
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|shape| shape.id() == id)?;
        Some(self.shapes.remove(index))
    }

    /// Take every shape out, bottom to top
    pub fn drain(&mut self) -> impl Iterator<Item = Shape> + '_ {
        self.shapes.drain(..)
    }
}
