use egui::Pos2;

use crate::registry::ShapeRegistry;
use crate::shape::ShapeId;

/// Topmost shape whose hit box contains `point`.
///
/// Scans from the top of the z-order down so a later shape occludes any
/// earlier one it overlaps.
pub fn find_topmost(registry: &ShapeRegistry, point: Pos2) -> Option<ShapeId> {
    registry
        .iter()
        .rev()
        .find(|shape| shape.contains(point))
        .map(|shape| shape.id())
}
