use egui::Pos2;
use log::debug;

use crate::error::{EditorError, HandlerResult};
use crate::geometry::hit_testing::find_topmost;
use crate::registry::ShapeRegistry;
use crate::renderer::RenderSurface;
use crate::shape::{ShapeId, ShapeKind, ShapeStyle};

/// Everything a tool handler may touch, borrowed from the editor for one event
pub struct ToolContext<'a> {
    pub registry: &'a mut ShapeRegistry,
    pub selection: &'a mut Option<ShapeId>,
    pub surface: &'a mut dyn RenderSurface,
    pub style: &'a ShapeStyle,
}

impl ToolContext<'_> {
    /// Make `target` the only selected shape, or clear the selection
    fn select_exclusive(&mut self, target: Option<ShapeId>) {
        for shape in self.registry.iter_mut() {
            let selected = Some(shape.id()) == target;
            if shape.is_selected() != selected {
                shape.set_selected(selected, &mut *self.surface);
            }
        }
        *self.selection = target;
    }

    /// Select the topmost shape under `point`, deselecting all others
    fn select_at(&mut self, point: Pos2) -> Option<ShapeId> {
        let hit = find_topmost(self.registry, point);
        self.select_exclusive(hit);
        hit
    }

    fn create_at(&mut self, kind: ShapeKind, point: Pos2) -> HandlerResult {
        let id = self
            .registry
            .insert(kind, point, self.style, &mut *self.surface);
        debug!("Created {} {} at {:?}", kind.name(), id, point);
        self.select_at(point);
        Ok(())
    }
}

pub(super) fn pick_pointer_down(ctx: &mut ToolContext<'_>, point: Pos2) -> HandlerResult {
    match ctx.select_at(point) {
        Some(id) => {
            debug!("Picked {}", id);
            Ok(())
        }
        None => Err(EditorError::NoTargetShape),
    }
}

pub(super) fn pick_pointer_drag(ctx: &mut ToolContext<'_>, point: Pos2) -> HandlerResult {
    let id = ctx.selection.ok_or(EditorError::NoActiveSelection)?;
    let shape = ctx
        .registry
        .get_mut(id)
        .ok_or(EditorError::StaleSelection(id))?;
    shape.move_to(point, &mut *ctx.surface);
    Ok(())
}

pub(super) fn rect_pointer_down(ctx: &mut ToolContext<'_>, point: Pos2) -> HandlerResult {
    ctx.create_at(ShapeKind::Rectangle, point)
}

pub(super) fn circ_pointer_down(ctx: &mut ToolContext<'_>, point: Pos2) -> HandlerResult {
    ctx.create_at(ShapeKind::Circle, point)
}

pub(super) fn fill_pointer_down(ctx: &mut ToolContext<'_>, point: Pos2) -> HandlerResult {
    // A miss leaves the current selection alone
    let id = find_topmost(ctx.registry, point).ok_or(EditorError::NoTargetShape)?;
    ctx.select_exclusive(Some(id));
    fill_selection(ctx)
}

pub(super) fn fill_selection(ctx: &mut ToolContext<'_>) -> HandlerResult {
    let id = ctx.selection.ok_or(EditorError::NoActiveSelection)?;
    let shape = ctx
        .registry
        .get_mut(id)
        .ok_or(EditorError::StaleSelection(id))?;
    shape.fill(&mut *ctx.surface);
    debug!("Filled {}", id);
    Ok(())
}
