//! The mediator between pointer input, the active tool and the shapes.
//!
//! The editor owns the [`ShapeRegistry`], the render surface, the active
//! [`ToolId`] and a non-owning selection. Every pointer event is a single
//! table lookup into [`handlers`] followed by a call; tools never change
//! on their own, only through [`Editor::select_tool`].
//!
//! Handlers report "nothing to do" conditions as [`EditorError`]s which the
//! editor absorbs, so clicking empty canvas or dragging with nothing selected
//! is a silent no-op.

use egui::Pos2;
use log::{debug, info, trace, warn};

use crate::config::EditorConfig;
use crate::error::{EditorError, HandlerResult};
use crate::geometry::hit_testing;
use crate::input::CanvasEvent;
use crate::registry::ShapeRegistry;
use crate::renderer::RenderSurface;
use crate::shape::{Shape, ShapeId, ShapeStyle};
use crate::tool::{ToolContext, ToolId, handlers};

#[derive(Debug)]
pub struct Editor<S: RenderSurface> {
    surface: S,
    registry: ShapeRegistry,
    selection: Option<ShapeId>,
    active_tool: ToolId,
    style: ShapeStyle,
}

impl<S: RenderSurface> Editor<S> {
    pub fn new(surface: S, config: &EditorConfig) -> Self {
        Self {
            surface,
            registry: ShapeRegistry::new(),
            selection: None,
            active_tool: config.initial_tool,
            style: config.shape_style(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    pub fn selection(&self) -> Option<ShapeId> {
        self.selection
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection.and_then(|id| self.registry.get(id))
    }

    pub fn active_tool(&self) -> ToolId {
        self.active_tool
    }

    /// Style for shapes created from now on; existing shapes keep theirs
    pub fn set_style(&mut self, style: ShapeStyle) {
        self.style = style;
    }

    pub fn find_topmost(&self, point: Pos2) -> Option<ShapeId> {
        hit_testing::find_topmost(&self.registry, point)
    }

    fn context(&mut self) -> ToolContext<'_> {
        ToolContext {
            registry: &mut self.registry,
            selection: &mut self.selection,
            surface: &mut self.surface,
            style: &self.style,
        }
    }

    fn absorb(&self, action: &str, result: HandlerResult) {
        match result {
            Ok(()) => {}
            Err(err) if err.is_absorbed() => {
                trace!("{} ignored in {} tool: {}", action, self.active_tool, err);
            }
            Err(err) => warn!("{} failed in {} tool: {}", action, self.active_tool, err),
        }
    }

    pub fn on_pointer_down(&mut self, point: Pos2) {
        if let Some(handler) = handlers(self.active_tool).pointer_down {
            let result = handler(&mut self.context(), point);
            self.absorb("pointer down", result);
        }
    }

    pub fn on_pointer_drag(&mut self, point: Pos2) {
        if let Some(handler) = handlers(self.active_tool).pointer_drag {
            let result = handler(&mut self.context(), point);
            self.absorb("pointer drag", result);
        }
    }

    pub fn dispatch(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::PointerDown(point) => self.on_pointer_down(point),
            CanvasEvent::PointerDrag(point) => self.on_pointer_drag(point),
        }
    }

    /// Switch tools and immediately run the new tool's apply handler
    pub fn select_tool(&mut self, tool: ToolId) {
        if tool != self.active_tool {
            info!("Tool changed: {} -> {}", self.active_tool, tool);
        }
        self.active_tool = tool;

        if let Some(apply) = handlers(tool).apply {
            let result = apply(&mut self.context());
            self.absorb("apply", result);
        }
    }

    /// Like [`Editor::select_tool`], rejecting unknown names before anything changes
    pub fn select_tool_by_name(&mut self, name: &str) -> Result<(), EditorError> {
        let tool: ToolId = name.parse()?;
        self.select_tool(tool);
        Ok(())
    }

    /// Destroy the selected shape, if any
    pub fn delete_selection(&mut self) -> Option<ShapeId> {
        let id = self.selection.take()?;
        let shape = self.registry.remove(id)?;
        shape.destroy(&mut self.surface);
        debug!("Deleted {}", id);
        Some(id)
    }

    /// Destroy every shape and drop the selection
    pub fn clear(&mut self) {
        let count = self.registry.len();
        for shape in self.registry.drain() {
            shape.destroy(&mut self.surface);
        }
        self.selection = None;
        info!("Cleared {} shapes", count);
    }
}
