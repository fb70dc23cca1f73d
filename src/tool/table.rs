use egui::Pos2;

use super::ToolId;
use super::actions::{
    ToolContext, circ_pointer_down, fill_pointer_down, fill_selection, pick_pointer_down,
    pick_pointer_drag, rect_pointer_down,
};
use crate::error::HandlerResult;

pub type PointerHandler = fn(&mut ToolContext<'_>, Pos2) -> HandlerResult;
pub type ApplyHandler = fn(&mut ToolContext<'_>) -> HandlerResult;

/// The three capability slots of one tool state. An empty slot is a no-op.
#[derive(Clone, Copy)]
pub struct ToolHandlers {
    pub pointer_down: Option<PointerHandler>,
    pub pointer_drag: Option<PointerHandler>,
    /// Runs when the tool is selected
    pub apply: Option<ApplyHandler>,
}

impl std::fmt::Debug for ToolHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolHandlers")
            .field("pointer_down", &self.pointer_down.is_some())
            .field("pointer_drag", &self.pointer_drag.is_some())
            .field("apply", &self.apply.is_some())
            .finish()
    }
}

static PICK: ToolHandlers = ToolHandlers {
    pointer_down: Some(pick_pointer_down as PointerHandler),
    pointer_drag: Some(pick_pointer_drag as PointerHandler),
    apply: None,
};

static RECT: ToolHandlers = ToolHandlers {
    pointer_down: Some(rect_pointer_down as PointerHandler),
    pointer_drag: None,
    apply: None,
};

static CIRC: ToolHandlers = ToolHandlers {
    pointer_down: Some(circ_pointer_down as PointerHandler),
    pointer_drag: None,
    apply: None,
};

static FILL: ToolHandlers = ToolHandlers {
    pointer_down: Some(fill_pointer_down as PointerHandler),
    pointer_drag: None,
    apply: Some(fill_selection as ApplyHandler),
};

/// Handler table entry for `tool`
pub fn handlers(tool: ToolId) -> &'static ToolHandlers {
    match tool {
        ToolId::Pick => &PICK,
        ToolId::Rect => &RECT,
        ToolId::Circ => &CIRC,
        ToolId::Fill => &FILL,
    }
}
