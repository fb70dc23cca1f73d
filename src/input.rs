use egui::{Pos2, Rect, Response};

/// Pointer events the editor understands, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button was pressed
    PointerDown(Pos2),
    /// Pointer moved while the primary button is held
    PointerDrag(Pos2),
}

/// One frame's worth of primary-button pointer state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Pointer position relative to the canvas origin
    pub position: Option<Pos2>,
    /// The primary button went down this frame
    pub pressed: bool,
    /// The primary button is held
    pub held: bool,
}

impl PointerSample {
    /// Sample the pointer over the canvas painted into `canvas_rect`
    pub fn from_response(response: &Response, canvas_rect: Rect) -> Self {
        let pressed =
            response.hovered() && response.ctx.input(|input| input.pointer.primary_pressed());
        let position = response
            .interact_pointer_pos()
            .or_else(|| response.hover_pos())
            .map(|pos| (pos - canvas_rect.min).to_pos2());

        Self {
            position,
            pressed,
            held: response.is_pointer_button_down_on(),
        }
    }
}

/// Turns raw pointer samples into [`CanvasEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    dragging: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, sample: PointerSample) -> Option<CanvasEvent> {
        let Some(pos) = sample.position else {
            self.dragging = false;
            self.last_pointer_pos = None;
            return None;
        };

        let event = if sample.pressed {
            self.dragging = true;
            Some(CanvasEvent::PointerDown(pos))
        } else if sample.held && self.dragging && self.last_pointer_pos != Some(pos) {
            Some(CanvasEvent::PointerDrag(pos))
        } else {
            if !sample.held {
                self.dragging = false;
            }
            None
        };

        self.last_pointer_pos = Some(pos);
        event
    }
}
