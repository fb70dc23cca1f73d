use thiserror::Error;

use crate::shape::ShapeId;

/// Errors produced while dispatching editor events.
///
/// Most of these never reach the user: the mediator absorbs
/// [`EditorError::NoTargetShape`] and [`EditorError::NoActiveSelection`]
/// as no-ops. Only caller mistakes such as an unknown tool name and bad
/// configuration are returned from the public API.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A pointer event landed on empty canvas
    #[error("no shape under the pointer")]
    NoTargetShape,

    /// A drag or apply was requested with nothing selected
    #[error("no shape is selected")]
    NoActiveSelection,

    /// A selection id no longer resolves to a live shape
    #[error("selection {0} does not name a live shape")]
    StaleSelection(ShapeId),

    /// `select_tool` was called with a name outside pick/rect/circ/fill
    #[error("unknown tool id '{0}', expected one of pick, rect, circ, fill")]
    InvalidToolId(String),

    /// The editor configuration could not be parsed
    #[error("invalid editor configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl EditorError {
    /// True for conditions the editor silently ignores.
    pub fn is_absorbed(&self) -> bool {
        matches!(
            self,
            Self::NoTargetShape | Self::NoActiveSelection | Self::StaleSelection(_)
        )
    }
}

/// Result type returned by tool handlers
pub type HandlerResult = Result<(), EditorError>;
