#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod registry;
pub mod renderer;
pub mod shape;
pub mod tool;

pub use app::ShapeEditorApp;
pub use canvas::Canvas;
pub use config::EditorConfig;
pub use editor::Editor;
pub use error::EditorError;
pub use geometry::hit_testing::find_topmost;
pub use input::{CanvasEvent, InputHandler, PointerSample};
pub use registry::ShapeRegistry;
pub use renderer::{DrawStyle, PrimitiveHandle, RenderSurface};
pub use shape::{Shape, ShapeId, ShapeKind, ShapeStyle};
pub use tool::ToolId;
