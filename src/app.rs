use crate::canvas::Canvas;
use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::input::{InputHandler, PointerSample};
use crate::panels::{central_panel, status_bar, tools_panel};
use crate::tool::ToolId;

/// Desktop shell around the [`Editor`]: toolbar, status bar and canvas.
///
/// Only the [`EditorConfig`] survives a restart; the drawing does not.
pub struct ShapeEditorApp {
    config: EditorConfig,
    editor: Editor<Canvas>,
    input: InputHandler,
}

impl Default for ShapeEditorApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl ShapeEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config: EditorConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Starting with {} tool", config.initial_tool);
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            editor: Editor::new(Canvas::new(), &config),
            input: InputHandler::new(),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EditorConfig) {
        self.editor.set_style(config.shape_style());
        self.config = config;
    }

    pub fn editor(&self) -> &Editor<Canvas> {
        &self.editor
    }

    pub fn select_tool(&mut self, tool: ToolId) {
        self.editor.select_tool(tool);
    }

    pub fn clear(&mut self) {
        self.editor.clear();
    }

    pub fn handle_pointer(&mut self, sample: PointerSample) {
        if let Some(event) = self.input.process(sample) {
            self.editor.dispatch(event);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        for tool in ToolId::ALL {
            if ctx.input(|input| input.key_pressed(tool.shortcut())) {
                self.select_tool(tool);
            }
        }

        let delete = ctx.input(|input| {
            input.key_pressed(egui::Key::Delete) || input.key_pressed(egui::Key::Backspace)
        });
        if delete {
            self.editor.delete_selection();
        }
    }
}

impl eframe::App for ShapeEditorApp {
    /// Called by the frame work to save settings before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let config = EditorConfig {
            initial_tool: self.editor.active_tool(),
            ..self.config.clone()
        };
        eframe::set_value(storage, eframe::APP_KEY, &config);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        status_bar(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2};

    fn press(x: f32, y: f32) -> PointerSample {
        PointerSample {
            position: Some(pos2(x, y)),
            pressed: true,
            held: true,
        }
    }

    fn drag(x: f32, y: f32) -> PointerSample {
        PointerSample {
            position: Some(pos2(x, y)),
            pressed: false,
            held: true,
        }
    }

    #[test]
    fn test_pointer_samples_reach_the_editor() {
        let mut app = ShapeEditorApp::default();
        app.select_tool(ToolId::Rect);
        app.handle_pointer(press(40.0, 40.0));
        app.select_tool(ToolId::Pick);
        app.handle_pointer(press(40.0, 40.0));
        app.handle_pointer(drag(60.0, 70.0));

        let shape = app.editor().selected_shape().unwrap();
        assert_eq!(shape.center(), pos2(60.0, 70.0));
    }

    #[test]
    fn test_new_config_styles_new_shapes() {
        let mut app = ShapeEditorApp::default();
        app.set_config(EditorConfig {
            fill_color: Color32::GREEN,
            ..Default::default()
        });
        app.select_tool(ToolId::Circ);
        app.handle_pointer(press(40.0, 40.0));
        app.select_tool(ToolId::Fill);

        let editor = app.editor();
        let body = editor.selected_shape().unwrap().body_primitive();
        assert_eq!(
            editor.surface().primitive(body).unwrap().style.fill,
            Color32::GREEN
        );
    }

    #[test]
    fn test_clear_resets_drawing() {
        let mut app = ShapeEditorApp::default();
        app.select_tool(ToolId::Rect);
        app.handle_pointer(press(40.0, 40.0));
        app.clear();
        assert!(app.editor().registry().is_empty());
    }
}
