use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::ShapeEditorApp;
use crate::components::ToolButton;
use crate::tool::ToolId;

pub fn tools_panel(app: &mut ShapeEditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let active_tool = app.editor().active_tool();

            for tool in ToolId::ALL {
                if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                    log::info!("Tool selected from UI: {}", tool);
                    app.select_tool(tool);
                }
            }

            ui.add_space(20.0);
            if ui.button("Clr").on_hover_text("Remove every shape").clicked() {
                app.clear();
            }

            ui.menu_button("Settings", |ui| settings_menu(app, ui));
        });
    });
}

pub fn status_bar(app: &ShapeEditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let editor = app.editor();
            ui.label(format!("Tool: {}", editor.active_tool().label()));
            ui.separator();
            ui.label(format!("Shapes: {}", editor.registry().len()));
            ui.separator();
            match editor.selected_shape() {
                Some(shape) => ui.label(format!(
                    "Selected: {} {} at ({:.0}, {:.0})",
                    shape.kind().name(),
                    shape.id(),
                    shape.center().x,
                    shape.center().y
                )),
                None => ui.label("Nothing selected"),
            };
        });
    });
}

fn settings_menu(app: &mut ShapeEditorApp, ui: &mut egui::Ui) {
    let mut config = app.config().clone();

    egui::Grid::new("settings_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Outline");
            color_edit_button_srgba(ui, &mut config.outline_color, Alpha::Opaque);
            ui.end_row();

            ui.label("Outline width");
            ui.add(egui::Slider::new(&mut config.outline_width, 0.5..=5.0));
            ui.end_row();

            ui.label("Fill");
            color_edit_button_srgba(ui, &mut config.fill_color, Alpha::Opaque);
            ui.end_row();

            ui.label("Handles");
            color_edit_button_srgba(ui, &mut config.handle_color, Alpha::Opaque);
            ui.end_row();

            ui.label("Background");
            color_edit_button_srgba(ui, &mut config.background, Alpha::Opaque);
            ui.end_row();
        });

    ui.label("Changes apply to new shapes.");

    if config != *app.config() {
        app.set_config(config);
    }
}
