use crate::ShapeEditorApp;
use crate::input::PointerSample;

pub fn central_panel(app: &mut ShapeEditorApp, ctx: &egui::Context) {
    let frame = egui::Frame::none().fill(app.config().background);

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Handle input
        app.handle_pointer(PointerSample::from_response(&response, canvas_rect));

        // Render the canvas
        app.editor()
            .surface()
            .paint(&painter, canvas_rect.min.to_vec2());
    });
}
