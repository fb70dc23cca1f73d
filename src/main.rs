#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([350.0, 250.0])
            .with_min_inner_size([300.0, 200.0])
            .with_title("Shape Mediator"),
        ..Default::default()
    };
    eframe::run_native(
        "Shape Mediator",
        native_options,
        Box::new(|cc| Ok(Box::new(shape_mediator::ShapeEditorApp::new(cc)))),
    )
}

// The editor only ships as a native app.
#[cfg(target_arch = "wasm32")]
fn main() {}
