#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([520.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Buku Kosa Kata",
        native_options,
        Box::new(|cc| Ok(Box::new(word_notebook::NotebookApp::new(cc)))),
    )
}

// The web build only ships the library; there is no browser entry point.
#[cfg(target_arch = "wasm32")]
fn main() {}
