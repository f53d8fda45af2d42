#![warn(clippy::pedantic)]
#![allow(
    clippy::len_without_is_empty,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

pub mod kernel;
pub mod numerics;
pub mod ui;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use eframe::epaint::Vec2;
    use eframe::NativeOptions;

    // 8:5, plus room for the readout panel.
    let native_options = NativeOptions {
        initial_window_size: Some(Vec2 { x: 1280., y: 650. }),
        ..NativeOptions::default()
    };
    tracing_subscriber::fmt::init();
    eframe::run_native(
        "Asymmetric Gaussian Kernel",
        native_options,
        Box::new(|cc| Box::new(ui::KernelViewer::new(cc))),
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        eframe::start_web(
            "the_canvas_id",
            web_options,
            Box::new(|cc| Box::new(ui::KernelViewer::new(cc))),
        )
        .await
        .expect("failed to start eframe");
    });
}
