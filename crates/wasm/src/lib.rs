//! Browser build of the Gaming Lounge onboarding client
//!
//! Same shared UI as the desktop build; network calls go through the browser
//! fetch API instead of worker threads.

#![cfg(target_arch = "wasm32")]

mod backend;
mod storage;

use std::sync::Arc;

use lounge_core::{EventLog, LoungeApp, TracingLog};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

struct WebApp {
    app: LoungeApp,
}

impl WebApp {
    fn new() -> Self {
        let log: Arc<dyn EventLog> = Arc::new(TracingLog);
        Self {
            app: LoungeApp::new(Box::new(backend::FetchBackend::from_location()), log),
        }
    }
}

impl eframe::App for WebApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.update_ui(ctx);
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    tracing_wasm::set_as_global_default();

    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id("canvas")
        .expect("No canvas element")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Canvas is not HtmlCanvasElement");

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    let mut fonts = egui::FontDefinitions::default();
                    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
                    cc.egui_ctx.set_fonts(fonts);
                    Ok(Box::new(WebApp::new()))
                }),
            )
            .await
            .expect("Failed to start eframe");
    });
}
