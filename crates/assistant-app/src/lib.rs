//! Clinical Assistant App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It builds the reminder store and dialogue dispatcher and hands them to the egui UI.
//!
//! The host page must provide `<canvas id="assistant_canvas">` and load the
//! wasm-bindgen output, which runs `main` on instantiation. It may also embed
//! `<script type="application/json" id="assistant_config">` with any subset of
//! `AssistantConfig` fields; an unparseable config falls back to the defaults.

mod app;

use std::str::FromStr;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use assistant_types::{config::AssistantConfig, AssistantError, Result};

const CANVAS_ID: &str = "assistant_canvas";
const CONFIG_ELEMENT_ID: &str = "assistant_config";

/// WASM entry point — runs when the host page instantiates the module
#[wasm_bindgen(start)]
pub async fn main() {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (AssistantConfig::default(), Some(e)),
    };

    let level = log::Level::from_str(&config.log_level).unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Clinical assistant starting...");
    if let Some(e) = config_error {
        log::warn!("Ignoring page config ({}), using defaults", e);
    }

    let canvas = match find_canvas() {
        Ok(canvas) => canvas,
        Err(e) => {
            log::error!("Cannot start UI: {}", e);
            return;
        }
    };

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::AssistantApp::new(cc, config)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });
}

fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .ok_or_else(|| AssistantError::JsInterop("no window".to_string()))?
        .document()
        .ok_or_else(|| AssistantError::JsInterop("no document".to_string()))
}

/// Read the optional JSON config embedded in the page
fn load_config() -> Result<AssistantConfig> {
    match document()?.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => AssistantConfig::from_json(&element.text_content().unwrap_or_default()),
        None => Ok(AssistantConfig::default()),
    }
}

fn find_canvas() -> Result<web_sys::HtmlCanvasElement> {
    document()?
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| {
            AssistantError::JsInterop(format!("no canvas element with id '{}'", CANVAS_ID))
        })?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| AssistantError::JsInterop(format!("element '{}' is not a canvas", CANVAS_ID)))
}
