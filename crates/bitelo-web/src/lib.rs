//! Leptos views for the Bitelo header and date heading, each mounted on
//! its own into a host element.

pub mod app;
pub mod components;
pub mod entries;
pub mod logging;
pub mod mount;

use bitelo_core::{BiteloConfig, BiteloError, SystemClock};
use wasm_bindgen::prelude::*;

fn load_config(config_json: Option<&str>) -> bitelo_core::Result<BiteloConfig> {
    match config_json {
        Some(json) => BiteloConfig::from_json(json),
        None => Ok(BiteloConfig::default()),
    }
}

fn to_js_error(e: BiteloError) -> JsError {
    JsError::new(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!("bitelo-web {} loaded", env!("CARGO_PKG_VERSION"));
}

/// Mount the header entry. `config_json` overrides the built-in config.
#[wasm_bindgen]
pub fn mount_header_entry(config_json: Option<String>) -> Result<(), JsError> {
    let config = load_config(config_json.as_deref()).map_err(to_js_error)?;
    entries::header::mount(&config.header).map_err(to_js_error)
}

/// Mount the date heading entry using the host clock.
#[wasm_bindgen]
pub fn mount_heading_entry(config_json: Option<String>) -> Result<(), JsError> {
    let config = load_config(config_json.as_deref()).map_err(to_js_error)?;
    entries::heading::mount(&config.heading, SystemClock).map_err(to_js_error)
}
