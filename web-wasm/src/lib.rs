//! Coffee Leaf Nutrition Web App (Leptos + WASM)

mod app;
mod components;
mod router;
pub mod api;
pub mod preview;
pub mod reactive;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Coffee Leaf Nutrition Prediction System initialized");
    leptos::mount::mount_to_body(app::App);
}
