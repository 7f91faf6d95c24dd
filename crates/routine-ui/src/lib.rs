#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod guard;
pub mod navigation;
pub mod pages;
pub mod routes;
pub mod storage;
pub mod store;

pub use app::{shell, App};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    leptos::mount::hydrate_body(App);
}
