mod api;
mod app;
mod components;
mod types;

use wasm_bindgen::prelude::*;

use app::App;

#[wasm_bindgen(start)]
pub fn run_app() {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("root"));

    match root {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => yew::Renderer::<App>::new().render(),
    };
}
