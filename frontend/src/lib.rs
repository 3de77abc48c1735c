use app::*;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn run() {
    console_error_panic_hook::set_once();

    let config = site_config();
    let level = config.log_level.parse().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
