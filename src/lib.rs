//! Shaded sphere from golden-angle spiral samples
//!
//! Points are spread over a unit sphere with a Fibonacci spiral, depth-sorted
//! once, and every frame the front hemisphere is drawn back to front as gray
//! discs shaded by their angular distance from a fixed light.
//!
//! - `core`: sampling, shading, scene and the `Canvas`-based renderer
//! - `app`: egui/eframe viewer (features `native` / `wasm`)

pub mod core;

#[cfg(any(feature = "native", feature = "wasm"))]
pub mod app;
#[cfg(any(feature = "native", feature = "wasm"))]
mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::SphereApp;
    use crate::core::RenderConfig;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        // Initialize tracing for browser console
        tracing_wasm::set_as_global_default();

        let web_options = eframe::WebOptions::default();

        wasm_bindgen_futures::spawn_local(async {
            let canvas = web_sys::window()
                .expect("no window")
                .document()
                .expect("no document")
                .get_element_by_id("canvas")
                .expect("no canvas element")
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .expect("not a canvas element");

            eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(|cc| Ok(Box::new(SphereApp::new(cc, RenderConfig::default())?))),
                )
                .await
                .expect("Failed to start eframe");
        });
    }
}
