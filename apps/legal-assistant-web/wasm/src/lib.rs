//! WASM front-end for the legal assistant
//!
//! Wires the page's three forms (document generation, legal search, chat)
//! to the backend. All workflow logic lives in `legal-client-core`; this
//! crate only supplies the `fetch` transport, the DOM view and the event
//! bindings.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { apiConfig, copyToClipboard } from './pkg/legal_assistant_wasm.js';
//!
//! await init();               // binds the forms once the DOM is ready
//! console.log(apiConfig());   // { BASE_URL, ENDPOINTS, ENVIRONMENT }
//! copyButton.onclick = () => copyToClipboard('generated-document');
//! ```

pub mod bootstrap;
pub mod dom;
pub mod fetch;

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub use bootstrap::{mount, WebController};
pub use dom::DomView;
pub use fetch::FetchTransport;

/// Initialize the WASM module and bind the page once the DOM is ready
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move |_event: web_sys::Event| mount_or_log());
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        mount_or_log();
    }
    Ok(())
}

fn mount_or_log() {
    if let Err(e) = mount() {
        web_sys::console::error_2(&"Legal assistant failed to start".into(), &e);
    }
}

/// Configuration resolved for the current page host
#[wasm_bindgen(js_name = apiConfig)]
pub fn api_config() -> Result<JsValue, JsValue> {
    let host = web_sys::window()
        .ok_or("No window")?
        .location()
        .hostname()?;
    let surface = legal_client_core::resolve(&host).surface();

    serde_wasm_bindgen::to_value(&surface)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Copy the text content of an element to the clipboard and tell the user
#[wasm_bindgen(js_name = copyToClipboard)]
pub async fn copy_to_clipboard(element_id: String) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };

    let message = match write_clipboard(&window, &element_id).await {
        Ok(()) => "Text copied to clipboard!",
        Err(e) => {
            web_sys::console::error_2(&"Copy error:".into(), &e);
            "Copy error"
        }
    };
    if let Err(e) = window.alert_with_message(message) {
        web_sys::console::error_2(&"Alert failed".into(), &e);
    }
}

async fn write_clipboard(window: &web_sys::Window, element_id: &str) -> Result<(), JsValue> {
    let text = window
        .document()
        .and_then(|d| d.get_element_by_id(element_id))
        .and_then(|e| e.text_content())
        .unwrap_or_default();

    let clipboard = Reflect::get(&window.navigator(), &"clipboard".into())?;
    let write_text: Function = Reflect::get(&clipboard, &"writeText".into())?.dyn_into()?;
    let promise: Promise = write_text.call1(&clipboard, &text.into())?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
