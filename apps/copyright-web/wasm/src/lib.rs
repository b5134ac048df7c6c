//! WASM bindings for copyright notices
//!
//! Exposes a `Copyright` class to JavaScript. Options are plain objects with
//! the same camelCase keys as the Rust types.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { Copyright } from './pkg/copyright_wasm.js';
//!
//! await init();
//!
//! const notice = new Copyright({ owner: "ACME Corp", startYear: 2020 });
//! notice.getText();                                   // "© 2020-2026 ACME Corp"
//! notice.toHTML({ tag: "footer", style: { fontSize: "12px" } });
//! notice.setOptions({ format: "legal" });
//! notice.render("#footer");
//! ```

pub mod host;

use copyright_core::{
    Copyright, CopyrightError, CopyrightOptions, OptionsPatch, RenderOptions, RenderTarget,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

pub use host::{js_error_message, WebDocument};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Surface core errors as JS `Error` objects carrying the same message
fn to_js_error(err: CopyrightError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn parse_render_options(value: JsValue) -> Result<RenderOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(RenderOptions::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}

/// Copyright notice bound to the browser clock
#[wasm_bindgen(js_name = Copyright)]
pub struct WasmCopyright {
    inner: Copyright,
}

#[wasm_bindgen(js_class = Copyright)]
impl WasmCopyright {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WasmCopyright, JsValue> {
        let options: CopyrightOptions = serde_wasm_bindgen::from_value(options)?;
        let inner = Copyright::new(options).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Factory form of the constructor
    pub fn create(options: JsValue) -> Result<WasmCopyright, JsValue> {
        Self::new(options)
    }

    /// Merge a partial options object; throws and keeps the old options if
    /// the result is invalid. A key set to `null` or `undefined` clears it.
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, patch: JsValue) -> Result<(), JsValue> {
        let patch: OptionsPatch = serde_wasm_bindgen::from_value(patch)?;
        self.inner.set_options(&patch).map_err(to_js_error)?;
        Ok(())
    }

    /// Current options as a plain object
    #[wasm_bindgen(js_name = getOptions)]
    pub fn get_options(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.options())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = getText)]
    pub fn get_text(&self) -> String {
        self.inner.get_text()
    }

    #[wasm_bindgen(js_name = toHTML)]
    pub fn to_html(&self, render_options: JsValue) -> Result<String, JsValue> {
        let render = parse_render_options(render_options)?;
        Ok(self.inner.to_html(&render))
    }

    /// Append the notice to `target` (selector string or Element)
    ///
    /// # Returns
    /// The created element
    pub fn render(&self, target: JsValue, render_options: JsValue) -> Result<Element, JsValue> {
        let render = parse_render_options(render_options)?;
        let host = WebDocument::from_window().map_err(to_js_error)?;

        let selector = target.as_string();
        let target = match selector.as_deref() {
            Some(selector) => RenderTarget::Selector(selector),
            None => RenderTarget::Element(target.dyn_into::<Element>().map_err(|_| {
                JsValue::from(js_sys::Error::new(
                    "Render target must be a selector string or an Element",
                ))
            })?),
        };

        self.inner
            .render(&host, target, &render)
            .map_err(to_js_error)
    }
}
