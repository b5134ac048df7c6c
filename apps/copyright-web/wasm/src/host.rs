//! Browser document host
//!
//! Implements the core `DomHost` trait over `web_sys`, so `Copyright::render`
//! can drive a live page.

use copyright_core::{CopyrightError, DomHost};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Wraps the page's `document`
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    /// Grab `window.document`
    ///
    /// # Errors
    /// Returns a `Dom` error outside a browser window
    pub fn from_window() -> Result<Self, CopyrightError> {
        let window = web_sys::window()
            .ok_or_else(|| CopyrightError::Dom("No window object available".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| CopyrightError::Dom("No document object available".to_string()))?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Best-effort message from a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

fn dom_error(value: JsValue) -> CopyrightError {
    CopyrightError::Dom(js_error_message(&value))
}

impl DomHost for WebDocument {
    type Element = Element;

    fn query_selector(&self, selector: &str) -> Result<Option<Element>, CopyrightError> {
        self.document.query_selector(selector).map_err(dom_error)
    }

    fn create_element(&self, tag: &str) -> Result<Element, CopyrightError> {
        self.document.create_element(tag).map_err(dom_error)
    }

    fn set_text_content(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_class_name(&self, element: &Element, class_name: &str) {
        element.set_class_name(class_name);
    }

    fn set_style_property(
        &self,
        element: &Element,
        property: &str,
        value: &str,
    ) -> Result<(), CopyrightError> {
        let html_element = element.dyn_ref::<HtmlElement>().ok_or_else(|| {
            CopyrightError::Dom(format!(
                "<{}> does not support inline styles",
                element.tag_name().to_lowercase()
            ))
        })?;
        html_element
            .style()
            .set_property(property, value)
            .map_err(dom_error)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), CopyrightError> {
        parent.append_child(child).map(|_| ()).map_err(dom_error)
    }
}
