//! Probe style object backed by a detached element.

use prefixed::StyleProbe;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, HtmlElement};

use crate::error::WebError;

/// Tag of the throwaway element whose style is probed. Never attached to
/// the document.
pub const PROBE_TAG: &str = "prefixed-probe";

/// Style declaration of a detached element.
#[derive(Clone, Debug)]
pub struct WebStyle {
    style: CssStyleDeclaration,
}

impl WebStyle {
    /// Creates the probe element in the current window's document.
    pub fn new() -> Result<Self, WebError> {
        let document = web_sys::window()
            .ok_or(WebError::NoWindow)?
            .document()
            .ok_or(WebError::NoDocument)?;
        Self::from_document(&document)
    }

    pub fn from_document(document: &Document) -> Result<Self, WebError> {
        let element = document
            .create_element(PROBE_TAG)
            .map_err(|error| WebError::ElementCreation(format!("{error:?}")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WebError::NotHtmlElement)?;
        Ok(Self::from_declaration(element.style()))
    }

    /// Probes an existing declaration, e.g. `document.body.style`.
    pub fn from_declaration(style: CssStyleDeclaration) -> Self {
        Self { style }
    }

    pub fn declaration(&self) -> &CssStyleDeclaration {
        &self.style
    }
}

impl StyleProbe for WebStyle {
    fn has_property(&self, name: &str) -> bool {
        match js_sys::Reflect::get(&self.style, &JsValue::from_str(name)) {
            Ok(value) => !value.is_undefined(),
            Err(error) => {
                log::warn!("Reading style property `{name}` threw: {error:?}");
                false
            }
        }
    }
}
