//! Browser host for `prefixed`.
//!
//! [`init`] creates the probe element once; keep the returned detector for
//! the lifetime of the page and pass globals as [`WebObject`]s:
//!
//! ```no_run
//! use prefixed::Binding;
//! use prefixed_web::{WebObject, init};
//!
//! let detector = init()?;
//! let transform = detector.resolve_prefixed_style_name("transform")?;
//! let raf = detector.resolve_prefixed_dom_property(
//!     "requestAnimationFrame",
//!     &WebObject::window()?,
//!     Binding::Auto,
//! )?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod object;
pub mod style;

use js_sys::Object;
use prefixed::{Binding, Detection, Detector, Resolved};
use wasm_bindgen::prelude::*;

pub use error::WebError;
pub use object::WebObject;
pub use style::{PROBE_TAG, WebStyle};

pub type BrowserDetector = Detector<WebStyle>;

/// Creates the probe element in the current document.
pub fn init() -> Result<BrowserDetector, WebError> {
    let style = WebStyle::new()?;
    log::debug!("Created `{PROBE_TAG}` probe element");
    Ok(Detector::new(style))
}

/// JavaScript-facing detector with the classic `prefixed(prop, obj, elem)`
/// calling convention.
#[wasm_bindgen(js_name = Prefixed)]
pub struct JsDetector {
    detector: BrowserDetector,
}

#[wasm_bindgen(js_class = Prefixed)]
impl JsDetector {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<JsDetector, JsError> {
        Ok(Self { detector: init()? })
    }

    /// * `prefixed("transform")` → `"WebkitTransform"` or `false`
    /// * `prefixed("requestAnimationFrame", window)` → function bound to
    ///   `window`, the raw value, or `false`
    /// * `prefixed("requestAnimationFrame", window, elem)` → bound to `elem`
    /// * `prefixed("requestAnimationFrame", window, false)` → the spelling
    /// * `prefixed("transform", "any string")` → `true` or `false`
    ///
    /// Other truthy primitives for `obj` (numbers, `true`) are not probed
    /// through their prototypes; they resolve the style name as if `obj`
    /// were omitted.
    pub fn prefixed(&self, prop: &str, obj: JsValue, elem: JsValue) -> Result<JsValue, JsError> {
        if obj.is_truthy() && obj.is_string() {
            return Ok(JsValue::from_bool(self.detector.supports_style(prop)?));
        }
        let target = (obj.is_object() || obj.is_function())
            .then(|| WebObject::new(obj.unchecked_into()));
        let receiver = elem
            .is_truthy()
            .then(|| WebObject::new(elem.unchecked_ref::<Object>().clone()));
        let binding = match (&receiver, elem.as_bool()) {
            (_, Some(false)) => Binding::NameOnly,
            (Some(receiver), _) => Binding::To(receiver),
            (None, _) => Binding::Auto,
        };

        let detection = self.detector.detect(prop, target.as_ref(), binding)?;
        Ok(match detection {
            Detection::StyleName(name) | Detection::Property(Resolved::Name(name)) => {
                JsValue::from_str(&name)
            }
            Detection::Property(Resolved::Bound(function)) => function.into(),
            Detection::Property(Resolved::Value(value)) => value,
            Detection::NotFound => JsValue::FALSE,
        })
    }

    /// `"box-sizing"` → `"-moz-box-sizing"`, or `false`.
    #[wasm_bindgen(js_name = cssPrefixed)]
    pub fn css_prefixed(&self, prop: &str) -> Result<JsValue, JsError> {
        Ok(match self.detector.css_prefixed(prop)? {
            Some(name) => JsValue::from_str(&name),
            None => JsValue::FALSE,
        })
    }
}
