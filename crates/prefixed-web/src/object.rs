//! Arbitrary JavaScript objects as probe targets.

use js_sys::{Function, Object, Reflect};
use prefixed::{Capability, HostObject};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::WebError;

/// A JavaScript object probed member by member.
#[derive(Clone, Debug)]
pub struct WebObject(Object);

impl WebObject {
    pub fn new(object: Object) -> Self {
        Self(object)
    }

    /// The global `window`.
    pub fn window() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        Ok(Self(window.into()))
    }

    pub fn as_object(&self) -> &Object {
        &self.0
    }

    pub fn into_object(self) -> Object {
        self.0
    }
}

impl From<Object> for WebObject {
    fn from(object: Object) -> Self {
        Self(object)
    }
}

impl HostObject for WebObject {
    type Value = JsValue;
    type Function = Function;
    type Bound = Function;

    fn classify(&self, name: &str) -> Capability<Function, JsValue> {
        let value = match Reflect::get(&self.0, &JsValue::from_str(name)) {
            Ok(value) => value,
            Err(error) => {
                log::warn!("Reading `{name}` threw: {error:?}");
                return Capability::Absent;
            }
        };
        if value.is_undefined() {
            return Capability::Absent;
        }
        // Some engines report native constructors as functions without
        // giving them `bind` (e.g. `webkitAudioContext`).
        let bindable = value.is_function()
            && Reflect::has(&value, &JsValue::from_str("bind")).unwrap_or(false);
        if bindable {
            Capability::Callable(value.unchecked_into())
        } else {
            Capability::Value(value)
        }
    }

    fn bind(function: Function, receiver: &Self) -> Function {
        function.bind(&receiver.0)
    }
}
