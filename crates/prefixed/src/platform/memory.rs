//! In-memory host: style and global objects built in Rust or loaded from a
//! recorded browser snapshot.
//!
//! Used by the test suites and by non-browser hosts that resolve names
//! against a captured environment.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value as Json;

use crate::host::{Capability, HostObject, StyleProbe};

// --- Style ---

/// Property names a style declaration answers for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "StyleSnapshot"))]
pub struct MemoryStyle {
    properties: BTreeSet<String>,
}

/// Accepted snapshot shapes: `["transform", ...]` or
/// `{ "properties": ["transform", ...] }`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum StyleSnapshot {
    List(Vec<String>),
    Object { properties: Vec<String> },
}

#[cfg(feature = "serde")]
impl From<StyleSnapshot> for MemoryStyle {
    fn from(snapshot: StyleSnapshot) -> Self {
        match snapshot {
            StyleSnapshot::List(properties) | StyleSnapshot::Object { properties } => {
                properties.into_iter().collect()
            }
        }
    }
}

impl MemoryStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.properties.insert(name.into());
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for MemoryStyle {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl StyleProbe for MemoryStyle {
    fn has_property(&self, name: &str) -> bool {
        self.properties.contains(name)
    }
}

// --- Functions ---

/// Receiver and arguments of a native function call.
pub struct CallContext<'a> {
    this: Option<&'a MemoryObject>,
    args: &'a [Json],
}

impl<'a> CallContext<'a> {
    /// `None` when the function was called without a receiver.
    pub fn this(&self) -> Option<&'a MemoryObject> {
        self.this
    }

    pub fn args(&self) -> &'a [Json] {
        self.args
    }
}

/// A function implemented in Rust, callable with or without a receiver.
#[derive(Clone)]
pub struct NativeFunction(Rc<dyn Fn(&CallContext<'_>) -> Json>);

impl NativeFunction {
    pub fn new(f: impl Fn(&CallContext<'_>) -> Json + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Calls the function with an explicit receiver, or none.
    pub fn call(&self, this: Option<&MemoryObject>, args: &[Json]) -> Json {
        (self.0)(&CallContext { this, args })
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeFunction")
    }
}

/// A [`NativeFunction`] with a fixed receiver.
#[derive(Clone)]
pub struct BoundFunction {
    function: NativeFunction,
    this: MemoryObject,
}

impl BoundFunction {
    /// Runs the function with the bound receiver as `this`.
    pub fn call(&self, args: &[Json]) -> Json {
        self.function.call(Some(&self.this), args)
    }

    pub fn receiver(&self) -> &MemoryObject {
        &self.this
    }
}

impl fmt::Debug for BoundFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundFunction")
            .field("this", &self.this.label())
            .finish()
    }
}

// --- Objects ---

#[derive(Clone, Debug)]
pub enum MemoryValue {
    Data(Json),
    Object(MemoryObject),
    Function(NativeFunction),
    /// Reports as a function but cannot be rebound, like the native
    /// constructors some engines expose without a `bind` method.
    OpaqueFunction(NativeFunction),
}

impl MemoryValue {
    pub fn function(f: impl Fn(&CallContext<'_>) -> Json + 'static) -> Self {
        Self::Function(NativeFunction::new(f))
    }

    pub fn opaque_function(f: impl Fn(&CallContext<'_>) -> Json + 'static) -> Self {
        Self::OpaqueFunction(NativeFunction::new(f))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_) | Self::OpaqueFunction(_))
    }

    pub fn as_data(&self) -> Option<&Json> {
        match self {
            Self::Data(json) => Some(json),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&MemoryObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<Json> for MemoryValue {
    fn from(json: Json) -> Self {
        Self::Data(json)
    }
}

struct ObjectInner {
    label: String,
    properties: RefCell<IndexMap<String, MemoryValue>>,
}

/// Shared handle to a host object. Clones refer to the same object.
#[derive(Clone)]
pub struct MemoryObject(Rc<ObjectInner>);

impl MemoryObject {
    pub fn new(label: impl Into<String>) -> Self {
        Self(Rc::new(ObjectInner {
            label: label.into(),
            properties: RefCell::new(IndexMap::new()),
        }))
    }

    /// Builds an object from a JSON object; nested objects become
    /// [`MemoryValue::Object`]s labelled with their key.
    ///
    /// Returns `None` when `json` is not an object.
    pub fn from_json(label: impl Into<String>, json: Json) -> Option<Self> {
        match json {
            Json::Object(map) => Some(Self::from_map(label, map)),
            _ => None,
        }
    }

    fn from_map(label: impl Into<String>, map: serde_json::Map<String, Json>) -> Self {
        let object = Self::new(label);
        for (key, value) in map {
            let value = match value {
                Json::Object(nested) => MemoryValue::Object(Self::from_map(key.clone(), nested)),
                data => MemoryValue::Data(data),
            };
            object.set(key, value);
        }
        object
    }

    pub fn label(&self) -> &str {
        &self.0.label
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<MemoryValue>) {
        self.0.properties.borrow_mut().insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<MemoryValue> {
        self.0.properties.borrow().get(name).cloned()
    }

    pub fn remove(&self, name: &str) -> Option<MemoryValue> {
        self.0.properties.borrow_mut().shift_remove(name)
    }

    /// `true` when both handles refer to the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MemoryObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let properties = self.0.properties.borrow();
        f.debug_struct("MemoryObject")
            .field("label", &self.0.label)
            .field("properties", &properties.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl From<MemoryObject> for MemoryValue {
    fn from(object: MemoryObject) -> Self {
        Self::Object(object)
    }
}

impl From<NativeFunction> for MemoryValue {
    fn from(function: NativeFunction) -> Self {
        Self::Function(function)
    }
}

impl HostObject for MemoryObject {
    type Value = MemoryValue;
    type Function = NativeFunction;
    type Bound = BoundFunction;

    fn classify(&self, name: &str) -> Capability<NativeFunction, MemoryValue> {
        match self.get(name) {
            None => Capability::Absent,
            Some(MemoryValue::Function(function)) => Capability::Callable(function),
            Some(value) => Capability::Value(value),
        }
    }

    fn bind(function: NativeFunction, receiver: &Self) -> BoundFunction {
        BoundFunction {
            function,
            this: receiver.clone(),
        }
    }
}
