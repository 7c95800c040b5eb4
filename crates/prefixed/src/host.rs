//! Seams between the resolution logic and the environment being probed.
//!
//! The core never creates or mutates host objects. A [`StyleProbe`] only
//! answers membership questions; a [`HostObject`] additionally classifies
//! what it finds so the resolver branches on an explicit [`Capability`]
//! instead of inspecting values itself.

/// Read-only membership test against a style declaration.
///
/// Implemented over the `style` of a detached element in the browser and
/// over recorded property sets elsewhere.
pub trait StyleProbe {
    /// `true` when `style[name] !== undefined`.
    fn has_property(&self, name: &str) -> bool;
}

impl<S: StyleProbe + ?Sized> StyleProbe for &S {
    fn has_property(&self, name: &str) -> bool {
        (**self).has_property(name)
    }
}

/// What a host object holds under some member name.
#[derive(Clone, Debug, PartialEq)]
pub enum Capability<F, V> {
    /// An invocable value that can be bound to a receiver.
    Callable(F),
    /// Anything else: data, objects, or functions that cannot be rebound.
    Value(V),
    Absent,
}

impl<F, V> Capability<F, V> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// An environment object probed member by member, e.g. a global namespace.
pub trait HostObject {
    /// Raw member value.
    type Value;
    /// A rebindable function found on the object.
    type Function;
    /// A function whose receiver is fixed.
    type Bound;

    /// Looks up `name` and classifies the result.
    fn classify(&self, name: &str) -> Capability<Self::Function, Self::Value>;

    /// Fixes the receiver of `function` to `receiver`.
    fn bind(function: Self::Function, receiver: &Self) -> Self::Bound;
}

/// How the resolver treats a matched member.
#[derive(Debug)]
pub enum Binding<'a, T> {
    /// Bind callables to the object they were found on.
    Auto,
    /// Bind callables to this receiver instead.
    To(&'a T),
    /// Only report which spelling matched.
    NameOnly,
}

impl<T> Default for Binding<'_, T> {
    fn default() -> Self {
        Self::Auto
    }
}

// Manual impls: `T` itself need not be `Clone`.
impl<T> Clone for Binding<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Binding<'_, T> {}

/// A member resolved on a host object.
pub enum Resolved<T: HostObject> {
    /// Spelling of the matched member ([`Binding::NameOnly`]).
    Name(String),
    /// A callable bound to its receiver.
    Bound(T::Bound),
    /// The member value, unchanged. May be falsy.
    Value(T::Value),
}

impl<T: HostObject> Resolved<T> {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn into_bound(self) -> Option<T::Bound> {
        match self {
            Self::Bound(bound) => Some(bound),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T::Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: HostObject> std::fmt::Debug for Resolved<T>
where
    T::Bound: std::fmt::Debug,
    T::Value: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Bound(bound) => f.debug_tuple("Bound").field(bound).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}
