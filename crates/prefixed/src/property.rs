//! Presence search over an arbitrary host object, with function binding.

use crate::candidates::CandidateList;
use crate::host::{Binding, Capability, HostObject, Resolved};

/// Resolves the first candidate present on `target`.
///
/// With [`Binding::NameOnly`] the matching spelling is returned. Otherwise
/// a rebindable function comes back bound to the explicit receiver, or to
/// `target` for [`Binding::Auto`], and any other value comes back as is.
/// Falsy values are still a match; only absence yields `None`.
pub fn resolve_prop<T: HostObject>(
    candidates: &CandidateList,
    target: &T,
    binding: Binding<'_, T>,
) -> Option<Resolved<T>> {
    for candidate in candidates {
        let capability = target.classify(&candidate.name);
        log::trace!(
            "DOM candidate `{}` present: {}",
            candidate.name,
            !capability.is_absent()
        );

        let resolved = match (capability, binding) {
            (Capability::Absent, _) => continue,
            (_, Binding::NameOnly) => Resolved::Name(candidate.name.clone()),
            (Capability::Callable(function), Binding::Auto) => {
                Resolved::Bound(T::bind(function, target))
            }
            (Capability::Callable(function), Binding::To(receiver)) => {
                Resolved::Bound(T::bind(function, receiver))
            }
            (Capability::Value(value), _) => Resolved::Value(value),
        };
        log::debug!("DOM property resolved to `{}`", candidate.name);
        return Some(resolved);
    }
    log::debug!(
        "No DOM candidate present among {:?}",
        candidates.names().collect::<Vec<_>>()
    );
    None
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::platform::memory::{MemoryObject, MemoryValue};
    use crate::prefixes::PrefixCasing;

    fn candidates(name: &str) -> CandidateList {
        CandidateList::build(name, PrefixCasing::Dom).unwrap()
    }

    fn this_label() -> MemoryValue {
        MemoryValue::function(|cx| cx.this().map_or(json!(null), |this| json!(this.label())))
    }

    #[test]
    fn callable_is_bound_to_target_by_default() {
        let window = MemoryObject::new("window");
        window.set("mozRequestAnimationFrame", this_label());

        let bound = resolve_prop(&candidates("requestAnimationFrame"), &window, Binding::Auto)
            .and_then(Resolved::into_bound)
            .unwrap();
        assert_eq!(bound.call(&[]), json!("window"));
    }

    #[test]
    fn callable_is_bound_to_explicit_receiver() {
        let window = MemoryObject::new("window");
        let element = MemoryObject::new("element");
        window.set("webkitRequestFullscreen", this_label());

        let bound = resolve_prop(
            &candidates("requestFullscreen"),
            &window,
            Binding::To(&element),
        )
        .and_then(Resolved::into_bound)
        .unwrap();
        assert_eq!(bound.call(&[]), json!("element"));
    }

    #[test]
    fn name_only_returns_spelling() {
        let window = MemoryObject::new("window");
        window.set("mozRequestAnimationFrame", this_label());

        let resolved =
            resolve_prop(&candidates("requestAnimationFrame"), &window, Binding::NameOnly).unwrap();
        assert_eq!(resolved.name(), Some("mozRequestAnimationFrame"));
    }

    #[test]
    fn unbindable_function_is_returned_raw() {
        let window = MemoryObject::new("window");
        window.set(
            "webkitAudioContext",
            MemoryValue::opaque_function(|_| json!("context")),
        );

        let value = resolve_prop(&candidates("audioContext"), &window, Binding::Auto)
            .and_then(Resolved::into_value)
            .unwrap();
        assert!(value.is_function());
    }

    #[test]
    fn falsy_value_is_still_a_match() {
        let navigator = MemoryObject::new("navigator");
        navigator.set("msPointerEnabled", MemoryValue::Data(json!(false)));

        let value = resolve_prop(&candidates("pointerEnabled"), &navigator, Binding::Auto)
            .and_then(Resolved::into_value)
            .unwrap();
        assert_eq!(value.as_data(), Some(&json!(false)));
    }

    #[test]
    fn absent_everywhere_is_none() {
        let window = MemoryObject::new("window");
        window.set("setTimeout", this_label());
        assert!(resolve_prop(&candidates("requestAnimationFrame"), &window, Binding::Auto).is_none());
    }

    #[test]
    fn first_present_spelling_wins() {
        let window = MemoryObject::new("window");
        window.set("msIndexedDB", MemoryValue::Data(json!("ms")));
        window.set("webkitIndexedDB", MemoryValue::Data(json!("webkit")));

        let resolved = resolve_prop(&candidates("indexedDB"), &window, Binding::NameOnly).unwrap();
        assert_eq!(resolved.name(), Some("webkitIndexedDB"));
    }
}
