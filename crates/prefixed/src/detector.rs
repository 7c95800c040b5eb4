//! Entry points.
//!
//! A [`Detector`] owns the probe style object, created once by the host
//! and never mutated, and resolves names against it. Style lookups and
//! DOM lookups are separate operations; [`Detector::detect`] combines them
//! behind one call for shims that pick the mode by whether they pass a
//! target object.

use crate::candidates::CandidateList;
use crate::css;
use crate::error::Result;
use crate::host::{Binding, HostObject, Resolved, StyleProbe};
use crate::prefixes::PrefixCasing;
use crate::property::resolve_prop;
use crate::style::{StyleMode, find_style_prop};

/// Outcome of [`Detector::detect`].
pub enum Detection<T: HostObject> {
    /// Spelling found on the probe style object.
    StyleName(String),
    /// Member found on the target object.
    Property(Resolved<T>),
    NotFound,
}

impl<T: HostObject> Detection<T> {
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    /// The matched spelling, for style lookups and name-only DOM lookups.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::StyleName(name) => Some(name),
            Self::Property(resolved) => resolved.name(),
            Self::NotFound => None,
        }
    }

    pub fn into_resolved(self) -> Option<Resolved<T>> {
        match self {
            Self::Property(resolved) => Some(resolved),
            _ => None,
        }
    }
}

impl<T: HostObject> std::fmt::Debug for Detection<T>
where
    T::Bound: std::fmt::Debug,
    T::Value: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StyleName(name) => f.debug_tuple("StyleName").field(name).finish(),
            Self::Property(resolved) => f.debug_tuple("Property").field(resolved).finish(),
            Self::NotFound => f.write_str("NotFound"),
        }
    }
}

/// Resolution context holding the probe style object.
#[derive(Clone, Debug)]
pub struct Detector<S> {
    style: S,
}

impl<S: StyleProbe> Detector<S> {
    pub fn new(style: S) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    /// Style declaration spelling of `property_name` in this environment,
    /// e.g. `"transform"` → `"WebkitTransform"`.
    pub fn resolve_prefixed_style_name(&self, property_name: &str) -> Result<Option<String>> {
        let candidates = CandidateList::build(property_name, PrefixCasing::Cssom)?;
        Ok(find_style_prop(&candidates, &self.style, StyleMode::Name).into_name())
    }

    /// `true` when any spelling of `property_name` is supported.
    pub fn supports_style(&self, property_name: &str) -> Result<bool> {
        let candidates = CandidateList::build(property_name, PrefixCasing::Cssom)?;
        Ok(find_style_prop(&candidates, &self.style, StyleMode::Presence).is_found())
    }

    /// Like [`Self::resolve_prefixed_style_name`] but in stylesheet
    /// spelling: `"box-sizing"` → `"-moz-box-sizing"`.
    pub fn css_prefixed(&self, css_name: &str) -> Result<Option<String>> {
        let property_name = css::camel_case(css_name);
        Ok(self
            .resolve_prefixed_style_name(&property_name)?
            .map(|name| css::css_name(&name)))
    }

    /// See [`resolve_prefixed_dom_property`].
    pub fn resolve_prefixed_dom_property<T: HostObject>(
        &self,
        property_name: &str,
        target: &T,
        binding: Binding<'_, T>,
    ) -> Result<Option<Resolved<T>>> {
        resolve_prefixed_dom_property(property_name, target, binding)
    }

    /// Style lookup without a target, DOM lookup with one.
    pub fn detect<T: HostObject>(
        &self,
        property_name: &str,
        target: Option<&T>,
        binding: Binding<'_, T>,
    ) -> Result<Detection<T>> {
        let detection = match target {
            None => self
                .resolve_prefixed_style_name(property_name)?
                .map(Detection::StyleName),
            Some(target) => resolve_prefixed_dom_property(property_name, target, binding)?
                .map(Detection::Property),
        };
        Ok(detection.unwrap_or(Detection::NotFound))
    }
}

/// Resolves `property_name` on `target`, e.g. `"requestAnimationFrame"` on
/// a window that only has `mozRequestAnimationFrame`.
///
/// Needs no probe style object.
pub fn resolve_prefixed_dom_property<T: HostObject>(
    property_name: &str,
    target: &T,
    binding: Binding<'_, T>,
) -> Result<Option<Resolved<T>>> {
    let candidates = CandidateList::build(property_name, PrefixCasing::Dom)?;
    Ok(resolve_prop(&candidates, target, binding))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::DetectError;
    use crate::platform::memory::{MemoryObject, MemoryStyle, MemoryValue};

    fn detector(properties: &[&str]) -> Detector<MemoryStyle> {
        Detector::new(properties.iter().copied().collect())
    }

    #[test]
    fn style_name_resolution() {
        let detector = detector(&["WebkitTransform", "boxSizing", "MozBoxSizing"]);
        assert_eq!(
            detector.resolve_prefixed_style_name("transform").unwrap().as_deref(),
            Some("WebkitTransform")
        );
        assert_eq!(
            detector.resolve_prefixed_style_name("boxSizing").unwrap().as_deref(),
            Some("boxSizing")
        );
        assert_eq!(detector.resolve_prefixed_style_name("hyphens").unwrap(), None);
    }

    #[test]
    fn detector_exposes_its_probe_style() {
        let detector = detector(&["OTransform"]);
        assert_eq!(detector.style().len(), 1);
        assert!(detector.style().has_property("OTransform"));
    }

    #[test]
    fn supports_style_reports_presence() {
        let detector = detector(&["OTransition"]);
        assert!(detector.supports_style("transition").unwrap());
        assert!(!detector.supports_style("animation").unwrap());
    }

    #[test]
    fn css_prefixed_round_trips_stylesheet_names() {
        let detector = detector(&["MozBoxSizing", "msTransform", "color"]);
        assert_eq!(
            detector.css_prefixed("box-sizing").unwrap().as_deref(),
            Some("-moz-box-sizing")
        );
        assert_eq!(
            detector.css_prefixed("transform").unwrap().as_deref(),
            Some("-ms-transform")
        );
        assert_eq!(detector.css_prefixed("color").unwrap().as_deref(), Some("color"));
        assert_eq!(detector.css_prefixed("user-select").unwrap(), None);
    }

    #[test]
    fn detect_without_target_uses_style() {
        let detector = detector(&["WebkitTransform"]);
        let detection = detector
            .detect::<MemoryObject>("transform", None, Binding::Auto)
            .unwrap();
        assert_eq!(detection.name(), Some("WebkitTransform"));
    }

    #[test]
    fn detect_with_target_ignores_style() {
        // The probe style happens to answer for the CSSOM spelling; the
        // DOM lookup must not consult it.
        let detector = detector(&["RequestAnimationFrame"]);
        let window = MemoryObject::new("window");
        window.set("webkitRequestAnimationFrame", MemoryValue::function(|_| json!(1)));

        let detection = detector
            .detect("requestAnimationFrame", Some(&window), Binding::NameOnly)
            .unwrap();
        assert_eq!(detection.name(), Some("webkitRequestAnimationFrame"));

        let empty = MemoryObject::new("empty");
        let detection = detector
            .detect("requestAnimationFrame", Some(&empty), Binding::Auto)
            .unwrap();
        assert!(!detection.is_found());
    }

    #[test]
    fn empty_names_fail_fast_in_every_mode() {
        let detector = detector(&[]);
        let window = MemoryObject::new("window");
        let expected = Err(DetectError::EmptyPropertyName(" ".to_string()));

        assert_eq!(detector.resolve_prefixed_style_name(" "), expected);
        assert!(detector.supports_style("").is_err());
        assert!(detector.css_prefixed("").is_err());
        assert!(resolve_prefixed_dom_property(" ", &window, Binding::Auto).is_err());
        assert!(detector.detect(" ", Some(&window), Binding::Auto).is_err());
    }
}
