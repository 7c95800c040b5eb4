//! Resolve what a browser calls a possibly vendor-prefixed API.
//!
//! ```
//! use prefixed::{Binding, Detector, MemoryObject, MemoryStyle, MemoryValue, Resolved};
//!
//! let detector = Detector::new(MemoryStyle::from_iter(["WebkitTransform"]));
//! assert_eq!(
//!     detector.resolve_prefixed_style_name("transform")?.as_deref(),
//!     Some("WebkitTransform")
//! );
//!
//! let window = MemoryObject::new("window");
//! window.set(
//!     "mozRequestAnimationFrame",
//!     MemoryValue::function(|cx| serde_json::json!(cx.this().map(|this| this.label().to_string()))),
//! );
//! let request_animation_frame = detector
//!     .resolve_prefixed_dom_property("requestAnimationFrame", &window, Binding::Auto)?
//!     .and_then(Resolved::into_bound)
//!     .unwrap();
//! assert_eq!(request_animation_frame.call(&[]), serde_json::json!("window"));
//! # Ok::<(), prefixed::DetectError>(())
//! ```

pub mod candidates;
pub mod css;
pub mod detector;
pub mod error;
pub mod host;
pub mod platform;
pub mod prefixes;
pub mod property;
pub mod style;

pub use candidates::{Candidate, CandidateList};
pub use detector::{Detection, Detector, resolve_prefixed_dom_property};
pub use error::{DetectError, Result};
pub use host::{Binding, Capability, HostObject, Resolved, StyleProbe};
pub use platform::memory::{
    BoundFunction, CallContext, MemoryObject, MemoryStyle, MemoryValue, NativeFunction,
};
pub use prefixes::{CSS_PREFIXES, CSSOM_PREFIXES, DOM_PREFIXES, PrefixCasing, Vendor};
