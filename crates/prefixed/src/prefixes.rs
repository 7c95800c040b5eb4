//! Vendor prefix table.
//!
//! Browsers expose vendor-specific style properties in PascalCase on the
//! style declaration (`elem.style.WebkitBorderRadius`, not
//! `webkitBorderRadius`), except Microsoft, which uses a lowercase `ms`.
//! DOM members (`window.mozRequestAnimationFrame`) use the lowercase form.
//!
//! The order of [`Vendor::ALL`] is the detection priority: the first
//! vendor whose spelling is present wins.

use std::fmt;

/// A browser vendor that historically shipped prefixed APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vendor {
    Webkit,
    Moz,
    O,
    Ms,
}

/// CSSOM (style declaration) casing, index-aligned with [`Vendor::ALL`].
pub const CSSOM_PREFIXES: [&str; 4] = ["Webkit", "Moz", "O", "ms"];

/// DOM member casing, index-aligned with [`Vendor::ALL`].
pub const DOM_PREFIXES: [&str; 4] = ["webkit", "moz", "o", "ms"];

/// Hyphenated CSS casing, index-aligned with [`Vendor::ALL`].
pub const CSS_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-o-", "-ms-"];

impl Vendor {
    /// All vendors in detection priority order.
    pub const ALL: [Vendor; 4] = [Vendor::Webkit, Vendor::Moz, Vendor::O, Vendor::Ms];

    fn index(self) -> usize {
        match self {
            Self::Webkit => 0,
            Self::Moz => 1,
            Self::O => 2,
            Self::Ms => 3,
        }
    }

    /// Prefix as it appears on a style declaration, e.g. `Webkit`.
    pub fn cssom_prefix(self) -> &'static str {
        CSSOM_PREFIXES[self.index()]
    }

    /// Prefix as it appears on DOM objects, e.g. `webkit`.
    pub fn dom_prefix(self) -> &'static str {
        DOM_PREFIXES[self.index()]
    }

    /// Prefix as it appears in stylesheets, e.g. `-webkit-`.
    pub fn css_prefix(self) -> &'static str {
        CSS_PREFIXES[self.index()]
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_prefix())
    }
}

/// Which casing of the prefix table a candidate list is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixCasing {
    /// `Webkit`, `Moz`, `O`, `ms`: style declaration members.
    Cssom,
    /// `webkit`, `moz`, `o`, `ms`: members of DOM objects and globals.
    Dom,
}

impl PrefixCasing {
    pub fn prefix(self, vendor: Vendor) -> &'static str {
        match self {
            Self::Cssom => vendor.cssom_prefix(),
            Self::Dom => vendor.dom_prefix(),
        }
    }
}
