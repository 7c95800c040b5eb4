//! Presence search over a style declaration.

use crate::candidates::{Candidate, CandidateList};
use crate::host::StyleProbe;

/// What [`find_style_prop`] reports on a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleMode {
    /// The matching spelling.
    Name,
    /// Only whether any spelling matched.
    Presence,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleMatch {
    Name(String),
    Supported,
    NotFound,
}

impl StyleMatch {
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    pub fn into_name(self) -> Option<String> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }
}

/// Returns the first candidate present on `probe`.
///
/// Hyphenated candidates are never probed: style declarations may answer
/// for `"box-sizing"` as well, and only camelCase spellings are reported.
pub fn first_style_match<'c>(
    candidates: &'c CandidateList,
    probe: &impl StyleProbe,
) -> Option<&'c Candidate> {
    candidates.iter().find(|candidate| {
        if candidate.name.contains('-') {
            log::trace!("Skipping hyphenated style candidate `{}`", candidate.name);
            return false;
        }
        let present = probe.has_property(&candidate.name);
        log::trace!("Style candidate `{}` present: {present}", candidate.name);
        present
    })
}

pub fn find_style_prop(
    candidates: &CandidateList,
    probe: &impl StyleProbe,
    mode: StyleMode,
) -> StyleMatch {
    match first_style_match(candidates, probe) {
        Some(candidate) => {
            log::debug!("Style property resolved to `{}`", candidate.name);
            match mode {
                StyleMode::Name => StyleMatch::Name(candidate.name.clone()),
                StyleMode::Presence => StyleMatch::Supported,
            }
        }
        None => {
            log::debug!(
                "No style candidate present among {:?}",
                candidates.names().collect::<Vec<_>>()
            );
            StyleMatch::NotFound
        }
    }
}
