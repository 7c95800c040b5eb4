//! Candidate spellings for one logical property name.

use smallvec::SmallVec;

use crate::error::{DetectError, Result};
use crate::prefixes::{PrefixCasing, Vendor};

/// Unprefixed spelling plus one spelling per vendor.
pub const CANDIDATE_COUNT: usize = Vendor::ALL.len() + 1;

/// One spelling to probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    /// `None` for the unprefixed spelling.
    pub vendor: Option<Vendor>,
}

impl Candidate {
    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn is_prefixed(&self) -> bool {
        self.vendor.is_some()
    }
}

/// Ordered spellings of a property, highest priority first.
///
/// Always holds [`CANDIDATE_COUNT`] entries: the name exactly as given,
/// then `<prefix><Name>` for every vendor in table order. Upper-casing the
/// first letter is a heuristic; it matches how browsers spell prefixed
/// members but is not guaranteed to be the real unprefixed spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateList {
    candidates: SmallVec<[Candidate; CANDIDATE_COUNT]>,
}

impl CandidateList {
    /// Builds the candidate list for `property_name` in the given casing.
    ///
    /// # Errors
    ///
    /// [`DetectError::EmptyPropertyName`] if the name is empty or
    /// whitespace only.
    pub fn build(property_name: &str, casing: PrefixCasing) -> Result<Self> {
        if property_name.trim().is_empty() {
            return Err(DetectError::EmptyPropertyName(property_name.to_string()));
        }
        let ucfirst = ucfirst(property_name);

        let mut candidates = SmallVec::new();
        candidates.push(Candidate {
            name: property_name.to_string(),
            vendor: None,
        });
        for vendor in Vendor::ALL {
            candidates.push(Candidate {
                name: format!("{}{ucfirst}", casing.prefix(vendor)),
                vendor: Some(vendor),
            });
        }
        Ok(Self { candidates })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(Candidate::as_str)
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `name` with its first character upper-cased.
pub fn ucfirst(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
