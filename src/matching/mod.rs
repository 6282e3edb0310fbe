//! Matching engine: filters a reference collection by a [`FilterRequest`].
//!
//! All set criteria must hold (category, type, keywords); `dateRange` and
//! `source` are accepted but not applied. The result borrows from the input
//! and keeps its order.

use crate::common::Reference;
use crate::filter::FilterRequest;

/// Lower-cased, trimmed, non-empty keyword terms from a comma-separated string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTerms {
    terms: Vec<String>,
}

impl KeywordTerms {
    pub fn parse(keywords: &str) -> Self {
        let terms = keywords
            .split(',')
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// At least one term occurs in the title or the abstract, ignoring case.
    /// With no terms nothing matches.
    pub fn matches(&self, reference: &Reference) -> bool {
        if self.terms.is_empty() {
            return false;
        }
        let title = reference.title.to_lowercase();
        let abstract_text = reference.abstract_text.to_lowercase();
        self.terms
            .iter()
            .any(|term| title.contains(term.as_str()) || abstract_text.contains(term.as_str()))
    }
}

/// A request prepared for repeated evaluation against many records
#[derive(Debug, Clone)]
pub struct Matcher<'r> {
    category: &'r str,
    reference_type: &'r str,
    keywords: Option<KeywordTerms>,
}

impl<'r> Matcher<'r> {
    pub fn new(request: &'r FilterRequest) -> Self {
        let keywords = if request.keywords().is_empty() {
            None
        } else {
            Some(KeywordTerms::parse(request.keywords()))
        };
        Self {
            category: request.category(),
            reference_type: request.reference_type(),
            keywords,
        }
    }

    pub fn matches(&self, reference: &Reference) -> bool {
        if !self.category.is_empty() && reference.category.as_str() != self.category {
            return false;
        }
        if !self.reference_type.is_empty()
            && reference.reference_type.as_str() != self.reference_type
        {
            return false;
        }
        match &self.keywords {
            Some(terms) => terms.matches(reference),
            None => true,
        }
    }
}

/// Whether a single reference satisfies every set criterion of `request`
pub fn matches(reference: &Reference, request: &FilterRequest) -> bool {
    Matcher::new(request).matches(reference)
}

/// The references satisfying `request`, in collection order
pub fn match_references<'a>(collection: &'a [Reference], request: &FilterRequest) -> Vec<&'a Reference> {
    let matcher = Matcher::new(request);
    collection.iter().filter(|r| matcher.matches(r)).collect()
}
