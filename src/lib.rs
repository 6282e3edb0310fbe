//! Filter-and-match engine for academic reference collections.
//!
//! A [`filter::FilterRequest`] names up to five criteria; the
//! [`matching`] module selects the references that satisfy them, and
//! [`analysis::Analyzer`] wraps a query in its `idle -> running -> settled`
//! lifecycle.

pub mod analysis;
pub mod catalog;
pub mod common;
pub mod filter;
pub mod matching;

pub use analysis::{Analyzer, QueryState};
pub use catalog::ReferenceCatalog;
pub use common::{Category, DateRange, Reference, ReferenceType, Source};
pub use filter::{FilterField, FilterRequest};
pub use matching::{match_references, matches, KeywordTerms, Matcher};
