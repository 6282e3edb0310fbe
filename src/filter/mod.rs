//! Filter requests: the five user-chosen criteria of one analysis.
//!
//! Every field is a free string and the empty string means "no constraint".
//! Values outside the known enumerations are kept as-is; they simply never
//! match a record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::{Category, DateRange, ReferenceType, Source};

/// One settable field of a [`FilterRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Category,
    Type,
    DateRange,
    Keywords,
    Source,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Category,
        FilterField::Type,
        FilterField::DateRange,
        FilterField::Keywords,
        FilterField::Source,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Category => "category",
            FilterField::Type => "type",
            FilterField::DateRange => "dateRange",
            FilterField::Keywords => "keywords",
            FilterField::Source => "source",
        }
    }

    /// Whether a non-empty value is one the field's enumeration knows
    fn recognizes(&self, value: &str) -> bool {
        match self {
            FilterField::Category => value.parse::<Category>().is_ok(),
            FilterField::Type => value.parse::<ReferenceType>().is_ok(),
            FilterField::DateRange => value.parse::<DateRange>().is_ok(),
            FilterField::Source => value.parse::<Source>().is_ok(),
            FilterField::Keywords => true,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(FilterField::Category),
            "type" => Ok(FilterField::Type),
            "dateRange" | "date-range" => Ok(FilterField::DateRange),
            "keywords" => Ok(FilterField::Keywords),
            "source" => Ok(FilterField::Source),
            _ => Err(format!("unknown filter field '{}'", s)),
        }
    }
}

/// Immutable criteria for one analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterRequest {
    category: String,
    #[serde(rename = "type")]
    reference_type: String,
    date_range: String,
    keywords: String,
    source: String,
}

impl FilterRequest {
    /// A request with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this request with `field` set to `value`.
    /// Any string is accepted; `self` is left untouched.
    pub fn with_field(&self, field: FilterField, value: impl Into<String>) -> FilterRequest {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FilterField::Category => next.category = value,
            FilterField::Type => next.reference_type = value,
            FilterField::DateRange => next.date_range = value,
            FilterField::Keywords => next.keywords = value,
            FilterField::Source => next.source = value,
        }
        next
    }

    pub fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::Category => &self.category,
            FilterField::Type => &self.reference_type,
            FilterField::DateRange => &self.date_range,
            FilterField::Keywords => &self.keywords,
            FilterField::Source => &self.source,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn reference_type(&self) -> &str {
        &self.reference_type
    }

    pub fn date_range(&self) -> &str {
        &self.date_range
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// True when no field that the matcher consults is set
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_empty() && self.reference_type.is_empty() && self.keywords.is_empty()
    }

    /// Fields holding a value outside their enumeration
    pub fn unrecognized_fields(&self) -> Vec<FilterField> {
        FilterField::ALL
            .into_iter()
            .filter(|f| {
                let value = self.field(*f);
                !value.is_empty() && !f.recognizes(value)
            })
            .collect()
    }

    /// Set fields that the matcher accepts but does not apply
    pub fn inert_fields(&self) -> Vec<FilterField> {
        [FilterField::DateRange, FilterField::Source]
            .into_iter()
            .filter(|f| !self.field(*f).is_empty())
            .collect()
    }
}

impl fmt::Display for FilterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set: Vec<String> = FilterField::ALL
            .into_iter()
            .filter(|field| !self.field(*field).is_empty())
            .map(|field| format!("{}={:?}", field, self.field(field)))
            .collect();
        if set.is_empty() {
            write!(f, "(no filters)")
        } else {
            write!(f, "{}", set.join(" "))
        }
    }
}
