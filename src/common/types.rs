use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subject category of a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Technology,
    Health,
    Finance,
    Education,
    Environment,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Health,
        Category::Finance,
        Category::Education,
        Category::Environment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Health => "health",
            Category::Finance => "finance",
            Category::Education => "education",
            Category::Environment => "environment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// Publication type of a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceType {
    Article,
    Report,
    CaseStudy,
    Book,
    Conference,
}

impl ReferenceType {
    pub const ALL: [ReferenceType; 5] = [
        ReferenceType::Article,
        ReferenceType::Report,
        ReferenceType::CaseStudy,
        ReferenceType::Book,
        ReferenceType::Conference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceType::Article => "article",
            ReferenceType::Report => "report",
            ReferenceType::CaseStudy => "case-study",
            ReferenceType::Book => "book",
            ReferenceType::Conference => "conference",
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReferenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReferenceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown reference type '{}'", s))
    }
}

/// Publication window offered by the filter form (accepted, not applied)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    LastMonth,
    #[serde(rename = "last-3-months")]
    LastThreeMonths,
    #[serde(rename = "last-6-months")]
    LastSixMonths,
    LastYear,
    AllTime,
}

impl DateRange {
    pub const ALL: [DateRange; 5] = [
        DateRange::LastMonth,
        DateRange::LastThreeMonths,
        DateRange::LastSixMonths,
        DateRange::LastYear,
        DateRange::AllTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::LastMonth => "last-month",
            DateRange::LastThreeMonths => "last-3-months",
            DateRange::LastSixMonths => "last-6-months",
            DateRange::LastYear => "last-year",
            DateRange::AllTime => "all-time",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateRange::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown date range '{}'", s))
    }
}

/// Bibliographic database a search could be scoped to (accepted, not applied)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Pubmed,
    Arxiv,
    GoogleScholar,
    Ieee,
    Nature,
}

impl Source {
    pub const ALL: [Source; 5] = [
        Source::Pubmed,
        Source::Arxiv,
        Source::GoogleScholar,
        Source::Ieee,
        Source::Nature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Pubmed => "pubmed",
            Source::Arxiv => "arxiv",
            Source::GoogleScholar => "google-scholar",
            Source::Ieee => "ieee",
            Source::Nature => "nature",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|src| src.as_str() == s)
            .ok_or_else(|| format!("unknown source '{}'", s))
    }
}

/// A single academic reference record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    /// Journal, proceedings, or publisher the reference appeared in
    #[serde(rename = "journal", alias = "venue")]
    pub venue: String,
    pub year: i32,
    pub category: Category,
    #[serde(rename = "type")]
    pub reference_type: ReferenceType,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    pub citations: u32,
    /// Precomputed relevance in [0, 100]; never recomputed here
    pub relevance_score: u32,
}

/// Highest value a relevance score may take
pub const MAX_RELEVANCE_SCORE: u32 = 100;

/// Statistics from loading a reference catalog
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    pub lines_processed: usize,
    pub records_loaded: usize,
    pub parse_failures: usize,
    pub out_of_range: usize,
    pub duplicates: usize,
}

/// Statistics from a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    pub requests: usize,
    pub skipped_lines: usize,
    pub empty_results: usize,
    pub total_matches: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_serialization_uses_wire_values() {
        assert_eq!(serde_json::to_string(&Category::Environment).unwrap(), "\"environment\"");
        assert_eq!(serde_json::to_string(&ReferenceType::CaseStudy).unwrap(), "\"case-study\"");
        assert_eq!(serde_json::to_string(&DateRange::LastThreeMonths).unwrap(), "\"last-3-months\"");
        assert_eq!(serde_json::to_string(&DateRange::LastSixMonths).unwrap(), "\"last-6-months\"");
        assert_eq!(serde_json::to_string(&Source::GoogleScholar).unwrap(), "\"google-scholar\"");
    }

    #[test]
    fn test_serde_agrees_with_as_str() {
        for c in Category::ALL {
            assert_eq!(serde_json::to_string(&c).unwrap(), format!("\"{}\"", c.as_str()));
        }
        for t in ReferenceType::ALL {
            assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{}\"", t.as_str()));
        }
        for d in DateRange::ALL {
            assert_eq!(serde_json::to_string(&d).unwrap(), format!("\"{}\"", d.as_str()));
        }
        for s in Source::ALL {
            assert_eq!(serde_json::to_string(&s).unwrap(), format!("\"{}\"", s.as_str()));
        }
    }

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!("finance".parse::<Category>().unwrap(), Category::Finance);
        assert_eq!("case-study".parse::<ReferenceType>().unwrap(), ReferenceType::CaseStudy);
        assert_eq!("all-time".parse::<DateRange>().unwrap(), DateRange::AllTime);
        assert_eq!("ieee".parse::<Source>().unwrap(), Source::Ieee);
        assert!("Finance".parse::<Category>().is_err());
        assert!("rapport".parse::<ReferenceType>().is_err());
    }

    #[test]
    fn test_reference_field_names() {
        let json = r#"{
            "id": "x",
            "title": "T",
            "authors": ["A"],
            "venue": "V",
            "year": 2020,
            "category": "health",
            "type": "book",
            "abstract": "B",
            "citations": 3,
            "relevanceScore": 42
        }"#;
        let r: Reference = serde_json::from_str(json).unwrap();
        assert_eq!(r.venue, "V");
        assert_eq!(r.reference_type, ReferenceType::Book);
        assert_eq!(r.relevance_score, 42);
        assert!(r.url.is_none());

        let out = serde_json::to_value(&r).unwrap();
        assert_eq!(out["journal"], "V");
        assert_eq!(out["relevanceScore"], 42);
        assert!(out.get("doi").is_none());
    }
}
