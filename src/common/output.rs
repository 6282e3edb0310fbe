use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::types::Reference;

/// Abstracts longer than this many characters are cut and suffixed with "..."
pub const ABSTRACT_PREVIEW_CHARS: usize = 300;

/// Authors listed before collapsing the rest into "et al."
pub const MAX_LISTED_AUTHORS: usize = 3;

/// Display tier of a stored relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceTier {
    /// Score above 80
    High,
    /// Score above 60
    Medium,
    Low,
}

impl RelevanceTier {
    pub fn from_score(score: u32) -> Self {
        if score > 80 {
            RelevanceTier::High
        } else if score > 60 {
            RelevanceTier::Medium
        } else {
            RelevanceTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelevanceTier::High => "high",
            RelevanceTier::Medium => "medium",
            RelevanceTier::Low => "low",
        }
    }
}

/// "A, B, C et al." style author line
pub fn format_authors(authors: &[String]) -> String {
    let listed = authors
        .iter()
        .take(MAX_LISTED_AUTHORS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if authors.len() > MAX_LISTED_AUTHORS {
        format!("{} et al.", listed)
    } else {
        listed
    }
}

/// Truncate on a character boundary
pub fn abstract_excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Write a settled result set as plain text
pub fn write_results<W: fmt::Write>(out: &mut W, results: &[Reference]) -> fmt::Result {
    if results.is_empty() {
        writeln!(out, "No references found.")?;
        return writeln!(out, "Try adjusting your filters to get results.");
    }

    let noun = if results.len() == 1 { "reference" } else { "references" };
    writeln!(out, "Analysis results: {} {} found", results.len(), noun)?;

    for reference in results {
        let tier = RelevanceTier::from_score(reference.relevance_score);
        writeln!(out)?;
        writeln!(out, "{}", reference.title)?;
        writeln!(
            out,
            "  {} | {} | {}",
            format_authors(&reference.authors),
            reference.year,
            reference.venue
        )?;
        writeln!(
            out,
            "  Relevance: {}% ({}) | {} citations",
            reference.relevance_score,
            tier.as_str(),
            reference.citations
        )?;
        writeln!(out, "  [{}] [{}]", reference.category, reference.reference_type)?;
        writeln!(
            out,
            "  {}",
            abstract_excerpt(&reference.abstract_text, ABSTRACT_PREVIEW_CHARS)
        )?;
        if let Some(url) = &reference.url {
            writeln!(out, "  URL: {}", url)?;
        }
        if let Some(doi) = &reference.doi {
            writeln!(out, "  DOI: {}", doi)?;
        }
    }
    Ok(())
}

/// Plain-text view of a result set, for `{}` formatting
pub struct ResultsListing<'a>(pub &'a [Reference]);

impl fmt::Display for ResultsListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_results(f, self.0)
    }
}

/// Render a settled result set as plain text
pub fn render_results(results: &[Reference]) -> String {
    ResultsListing(results).to_string()
}

/// Write results to a JSON file as a pretty-printed array
pub fn write_results_json<P: AsRef<Path>>(path: P, results: &[Reference]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, results)
        .context("Failed to serialize results")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceCatalog;

    #[test]
    fn test_relevance_tiers() {
        assert_eq!(RelevanceTier::from_score(95), RelevanceTier::High);
        assert_eq!(RelevanceTier::from_score(81), RelevanceTier::High);
        assert_eq!(RelevanceTier::from_score(80), RelevanceTier::Medium);
        assert_eq!(RelevanceTier::from_score(61), RelevanceTier::Medium);
        assert_eq!(RelevanceTier::from_score(60), RelevanceTier::Low);
        assert_eq!(RelevanceTier::from_score(0), RelevanceTier::Low);
    }

    #[test]
    fn test_format_authors() {
        let two = vec!["A".to_string(), "B".to_string()];
        assert_eq!(format_authors(&two), "A, B");

        let four: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        assert_eq!(format_authors(&four), "A, B, C et al.");

        assert_eq!(format_authors(&[]), "");
    }

    #[test]
    fn test_abstract_excerpt() {
        assert_eq!(abstract_excerpt("short", 300), "short");
        assert_eq!(abstract_excerpt("abcdef", 3), "abc...");
        // multi-byte characters are counted, not bytes
        assert_eq!(abstract_excerpt("étéé", 2), "ét...");

        let exact = "x".repeat(300);
        assert_eq!(abstract_excerpt(&exact, 300), exact);
    }

    #[test]
    fn test_render_empty() {
        let text = render_results(&[]);
        assert!(text.starts_with("No references found."));
    }

    #[test]
    fn test_render_sample() {
        let catalog = ReferenceCatalog::sample();
        let text = render_results(catalog.references());

        assert!(text.starts_with("Analysis results: 3 references found"));
        assert!(text.contains("Relevance: 95% (high)"));
        assert!(text.contains("Relevance: 78% (medium)"));
        assert!(text.contains("[finance] [report]"));
        assert!(text.contains("Dr. Elena Rodriguez, Prof. Hans Mueller, Dr. Aisha Patel et al."));
        assert!(text.contains("DOI: 10.1000/journal.2024.001"));
        // every sample abstract is longer than the preview
        assert_eq!(text.matches("...\n").count(), 3);
    }

    #[test]
    fn test_write_results_matches_render() {
        let catalog = ReferenceCatalog::sample();
        let mut out = String::new();
        write_results(&mut out, &catalog.references()[..1]).unwrap();

        assert_eq!(out, render_results(&catalog.references()[..1]));
        assert!(out.starts_with("Analysis results: 1 reference found\n"));
        assert_eq!(format!("{}", ResultsListing(&[])), render_results(&[]));
    }

    #[test]
    fn test_write_results_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let catalog = ReferenceCatalog::sample();

        write_results_json(&path, catalog.references()).unwrap();

        let written: Vec<Reference> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, catalog.references());
    }
}
