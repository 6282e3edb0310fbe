//! Reference collections handed to the matcher.
//!
//! A catalog is either the built-in sample or a file of reference records:
//! a JSON array (`.json`), JSON Lines (`.jsonl`), or gzip-compressed JSON
//! Lines (`.gz`). Malformed, out-of-range, and duplicate records are skipped
//! with a warning rather than failing the load.

mod sample;

pub use sample::sample_references;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use log::{info, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;

use crate::common::{format_elapsed, LoadStats, Reference, MAX_RELEVANCE_SCORE};

/// Individual parse errors logged before only the total is reported
const MAX_LOGGED_PARSE_FAILURES: usize = 5;

/// On-disk layout of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    JsonArray,
    JsonLines,
    GzipJsonLines,
}

impl CatalogFormat {
    /// Pick a format from the file extension; anything unrecognized is read as JSON Lines
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::JsonArray,
            Some(ext) if ext.eq_ignore_ascii_case("gz") => CatalogFormat::GzipJsonLines,
            _ => CatalogFormat::JsonLines,
        }
    }
}

/// An immutable, ordered collection of references
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    references: Vec<Reference>,
}

impl ReferenceCatalog {
    pub fn new(references: Vec<Reference>) -> Self {
        Self { references }
    }

    pub fn sample() -> Self {
        Self::new(sample_references())
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Load a catalog from `path`, or the sample when no path is given
    pub fn open(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Ok(Self::load(p)?.0),
            None => {
                info!("Using built-in sample catalog");
                Ok(Self::sample())
            }
        }
    }

    /// Load a catalog file, returning it together with load statistics
    pub fn load<P: AsRef<Path>>(path: P) -> Result<(Self, LoadStats)> {
        let path = path.as_ref();
        info!("Loading references from: {}", path.display());
        let start = Instant::now();

        let file = File::open(path)
            .with_context(|| format!("Failed to open references file: {}", path.display()))?;

        let (catalog, stats) = match CatalogFormat::from_path(path) {
            CatalogFormat::JsonArray => Self::from_json_array(file)
                .with_context(|| format!("Failed to parse references file: {}", path.display()))?,
            CatalogFormat::JsonLines => Self::from_json_lines(BufReader::new(file))?,
            CatalogFormat::GzipJsonLines => {
                Self::from_json_lines(BufReader::new(GzDecoder::new(file)))?
            }
        };

        info!(
            "Loaded {} references from {} records in {}",
            stats.records_loaded,
            stats.lines_processed,
            format_elapsed(start.elapsed())
        );
        if stats.parse_failures > 0 {
            warn!("Failed to parse {} records", stats.parse_failures);
        }
        if stats.out_of_range > 0 {
            warn!(
                "Skipped {} records with relevance score above {}",
                stats.out_of_range, MAX_RELEVANCE_SCORE
            );
        }
        if stats.duplicates > 0 {
            warn!("Skipped {} records with duplicate ids", stats.duplicates);
        }

        Ok((catalog, stats))
    }

    /// Read a JSON array of records. The array itself must parse; bad entries are skipped.
    pub fn from_json_array<R: Read>(reader: R) -> Result<(Self, LoadStats)> {
        let values: Vec<serde_json::Value> =
            serde_json::from_reader(reader).context("Expected a JSON array of references")?;

        let mut builder = CatalogBuilder::default();
        for value in values {
            builder.stats.lines_processed += 1;
            match serde_json::from_value::<Reference>(value) {
                Ok(reference) => builder.push(reference),
                Err(e) => builder.parse_failed(&e),
            }
        }
        Ok(builder.finish())
    }

    /// Read one record per line; blank lines are ignored
    pub fn from_json_lines<R: BufRead>(reader: R) -> Result<(Self, LoadStats)> {
        let mut builder = CatalogBuilder::default();

        for line_result in reader.lines() {
            let line = line_result.context("Failed to read line from references")?;
            if line.trim().is_empty() {
                continue;
            }

            builder.stats.lines_processed += 1;
            match serde_json::from_str::<Reference>(&line) {
                Ok(reference) => builder.push(reference),
                Err(e) => builder.parse_failed(&e),
            }
        }
        Ok(builder.finish())
    }
}

#[derive(Default)]
struct CatalogBuilder {
    references: Vec<Reference>,
    seen_ids: HashSet<String>,
    stats: LoadStats,
}

impl CatalogBuilder {
    fn push(&mut self, reference: Reference) {
        if reference.relevance_score > MAX_RELEVANCE_SCORE {
            self.stats.out_of_range += 1;
            return;
        }
        if !self.seen_ids.insert(reference.id.clone()) {
            self.stats.duplicates += 1;
            return;
        }
        self.stats.records_loaded += 1;
        self.references.push(reference);
    }

    fn parse_failed(&mut self, err: &serde_json::Error) {
        if self.stats.parse_failures < MAX_LOGGED_PARSE_FAILURES {
            warn!("Failed to parse reference {}: {}", self.stats.lines_processed, err);
        }
        self.stats.parse_failures += 1;
    }

    fn finish(self) -> (ReferenceCatalog, LoadStats) {
        (ReferenceCatalog::new(self.references), self.stats)
    }
}
