use anyhow::{Context, Result};
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::time::Instant;

use reference_analyzer::common::{create_count_progress_bar, format_elapsed, setup_logging, BatchStats};
use reference_analyzer::{match_references, FilterRequest, ReferenceCatalog};

use crate::cli::BatchArgs;

/// One output line of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// 1-based line number of the request in the input file
    pub line: usize,
    pub request: FilterRequest,
    pub count: usize,
    pub ids: Vec<String>,
}

fn load_requests(path: &str, stats: &mut BatchStats) -> Result<Vec<(usize, FilterRequest)>> {
    let file = File::open(path).with_context(|| format!("Failed to open input file: {}", path))?;
    let reader = BufReader::new(file);

    let mut requests = Vec::new();
    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result.context("Failed to read line")?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<FilterRequest>(&line) {
            Ok(request) => requests.push((idx + 1, request)),
            Err(e) => {
                warn!("Failed to parse request on line {}: {}", idx + 1, e);
                stats.skipped_lines += 1;
            }
        }
    }
    Ok(requests)
}

pub fn run_batch(args: BatchArgs) -> Result<BatchStats> {
    let start_time = Instant::now();

    setup_logging(&args.log_level)?;

    info!("Starting batch analysis");
    info!("Input: {}", args.input);
    info!("Output: {}", args.output);

    let catalog = ReferenceCatalog::open(args.references.as_deref())?;

    let mut stats = BatchStats::default();
    let requests = load_requests(&args.input, &mut stats)?;
    stats.requests = requests.len();
    info!("Loaded {} requests", requests.len());

    let progress = create_count_progress_bar(requests.len() as u64);

    // each request is independent; collect keeps input order
    let results: Vec<BatchResult> = requests
        .into_par_iter()
        .map(|(line, request)| {
            let ids: Vec<String> = match_references(catalog.references(), &request)
                .into_iter()
                .map(|r| r.id.clone())
                .collect();
            progress.inc(1);
            BatchResult {
                line,
                request,
                count: ids.len(),
                ids,
            }
        })
        .collect();

    progress.finish_with_message("Matching complete");

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create output file: {}", args.output))?;
    let mut writer = BufWriter::new(file);

    for result in &results {
        if result.count == 0 {
            stats.empty_results += 1;
        }
        stats.total_matches += result.count;
        writeln!(writer, "{}", serde_json::to_string(result)?)?;
    }
    writer.flush()?;

    info!("==================== BATCH SUMMARY ====================");
    info!("Total execution time: {}", format_elapsed(start_time.elapsed()));
    info!("Catalog size: {}", catalog.len());
    info!("Requests matched: {}", stats.requests);
    info!("Skipped lines: {}", stats.skipped_lines);
    info!("Requests with no results: {}", stats.empty_results);
    info!("Total matches: {}", stats.total_matches);
    info!("Output: {}", args.output);
    info!("=======================================================");

    Ok(stats)
}
