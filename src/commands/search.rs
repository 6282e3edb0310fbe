use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

use reference_analyzer::common::{
    create_spinner, render_results, setup_logging, write_results_json, Reference,
};
use reference_analyzer::{Analyzer, FilterField, FilterRequest, ReferenceCatalog};

use crate::cli::{OutputFormat, SearchArgs};

/// Build the filter request from command-line flags, one field at a time
pub fn request_from_args(args: &SearchArgs) -> FilterRequest {
    FilterRequest::new()
        .with_field(FilterField::Category, args.category.as_str())
        .with_field(FilterField::Type, args.reference_type.as_str())
        .with_field(FilterField::DateRange, args.date_range.as_str())
        .with_field(FilterField::Keywords, args.keywords.as_str())
        .with_field(FilterField::Source, args.source.as_str())
}

fn report_request(request: &FilterRequest) {
    for field in request.unrecognized_fields() {
        warn!(
            "Unrecognized {} '{}'; it will not match any reference",
            field,
            request.field(field)
        );
    }
    for field in request.inert_fields() {
        info!("{} '{}' is accepted but not applied", field, request.field(field));
    }
}

pub async fn run_search_async(args: SearchArgs) -> Result<Vec<Reference>> {
    setup_logging(&args.log_level)?;

    let catalog = Arc::new(ReferenceCatalog::open(args.references.as_deref())?);
    let request = request_from_args(&args);
    report_request(&request);

    let analyzer = Analyzer::new(catalog, Duration::from_millis(args.latency_ms));

    let spinner = create_spinner("Searching references...");
    let results = analyzer.submit_analysis(request).await;
    spinner.finish_and_clear();

    // a fresh analyzer has nothing in flight
    let results = results.context("Analysis did not run")?;

    match args.format {
        OutputFormat::Text => print!("{}", render_results(&results)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
            println!("{}", json);
        }
    }

    if let Some(path) = &args.output {
        write_results_json(path, &results)?;
        info!("Wrote {} references to {}", results.len(), path);
    }

    Ok(results)
}

pub fn run_search(args: SearchArgs) -> Result<Vec<Reference>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_search_async(args))
}
