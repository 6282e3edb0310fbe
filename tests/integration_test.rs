use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Output};
use tempfile::tempdir;

use reference_analyzer::{FilterField, FilterRequest, Reference, ReferenceCatalog};

fn analyzer_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_reference-analyzer"))
}

fn run_search(extra: &[&str]) -> Output {
    analyzer_cmd()
        .args(["search", "--latency-ms", "0", "--log-level", "ERROR"])
        .args(extra)
        .output()
        .expect("Failed to run search")
}

fn result_ids(output: &Output) -> Vec<String> {
    let results: Vec<Reference> =
        serde_json::from_slice(&output.stdout).expect("stdout should be a JSON array");
    results.into_iter().map(|r| r.id).collect()
}

/// Write a small catalog as JSONL, with one unparseable line in the middle
fn create_test_references(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("refs.jsonl");
    let mut file = File::create(&path).unwrap();

    let mut extra = ReferenceCatalog::sample().references()[1].clone();
    extra.id = "fin-2".to_string();
    extra.title = "Microfinance et inclusion".to_string();
    extra.abstract_text = "Une revue des programmes de microcrédit.".to_string();
    extra.reference_type = reference_analyzer::ReferenceType::Book;

    for reference in ReferenceCatalog::sample().references() {
        writeln!(file, "{}", serde_json::to_string(reference).unwrap()).unwrap();
    }
    writeln!(file, "this is not json").unwrap();
    writeln!(file, "{}", serde_json::to_string(&extra).unwrap()).unwrap();

    path
}

#[test]
fn test_search_help() {
    let status = analyzer_cmd()
        .args(["search", "--help"])
        .status()
        .expect("Failed to run search --help");

    assert!(status.success(), "Search --help should succeed");
}

#[test]
fn test_batch_help() {
    let status = analyzer_cmd()
        .args(["batch", "--help"])
        .status()
        .expect("Failed to run batch --help");

    assert!(status.success(), "Batch --help should succeed");
}

#[test]
fn test_search_all_returns_sample_in_order() {
    let output = run_search(&["--format", "json"]);
    assert!(output.status.success());
    assert_eq!(result_ids(&output), vec!["1", "2", "3"]);
}

#[test]
fn test_search_by_category() {
    let output = run_search(&["--format", "json", "--category", "finance"]);
    assert!(output.status.success());
    assert_eq!(result_ids(&output), vec!["2"]);
}

#[test]
fn test_search_by_keyword() {
    let output = run_search(&["--format", "json", "--keywords", "durable"]);
    assert!(output.status.success());
    assert_eq!(result_ids(&output), vec!["3"]);
}

#[test]
fn test_search_comma_only_keywords_match_nothing() {
    let output = run_search(&["--format", "json", "--keywords", ","]);
    assert!(output.status.success(), "Empty results are not an error");
    assert!(result_ids(&output).is_empty());
}

#[test]
fn test_search_inert_fields_accepted() {
    let output = run_search(&[
        "--format",
        "json",
        "--date-range",
        "last-month",
        "--source",
        "arxiv",
    ]);
    assert!(output.status.success());
    assert_eq!(result_ids(&output), vec!["1", "2", "3"]);
}

#[test]
fn test_search_text_empty_state() {
    let output = run_search(&["--category", "health"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No references found."));
}

#[test]
fn test_search_text_listing() {
    let output = run_search(&["--type", "article"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Analysis results: 1 reference found"));
    assert!(stdout.contains("Intelligence artificielle"));
}

#[test]
fn test_search_with_reference_file_and_output() {
    let dir = tempdir().unwrap();
    let refs = create_test_references(dir.path());
    let out = dir.path().join("results.json");

    let output = run_search(&[
        "--format",
        "json",
        "--references",
        refs.to_str().unwrap(),
        "--category",
        "finance",
        "--output",
        out.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(result_ids(&output), vec!["2", "fin-2"]);

    let written: Vec<Reference> =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written.len(), 2);
}

#[test]
fn test_search_missing_reference_file_fails() {
    let output = run_search(&["--references", "/nonexistent/refs.jsonl"]);
    assert!(!output.status.success());
}

#[test]
fn test_batch_run() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("requests.jsonl");
    let output_path = dir.path().join("results.jsonl");

    let requests = [
        FilterRequest::new(),
        FilterRequest::new().with_field(FilterField::Category, "finance"),
        FilterRequest::new().with_field(FilterField::Keywords, ","),
        FilterRequest::new()
            .with_field(FilterField::Keywords, " neurones , durable ")
            .with_field(FilterField::Source, "pubmed"),
    ];

    let mut file = File::create(&input).unwrap();
    for request in &requests[..2] {
        writeln!(file, "{}", serde_json::to_string(request).unwrap()).unwrap();
    }
    writeln!(file).unwrap();
    writeln!(file, "{{not json").unwrap();
    for request in &requests[2..] {
        writeln!(file, "{}", serde_json::to_string(request).unwrap()).unwrap();
    }
    drop(file);

    let status = analyzer_cmd()
        .args([
            "batch",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output_path.to_str().unwrap(),
            "--log-level",
            "ERROR",
        ])
        .status()
        .expect("Failed to run batch");
    assert!(status.success(), "Batch should succeed");

    let reader = BufReader::new(File::open(&output_path).unwrap());
    let lines: Vec<serde_json::Value> = reader
        .lines()
        .map(|l| serde_json::from_str(&l.unwrap()).unwrap())
        .collect();

    assert_eq!(lines.len(), 4, "Malformed and blank lines are skipped");

    let line_numbers: Vec<u64> = lines.iter().map(|l| l["line"].as_u64().unwrap()).collect();
    assert_eq!(line_numbers, vec![1, 2, 5, 6]);

    let counts: Vec<u64> = lines.iter().map(|l| l["count"].as_u64().unwrap()).collect();
    assert_eq!(counts, vec![3, 1, 0, 2]);

    assert_eq!(lines[1]["ids"], serde_json::json!(["2"]));
    assert_eq!(lines[3]["ids"], serde_json::json!(["1", "3"]));
    assert_eq!(lines[3]["request"]["source"], "pubmed");
}
