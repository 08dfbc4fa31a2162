// src/main.rs
mod extractors;
mod numwords;
mod storage;
mod study;
mod utils;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use extractors::sample::SampleExtractor;
use extractors::vocab::Vocab;
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the study sample extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Annotated study JSON file, or a directory of them
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for extraction results
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Additional sample keywords file (one keyword per line)
    #[arg(short, long)]
    keywords: Option<PathBuf>,

    /// Debug mode - save per-section attribute score reports
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Build the keyword vocabulary
    let vocab = match &args.keywords {
        Some(path) => Vocab::with_extra_keywords(path)?,
        None => Vocab::default(),
    };

    // 5. Initialize the extractor
    let extractor = SampleExtractor::new();

    // 6. Collect input documents
    let inputs = collect_inputs(&args.input)?;
    if inputs.is_empty() {
        return Err(AppError::Config(format!(
            "No study documents found under {}",
            args.input.display()
        )));
    }
    tracing::info!("Found {} study documents", inputs.len());

    // 7. Process each document
    let mut success_count = 0;
    let mut failure_count = 0;

    for path in inputs {
        tracing::info!("Processing document: {}", path.display());

        let document = match study::loader::load_study(&path) {
            Ok(document) => document,
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                failure_count += 1;
                continue;
            }
        };

        let result = extractor.extract(&document.sections, &document.attributes, &vocab);
        match (&result.size, &result.sample, &result.method) {
            (None, None, None) => {
                tracing::warn!("No sample attributes found in {}", document.id)
            }
            _ => tracing::info!(
                "Extracted from {}: size={:?} method_found={}",
                document.id,
                result.size,
                result.method.is_some()
            ),
        }

        if args.debug {
            let report_path = storage.document_dir(&document.id).join("scores_debug.txt");
            if let Some(parent) = report_path.parent() {
                fs::create_dir_all(parent)?;
            }
            if let Err(e) =
                utils::score_debug::write_score_report(&report_path, &document.sections, &document.attributes)
            {
                tracing::warn!("Failed to write score report: {}", e);
            }
        }

        // Save the extraction result
        match storage.save_result(&document.id, &result) {
            Ok(path) => tracing::info!("Saved extraction result to: {}", path.display()),
            Err(e) => {
                tracing::error!("Failed to save extraction result: {}", e);
                failure_count += 1;
                continue;
            }
        }

        // Save the extraction metadata
        match storage.save_result_metadata(&document.id, document.sections.len(), &result) {
            Ok(path) => tracing::info!("Saved extraction metadata to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save extraction metadata: {}", e),
        }

        success_count += 1;
    }

    tracing::info!(
        "Processing finished. Success: {}, Failures: {}",
        success_count,
        failure_count
    );

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!(
            "Failed to process any of {} study documents",
            failure_count
        )));
    }

    Ok(())
}

/// Expands the input path into the list of study documents to process:
/// a single file as-is, or every `*.json` in a directory (sorted for
/// deterministic processing order).
fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>, AppError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if path.is_dir() {
        let mut files: Vec<PathBuf> = fs::read_dir(path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        return Ok(files);
    }

    Err(AppError::Config(format!(
        "Input path not found: {}",
        path.display()
    )))
}
