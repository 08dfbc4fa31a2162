// src/study/loader.rs
use std::fs;
use std::path::Path;

use crate::study::models::StudyDocument;
use crate::utils::error::IngestError;

/// Loads an annotated study document from a JSON file and validates the
/// classifier output against the section list.
pub fn load_study<P: AsRef<Path>>(path: P) -> Result<StudyDocument, IngestError> {
    let path = path.as_ref();
    tracing::debug!("Loading annotated study from: {}", path.display());

    let raw = fs::read_to_string(path)?;
    let document = parse_study(path, &raw)?;

    tracing::info!(
        "Loaded study {} ({} sections)",
        document.id,
        document.sections.len()
    );
    Ok(document)
}

fn parse_study(path: &Path, raw: &str) -> Result<StudyDocument, IngestError> {
    let document: StudyDocument =
        serde_json::from_str(raw).map_err(|source| IngestError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    validate(&document)?;
    Ok(document)
}

/// The attribute matrix must carry exactly one row per section, every score
/// inside [0, 1].
fn validate(document: &StudyDocument) -> Result<(), IngestError> {
    if document.attributes.len() != document.sections.len() {
        return Err(IngestError::ScoreRowMismatch {
            rows: document.attributes.len(),
            sections: document.sections.len(),
        });
    }

    for (section, row) in document.attributes.rows().iter().enumerate() {
        if let Some(&score) = row.iter().find(|score| !(0.0..=1.0).contains(*score)) {
            return Err(IngestError::ScoreOutOfRange { section, score });
        }
    }

    Ok(())
}
