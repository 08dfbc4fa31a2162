// src/utils/error.rs
#![allow(dead_code)]
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed study document {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Attribute scores have {rows} rows for {sections} sections")]
    ScoreRowMismatch { rows: usize, sections: usize },

    #[error("Attribute score {score} for section {section} is outside [0, 1]")]
    ScoreOutOfRange { section: usize, score: f64 },
}

/// Failure modes of the number-word conversion collaborator. Callers treat
/// all of these as "keep the original text", never as fatal.
#[derive(Error, Debug)]
pub enum NumWordsError {
    #[error("Unrecognized number word: {0}")]
    UnknownWord(String),

    #[error("No numeric content to convert")]
    Empty,

    #[error("Number too large to represent")]
    Overflow,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Ingest failed: {0}")]
    Ingest(#[from] IngestError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
