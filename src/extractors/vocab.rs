// src/extractors/vocab.rs
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::utils::error::IngestError;

/// Built-in keywords naming countable study populations.
const SAMPLE_KEYWORDS: &[&str] = &[
    "adults",
    "animals",
    "cases",
    "children",
    "individuals",
    "men",
    "participants",
    "patients",
    "people",
    "persons",
    "samples",
    "studies",
    "subjects",
    "women",
];

/// Keyword vocabulary for sample-size token recognition. Immutable once
/// built; injected into the extractor rather than read from global state.
#[derive(Debug, Clone)]
pub struct Vocab {
    sample: HashSet<String>,
}

impl Vocab {
    /// Keywords marking a token as a countable quantity of subjects.
    /// All lowercase.
    pub fn sample(&self) -> &HashSet<String> {
        &self.sample
    }

    /// Builds the default vocabulary extended with keywords read from a
    /// plain-text file: one keyword per line, `#` starts a comment.
    pub fn with_extra_keywords<P: AsRef<Path>>(path: P) -> Result<Self, IngestError> {
        let mut vocab = Self::default();

        let raw = fs::read_to_string(path.as_ref())?;
        for line in raw.lines() {
            let keyword = line.trim();
            if keyword.is_empty() || keyword.starts_with('#') {
                continue;
            }
            vocab.sample.insert(keyword.to_lowercase());
        }

        tracing::debug!(
            "Vocabulary loaded: {} sample keywords ({} built-in)",
            vocab.sample.len(),
            SAMPLE_KEYWORDS.len()
        );
        Ok(vocab)
    }
}

impl Default for Vocab {
    fn default() -> Self {
        Self {
            sample: SAMPLE_KEYWORDS
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_keywords_present() {
        let vocab = Vocab::default();
        assert!(vocab.sample().contains("patients"));
        assert!(vocab.sample().contains("subjects"));
        assert!(!vocab.sample().contains("accountants"));
    }

    #[test]
    fn test_extra_keywords_merge_lowercased() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "# countable nouns").unwrap();
        writeln!(file, "Volunteers").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "households").unwrap();

        let vocab = Vocab::with_extra_keywords(&path).unwrap();
        assert!(vocab.sample().contains("volunteers"));
        assert!(vocab.sample().contains("households"));
        assert!(vocab.sample().contains("patients")); // built-ins still there
        assert!(!vocab.sample().contains("# countable nouns"));
    }
}
