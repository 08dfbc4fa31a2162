// src/extractors/sample.rs

// --- Imports ---
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::extractors::vocab::Vocab;
use crate::numwords;
use crate::study::models::{Attribute, AttributeScores, Dep, Pos, Section, Token};

// --- Constants ---
/// Minimum classifier confidence before a section is trusted for a category.
pub const MIN_CONFIDENCE: f64 = 0.3;

// --- Regex Patterns (Lazy Static) ---
// Merges split thousands-groups like "1 000" into "1000". Single
// left-to-right pass over non-overlapping matches.
static DIGIT_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+(\d+)").expect("Failed to compile DIGIT_RUN_RE"));

// --- Data Structures ---
/// What extraction produced for one study. Every field is optional; absence
/// means the attribute was not found, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Normalized sample size, e.g. "30" for "thirty patients".
    pub size: Option<String>,
    /// Full text of the section describing the sample.
    pub sample: Option<String>,
    /// Full text of the section describing the sampling method.
    pub method: Option<String>,
}

// --- Main Extractor Structure ---
pub struct SampleExtractor;

impl SampleExtractor {
    pub fn new() -> Self {
        Self {}
    }

    /// Extracts sample size, sample and sampling method from a study's
    /// sections using the per-section attribute predictions.
    pub fn extract(
        &self,
        sections: &[Section],
        scores: &AttributeScores,
        vocab: &Vocab,
    ) -> ExtractionResult {
        let (method, sample_section) = self.select_best(sections, scores);

        let mut result = ExtractionResult {
            size: None,
            sample: None,
            method: method.map(|text| text.to_string()),
        };

        if let Some(section) = sample_section {
            // Attempt to extract size from the sample section's tokens
            result.size = self.find_size_token(&section.tokens, vocab.sample());
            result.sample = Some(section.text.clone());
        }

        result
    }

    /// Picks the best-scoring section for the sample-method and sample-size
    /// categories. Requires a minimum level of confidence for each best
    /// prediction; below the floor the category is simply not found.
    fn select_best<'a>(
        &self,
        sections: &'a [Section],
        scores: &AttributeScores,
    ) -> (Option<&'a str>, Option<&'a Section>) {
        let method = self
            .best_section(sections, scores, Attribute::SampleMethod)
            .map(|section| section.text.as_str());
        let sample = self.best_section(sections, scores, Attribute::SampleSize);

        (method, sample)
    }

    fn best_section<'a>(
        &self,
        sections: &'a [Section],
        scores: &AttributeScores,
        attribute: Attribute,
    ) -> Option<&'a Section> {
        let (index, score) = scores.best(attribute)?;
        if score < MIN_CONFIDENCE {
            tracing::debug!(
                "Best {:?} candidate (section {}) below confidence floor: {:.3}",
                attribute,
                index,
                score
            );
            return None;
        }

        let section = sections.get(index)?;
        tracing::debug!(
            "Selected section '{}' for {:?} ({:.3})",
            section.name,
            attribute,
            score
        );
        Some(section)
    }

    /// Attempts to find a token that matches keywords having a numeric
    /// descriptor, i.e. 34 subjects, 30 patients, ten studies. First
    /// qualifying token in sequence order wins.
    fn find_size_token(&self, tokens: &[Token], keywords: &HashSet<String>) -> Option<String> {
        tokens
            .iter()
            .find_map(|token| self.match_token(token, keywords))
    }

    /// Compares a token against the keyword set, joining its sequential
    /// numeric children into a single number. A keyword match with no
    /// numeric children does not qualify.
    fn match_token(&self, token: &Token, keywords: &HashSet<String>) -> Option<String> {
        if !keywords.contains(&token.text.to_lowercase()) {
            return None;
        }

        let mut matches: Vec<String> = Vec::new();
        for child in &token.children {
            if self.is_number_token(child) {
                matches.push(self.normalize_number(child));
            } else if !matches.is_empty() {
                // numeric run interrupted
                break;
            }
        }

        if matches.is_empty() {
            None
        } else {
            Some(matches.concat())
        }
    }

    /// Determines if a token represents a numeric modifier:
    ///  - text is all digits or POS is NUM
    ///  - dependency relation is amod or nummod
    ///  - no child is a bracket (ignore citations [1], [2], etc)
    fn is_number_token(&self, token: &Token) -> bool {
        (token.is_all_digits() || token.pos == Pos::Num)
            && matches!(token.dep, Dep::Amod | Dep::Nummod)
            && !token.children.iter().any(|child| child.text == "[")
    }

    /// Builds the token's numeric text with its preceding (left) numeric
    /// prefixes, then normalizes to a digit string where possible. Falls
    /// back to the unconverted text when word conversion fails.
    fn normalize_number(&self, token: &Token) -> String {
        // Root text plus contiguous numeric left siblings, nearest first
        let mut text = token.text.clone();
        for left in token.lefts.iter().rev() {
            if left.is_all_digits() || left.pos == Pos::Num {
                text = format!("{} {}", left.text, text);
            } else {
                break;
            }
        }

        // Format text for numeric parsing
        let text = text.replace(',', "");
        let text = DIGIT_RUN_RE.replace_all(&text, "${1}${2}").into_owned();

        if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            return text;
        }

        // Convert numeric words to numbers, keeping the raw text on failure
        match numwords::convert(&text) {
            Ok(converted) => converted,
            Err(error) => {
                tracing::debug!("Number-word conversion failed for '{}': {}", text, error);
                text
            }
        }
    }
}

impl Default for SampleExtractor {
    fn default() -> Self {
        Self::new()
    }
}
