// src/utils/score_debug.rs
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::extractors::sample::MIN_CONFIDENCE;
use crate::study::models::{Attribute, AttributeScores, Section};
use crate::utils::error::AppError;

const CATEGORIES: [(Attribute, &str); 4] = [
    (Attribute::NoMatch, "no_match"),
    (Attribute::Statistic, "statistic"),
    (Attribute::SampleMethod, "method"),
    (Attribute::SampleSize, "size"),
];

/// Writes a plain-text table of per-section attribute scores for inspecting
/// why a section was or wasn't selected. Column maxima are marked with `*`,
/// and only marked scores at or above the confidence floor select a section.
pub fn write_score_report(
    path: &Path,
    sections: &[Section],
    scores: &AttributeScores,
) -> Result<(), AppError> {
    let report = render_score_report(sections, scores);
    fs::write(path, report)?;
    tracing::info!("Saved score report to {}", path.display());
    Ok(())
}

fn render_score_report(sections: &[Section], scores: &AttributeScores) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<4} {:<24} {:>9} {:>9} {:>9} {:>9}",
        "#", "section", "no_match", "statistic", "method", "size"
    );

    let best: Vec<Option<usize>> = CATEGORIES
        .iter()
        .map(|(attribute, _)| scores.best(*attribute).map(|(index, _)| index))
        .collect();

    for (index, (section, row)) in sections.iter().zip(scores.rows()).enumerate() {
        let mut cells: Vec<String> = Vec::new();
        for (column, score) in row.iter().enumerate() {
            let marker = if best[column] == Some(index) { "*" } else { " " };
            cells.push(format!("{:>8.3}{}", score, marker));
        }

        let _ = writeln!(
            out,
            "{:<4} {:<24} {} {} {} {}",
            index,
            truncate(&section.name, 24),
            cells[0],
            cells[1],
            cells[2],
            cells[3]
        );
    }

    let _ = writeln!(out);
    for (attribute, label) in CATEGORIES.iter() {
        let verdict = match scores.best(*attribute) {
            Some((index, score)) if score >= MIN_CONFIDENCE => format!("section {}", index),
            Some(_) => "below confidence floor".to_string(),
            None => "no sections".to_string(),
        };
        let _ = writeln!(out, "{:<10} -> {}", label, verdict);
    }

    out
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        name.chars().take(max - 1).collect::<String>() + "…"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_marks_maxima_and_verdicts() {
        let sections = vec![
            Section {
                name: "introduction".to_string(),
                text: "Intro.".to_string(),
                tokens: Vec::new(),
            },
            Section {
                name: "methods".to_string(),
                text: "Methods.".to_string(),
                tokens: Vec::new(),
            },
        ];
        let scores = AttributeScores::new(vec![
            [0.8, 0.1, 0.1, 0.05],
            [0.1, 0.1, 0.35, 0.25],
        ]);

        let report = render_score_report(&sections, &scores);
        assert!(report.contains("methods"));
        // sample-method clears the floor, sample-size does not
        assert!(report.contains("method     -> section 1"));
        assert!(report.contains("size       -> below confidence floor"));
    }
}
