// src/numwords/mod.rs
//! English number-word conversion.
//!
//! Turns spelled-out numbers, optionally mixed with digit tokens, into a
//! digit string: "thirty four" -> "34", "two thousand and five" -> "2005",
//! "nineteen eighty five" -> "1985". Adjacent groups that do not compose
//! arithmetically are concatenated, which matches how year-like phrases are
//! normally read out.

use crate::utils::error::NumWordsError;

/// Converts a phrase of English number words into its digit-string
/// equivalent. Fails on unknown words, empty numeric content or overflow;
/// it never panics.
pub fn convert(text: &str) -> Result<String, NumWordsError> {
    let mut groups: Vec<u64> = Vec::new();
    let mut total: u64 = 0;
    let mut current: u64 = 0;
    let mut seen_number = false;

    // A group is flushed whenever the next word cannot extend the number
    // built so far (e.g. "nineteen" followed by "eighty").
    let mut flush = |total: &mut u64, current: &mut u64| {
        groups.push(total.saturating_add(*current));
        *total = 0;
        *current = 0;
    };

    for word in text
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|word| !word.is_empty())
    {
        let word = word.to_lowercase();

        if word == "and" {
            continue;
        }

        if word.chars().all(|c| c.is_ascii_digit()) {
            let value: u64 = word.parse().map_err(|_| NumWordsError::Overflow)?;
            if current != 0 {
                flush(&mut total, &mut current);
            }
            current = value;
            seen_number = true;
        } else if let Some(value) = unit_value(&word) {
            if current % 10 != 0 {
                // units slot already occupied
                flush(&mut total, &mut current);
            }
            current = current.checked_add(value).ok_or(NumWordsError::Overflow)?;
            seen_number = true;
        } else if let Some(value) = teen_or_tens_value(&word) {
            if current % 100 != 0 {
                // tens/units slots already occupied
                flush(&mut total, &mut current);
            }
            current = current.checked_add(value).ok_or(NumWordsError::Overflow)?;
            seen_number = true;
        } else if word == "hundred" {
            current = current
                .max(1)
                .checked_mul(100)
                .ok_or(NumWordsError::Overflow)?;
            seen_number = true;
        } else if let Some(scale) = scale_value(&word) {
            let scaled = current
                .max(1)
                .checked_mul(scale)
                .ok_or(NumWordsError::Overflow)?;
            total = total.checked_add(scaled).ok_or(NumWordsError::Overflow)?;
            current = 0;
            seen_number = true;
        } else {
            return Err(NumWordsError::UnknownWord(word));
        }
    }

    if !seen_number {
        return Err(NumWordsError::Empty);
    }
    flush(&mut total, &mut current);

    Ok(groups
        .iter()
        .map(|group| group.to_string())
        .collect::<String>())
}

fn unit_value(word: &str) -> Option<u64> {
    Some(match word {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        _ => return None,
    })
}

fn teen_or_tens_value(word: &str) -> Option<u64> {
    Some(match word {
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    })
}

fn scale_value(word: &str) -> Option<u64> {
    Some(match word {
        "thousand" => 1_000,
        "million" => 1_000_000,
        "billion" => 1_000_000_000,
        _ => return None,
    })
}
