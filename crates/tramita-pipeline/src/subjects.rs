//! Parse classifier output into normalized subject tags
//!
//! The classifier is asked for a JSON array of short Portuguese subject
//! phrases. Responses arrive messy: markdown fences, stray control
//! characters, the occasional non-string entry. Parsing is lenient per
//! entry but strict about the floor — too few usable subjects means the
//! classification as a whole is not trusted.

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use serde_json::Value;
use tracing::warn;

/// Remove control characters that break JSON decoding
///
/// Keeps newlines and carriage returns; drops everything else below 0x20.
pub fn clean_json_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| matches!(c, '\n' | '\r') || *c >= ' ')
        .collect()
}

/// Extract JSON from a response, handling markdown code blocks
fn extract_json(response: &str) -> String {
    let trimmed = response.trim();
    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return String::new();
        }
        // Skip first line (```json or ```) and last line (```)
        lines[1..lines.len().saturating_sub(1)].join("\n")
    } else {
        trimmed.to_string()
    }
}

/// Normalize one subject phrase
///
/// Keeps at most `word_cap` words, lowercases everything, then capitalizes
/// the first letter of the first word.
pub fn normalize_subject(raw: &str, word_cap: usize) -> String {
    let truncated: Vec<&str> = raw.split_whitespace().take(word_cap).collect();
    let joined = truncated.join(" ").to_lowercase();
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Parse a classifier response into the final subject list
///
/// Non-string entries are skipped with a warning. At most
/// `config.subject_cap` subjects are kept; fewer than
/// `config.subject_floor` usable subjects collapses the whole result to an
/// empty list — a floor on classification confidence.
pub fn parse_subject_response(
    response: &str,
    config: &PipelineConfig,
) -> Result<Vec<String>, PipelineError> {
    let cleaned = clean_json_text(&extract_json(response));
    let json: Value = serde_json::from_str(&cleaned)
        .map_err(|e| PipelineError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let entries = json
        .as_array()
        .ok_or_else(|| PipelineError::InvalidFormat("expected JSON array".to_string()))?;

    let mut subjects = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let Some(raw) = entry.as_str() else {
            warn!(index = idx, "skipping non-string subject entry");
            continue;
        };
        let subject = normalize_subject(raw, config.subject_word_cap);
        if subject.is_empty() {
            continue;
        }
        subjects.push(subject);
        if subjects.len() == config.subject_cap {
            break;
        }
    }

    if subjects.len() < config.subject_floor {
        warn!(
            parsed = subjects.len(),
            floor = config.subject_floor,
            "too few usable subjects, discarding classification"
        );
        return Ok(Vec::new());
    }
    Ok(subjects)
}
