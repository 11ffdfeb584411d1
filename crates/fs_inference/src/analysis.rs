//! Prompts sent to the model and validation of what comes back.
//!
//! Completions are untrusted text. The analysis parser never fails on a
//! malformed answer: fields that do not validate fall back to empty values and
//! a completion without any JSON object becomes a plain summary.

use fs_core::{AiAnalysis, Error, Result};
use serde_json::{Map, Value};
use tracing::warn;

/// Number of pro and con points kept from a completion.
pub const MAX_POINTS: usize = 3;

pub const SYSTEM_PROMPT: &str =
    "You are a careful news analyst. You describe articles neutrally and answer in the exact format requested.";

pub fn analysis_prompt(content: &str, max_chars: usize) -> String {
    format!(
        "Analyze the following news article. Respond with only a JSON object, no other text, \
         using these keys:\n\
         - \"summary\": a concise paragraph summarizing the article\n\
         - \"pros\": an array of exactly 3 strings, the strongest points of the article's argument\n\
         - \"cons\": an array of exactly 3 strings, the weaknesses, omissions or counterpoints\n\n\
         Article:\n{}",
        truncate_content(content, max_chars)
    )
}

pub fn topic_prompt(content: &str, max_chars: usize) -> String {
    format!(
        "What is the main topic of the following news article? Answer with a short search \
         phrase of at most five words and nothing else.\n\nArticle:\n{}",
        truncate_content(content, max_chars)
    )
}

/// Cuts `content` to at most `max_chars` characters.
pub fn truncate_content(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

/// Turns a model completion into an [`AiAnalysis`].
///
/// Only an empty completion is an error.
pub fn parse_analysis(completion: &str) -> Result<AiAnalysis> {
    let text = strip_code_fence(completion.trim());
    if text.is_empty() {
        return Err(Error::Inference("Model returned an empty analysis".to_string()));
    }

    let Some(obj) = json_object(text) else {
        warn!("Model analysis is not a JSON object, keeping the raw text as summary");
        return Ok(AiAnalysis {
            summary: text.to_string(),
            pros: Vec::new(),
            cons: Vec::new(),
        });
    };

    let summary = match obj.get("summary").and_then(Value::as_str) {
        Some(summary) => summary.trim().to_string(),
        None => {
            warn!("Model analysis has no string summary");
            String::new()
        }
    };

    Ok(AiAnalysis {
        summary,
        pros: points(&obj, "pros"),
        cons: points(&obj, "cons"),
    })
}

/// Reduces a topic completion to a bare phrase.
pub fn clean_topic(completion: &str) -> Result<String> {
    let line = completion
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();

    let line = match line.split_once(':') {
        Some((label, rest)) if label.trim().eq_ignore_ascii_case("topic") => rest.trim(),
        _ => line,
    };

    let topic = line
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '*' || c == '`')
        .trim_end_matches('.')
        .trim();

    if topic.is_empty() {
        return Err(Error::Inference("Model returned an empty topic".to_string()));
    }
    Ok(topic.to_string())
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.trim_end().trim_end_matches("```");
    // a language tag only counts when it sits alone on the opening line
    match rest.split_once('\n') {
        Some((tag, body)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => body.trim(),
        _ => rest.trim(),
    }
}

fn json_object(text: &str) -> Option<Map<String, Value>> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Object(obj)) => Some(obj),
        _ => None,
    }
}

fn points(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    let Some(items) = obj.get(key).and_then(Value::as_array) else {
        warn!("Model analysis has no {} array", key);
        return Vec::new();
    };

    let points: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .take(MAX_POINTS)
        .map(str::to_string)
        .collect();

    if points.len() != MAX_POINTS {
        warn!("Model analysis has {} usable {} instead of {}", points.len(), key, MAX_POINTS);
    }
    points
}
