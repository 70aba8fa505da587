//! Recover the five fields from canonical (or hand-edited) prompt text.

use super::normalizer::trim_terminal_punctuation;
use super::{PromptField, PromptFields};

/// Line prefixes in match precedence order. Matching is ASCII
/// case-insensitive and anchored at the start of the trimmed line.
pub const LINE_PREFIXES: [(PromptField, &str); 5] = [
    (PromptField::Role, "you are"),
    (PromptField::Goal, "your goal is:"),
    (PromptField::Context, "context:"),
    (PromptField::Constraints, "constraints:"),
    (
        PromptField::OutputFormat,
        "provide the answer in the following format:",
    ),
];

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}

/// Classify a single trimmed line. The first matching prefix wins. The role
/// line is kept whole; other fields lose their label and terminal
/// punctuation.
pub fn classify_line(line: &str) -> Option<(PromptField, String)> {
    LINE_PREFIXES.iter().find_map(|(field, prefix)| {
        let rest = strip_prefix_ignore_case(line, prefix)?;
        let value = match field {
            PromptField::Role => line.to_string(),
            _ => trim_terminal_punctuation(rest).to_string(),
        };
        Some((*field, value))
    })
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split("\r\n")
        .flat_map(|chunk| chunk.split(['\n', '\r']))
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Parse prompt text into fields. Never fails: unrecognized lines are
/// ignored and fields with no matching line stay empty.
///
/// When several lines match the same field the last one wins. This is a
/// left-to-right fold with no early exit, so a later `Context:` line
/// replaces an earlier one.
pub fn parse_prompt(text: &str) -> PromptFields {
    split_lines(text)
        .filter_map(classify_line)
        .fold(PromptFields::default(), |mut fields, (field, value)| {
            fields.set(field, value);
            fields
        })
}
