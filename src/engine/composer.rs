use super::normalizer::normalize_sentence;
use super::role::normalize_role;
use super::{PromptField, PromptFields};

/// Collapse any CR/LF runs inside a field value to a single space so each
/// field stays on its own line.
fn single_line(value: &str) -> String {
    if !value.contains(['\r', '\n']) {
        return value.to_string();
    }
    value
        .split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one field as its canonical line.
pub fn compose_line(field: PromptField, value: &str) -> String {
    let value = single_line(value);
    match field {
        PromptField::Role => normalize_role(&value),
        _ => format!(
            "{} {}",
            field.label(),
            normalize_sentence(&value, field.default_text())
        ),
    }
}

/// Join the five fields into the canonical prompt: exactly five lines, in
/// [`PromptField::ALL`] order, blank fields replaced by placeholders.
pub fn compose_prompt(fields: &PromptFields) -> String {
    PromptField::ALL
        .iter()
        .map(|field| compose_line(*field, fields.get(*field)))
        .collect::<Vec<_>>()
        .join("\n")
}
