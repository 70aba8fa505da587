use super::normalizer::trim_terminal_punctuation;
use super::DEFAULT_ROLE_LINE;

/// Case-insensitive (ASCII) test that `text` begins with `word` followed by
/// an ASCII word boundary.
pub(crate) fn starts_with_word(text: &str, word: &str) -> bool {
    let Some(head) = text.get(..word.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(word) {
        return false;
    }
    match text[word.len()..].chars().next() {
        Some(c) => !(c.is_ascii_alphanumeric() || c == '_'),
        None => true,
    }
}

/// Build the canonical `You are ...` line from whatever the user typed.
///
/// Accepts a full sentence ("You are a senior analyst"), a noun phrase with
/// an article ("an expert reviewer") or a bare noun phrase ("data analyst")
/// and never doubles the article or the `You are` prefix.
pub fn normalize_role(text: &str) -> String {
    if text.trim().is_empty() {
        return DEFAULT_ROLE_LINE.to_string();
    }

    // Punctuation-only input still gets the article: "?!" -> "You are a ."
    let role = trim_terminal_punctuation(text);

    if starts_with_word(role, "you are") {
        return format!("{}.", role);
    }

    if starts_with_word(role, "a") || starts_with_word(role, "an") {
        format!("You are {}.", role)
    } else {
        format!("You are a {}.", role)
    }
}
