use anyhow::Result;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

use crate::config::LintConfig;

/// Phrase whose presence marks a role statement.
pub const ROLE_MARKER: &str = "you are";
/// Verbs that signal a concrete goal.
pub const GOAL_VERBS: [&str; 7] = [
    "generate",
    "create",
    "design",
    "write",
    "analyze",
    "summarize",
    "list",
];
/// Terms that signal a requested output shape.
pub const OUTPUT_FORMAT_TERMS: [&str; 6] = ["format", "table", "list", "diagram", "json", "code"];
/// Minimum trimmed prompt length, in UTF-16 code units.
pub const MIN_PROMPT_LENGTH: usize = 200;

static DEFAULT_LINTER: Lazy<PromptLinter> = Lazy::new(|| PromptLinter {
    role_marker: ROLE_MARKER.to_string(),
    goal_pattern: keyword_pattern(&GOAL_VERBS[..]).expect("valid goal verb pattern"),
    format_pattern: keyword_pattern(&OUTPUT_FORMAT_TERMS[..]).expect("valid format term pattern"),
    goal_verbs: GOAL_VERBS.iter().map(|s| s.to_string()).collect(),
    format_terms: OUTPUT_FORMAT_TERMS.iter().map(|s| s.to_string()).collect(),
    min_length: MIN_PROMPT_LENGTH,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Error, // hard defect
    Warning, // soft defect
    Success,
}

impl Status {
    fn icon(&self) -> &'static str {
        match self {
            Status::Error => "✖",
            Status::Warning => "⚠",
            Status::Success => "✔",
        }
    }
}

/// Identifier of one of the four checks, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckId {
    #[serde(rename = "role")]
    Role,
    #[serde(rename = "goal")]
    Goal,
    #[serde(rename = "output-format")]
    OutputFormat,
    #[serde(rename = "length")]
    Length,
}

impl CheckId {
    pub const ALL: [CheckId; 4] = [
        CheckId::Role,
        CheckId::Goal,
        CheckId::OutputFormat,
        CheckId::Length,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::Role => "role",
            CheckId::Goal => "goal",
            CheckId::OutputFormat => "output-format",
            CheckId::Length => "length",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintResult {
    pub id: CheckId,
    pub label: String,
    pub status: Status,
}

/// Per-status tally over a set of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LintSummary {
    pub errors: usize,
    pub warnings: usize,
    pub successes: usize,
}

impl LintSummary {
    pub fn from_results(results: &[LintResult]) -> Self {
        let count = |status: Status| results.iter().filter(|r| r.status == status).count();
        Self {
            errors: count(Status::Error),
            warnings: count(Status::Warning),
            successes: count(Status::Success),
        }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.successes
    }
}

impl fmt::Display for LintSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        write!(
            f,
            "{} passed, {} warning{}, {} error{}.",
            self.successes,
            self.warnings,
            plural(self.warnings),
            self.errors,
            plural(self.errors)
        )
    }
}

/// Build an "any of these words, anywhere" matcher over ASCII-lowercased
/// text. Keywords are lowercased the same way, so case folding is ASCII only.
fn keyword_pattern(keywords: &[impl AsRef<str>]) -> Result<Regex> {
    let alternation = keywords
        .iter()
        .map(|k| k.as_ref().trim().to_ascii_lowercase())
        .filter(|k| !k.is_empty())
        .map(|k| regex::escape(&k))
        .collect::<Vec<_>>()
        .join("|");
    let regex = RegexBuilder::new(&format!("({})", alternation)).build()?;
    Ok(regex)
}

fn fold_case(text: &str) -> Cow<'_, str> {
    if text.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(text.to_ascii_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

/// Structural heuristics over free-form prompt text.
#[derive(Debug, Clone)]
pub struct PromptLinter {
    role_marker: String,
    goal_pattern: Regex,
    format_pattern: Regex,
    goal_verbs: Vec<String>,
    format_terms: Vec<String>,
    min_length: usize,
}

impl Default for PromptLinter {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptLinter {
    pub fn new() -> Self {
        DEFAULT_LINTER.clone()
    }

    /// Build a linter from configured thresholds and keyword lists.
    pub fn from_config(config: &LintConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            role_marker: config.role_marker.trim().to_ascii_lowercase(),
            goal_pattern: keyword_pattern(config.goal_verbs.as_slice())?,
            format_pattern: keyword_pattern(config.output_format_terms.as_slice())?,
            goal_verbs: config.goal_verbs.clone(),
            format_terms: config.output_format_terms.clone(),
            min_length: config.min_length,
        })
    }

    /// Run all four checks. The result always has one entry per [`CheckId`],
    /// in [`CheckId::ALL`] order.
    pub fn analyze(&self, text: &str) -> Vec<LintResult> {
        CheckId::ALL.iter().map(|id| self.check(*id, text)).collect()
    }

    pub fn analyze_with_summary(&self, text: &str) -> (Vec<LintResult>, LintSummary) {
        let results = self.analyze(text);
        let summary = LintSummary::from_results(&results);
        (results, summary)
    }

    /// Run a single check. Checks share no state, so any evaluation order
    /// gives the same results.
    pub fn check(&self, id: CheckId, text: &str) -> LintResult {
        match id {
            CheckId::Role => self.check_role(text),
            CheckId::Goal => self.check_goal(text),
            CheckId::OutputFormat => self.check_output_format(text),
            CheckId::Length => self.check_length(text),
        }
    }

    fn check_role(&self, text: &str) -> LintResult {
        if fold_case(text).contains(self.role_marker.as_str()) {
            LintResult {
                id: CheckId::Role,
                label: "Role detected".to_string(),
                status: Status::Success,
            }
        } else {
            LintResult {
                id: CheckId::Role,
                label: "Missing role: add a phrase like \"You are ...\"".to_string(),
                status: Status::Error,
            }
        }
    }

    fn check_goal(&self, text: &str) -> LintResult {
        if self.goal_pattern.is_match(&fold_case(text)) {
            LintResult {
                id: CheckId::Goal,
                label: "Goal detected".to_string(),
                status: Status::Success,
            }
        } else {
            LintResult {
                id: CheckId::Goal,
                label: format!(
                    "No clear goal detected (try verbs like {})",
                    self.goal_verbs.join(", ")
                ),
                status: Status::Warning,
            }
        }
    }

    fn check_output_format(&self, text: &str) -> LintResult {
        if self.format_pattern.is_match(&fold_case(text)) {
            LintResult {
                id: CheckId::OutputFormat,
                label: "Output format detected".to_string(),
                status: Status::Success,
            }
        } else {
            LintResult {
                id: CheckId::OutputFormat,
                label: format!(
                    "No output format detected (try {})",
                    join_with_or(&self.format_terms)
                ),
                status: Status::Warning,
            }
        }
    }

    fn check_length(&self, text: &str) -> LintResult {
        // UTF-16 code units: astral characters such as emoji count twice
        let length = text.trim().encode_utf16().count();
        if length >= self.min_length {
            LintResult {
                id: CheckId::Length,
                label: format!("Length check passed ({}+ characters)", self.min_length),
                status: Status::Success,
            }
        } else {
            LintResult {
                id: CheckId::Length,
                label: format!(
                    "Prompt is too short (minimum {} characters)",
                    self.min_length
                ),
                status: Status::Warning,
            }
        }
    }

    /// Print the checklist in a human-readable format
    pub fn print_report(&self, results: &[LintResult]) {
        println!("\n📋 Prompt Checklist:\n");
        for result in results {
            println!("   {} [{}] {}", result.status.icon(), result.id, result.label);
        }
        println!();
        println!("{}", LintSummary::from_results(results));
    }
}

/// "a, b, or c" with JSON spelled the way users write it.
fn join_with_or(terms: &[String]) -> String {
    let shown: Vec<String> = terms
        .iter()
        .map(|t| {
            if t.eq_ignore_ascii_case("json") {
                "JSON".to_string()
            } else {
                t.clone()
            }
        })
        .collect();
    match shown.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}
