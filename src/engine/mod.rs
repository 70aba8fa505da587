//! Prompt text engine: turns the five template fields into one canonical
//! prompt string and back again.
//!
//! The canonical text is five lines, one per field, in fixed order:
//!
//! ```text
//! You are a senior data analyst.
//! Your goal is: summarize the quarterly numbers.
//! Context: the audience is the finance team.
//! Constraints: keep it under 200 words.
//! Provide the answer in the following format: a bullet list.
//! ```
//!
//! Everything in here is pure and infallible. Empty or malformed input
//! degrades to placeholder text (composing) or empty fields (parsing).

pub mod composer;
pub mod normalizer;
pub mod parser;
pub mod role;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use composer::compose_prompt;
pub use normalizer::{normalize_sentence, trim_terminal_punctuation};
pub use parser::parse_prompt;
pub use role::normalize_role;

/// Role line used when the user leaves the role blank.
pub const DEFAULT_ROLE_LINE: &str = "You are a helpful AI assistant.";

/// Default text per field. The role entry is a complete line, the other four
/// are placeholder phrases that get a label and a terminal period.
pub const FIELD_DEFAULTS: [(PromptField, &str); 5] = [
    (PromptField::Role, DEFAULT_ROLE_LINE),
    (PromptField::Goal, "[describe the goal]"),
    (PromptField::Context, "[provide relevant context]"),
    (PromptField::Constraints, "[add constraints]"),
    (PromptField::OutputFormat, "[define the output format]"),
];

/// One of the five template fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptField {
    Role,
    Goal,
    Context,
    Constraints,
    OutputFormat,
}

impl PromptField {
    /// All fields in canonical line order.
    pub const ALL: [PromptField; 5] = [
        PromptField::Role,
        PromptField::Goal,
        PromptField::Context,
        PromptField::Constraints,
        PromptField::OutputFormat,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PromptField::Role => "role",
            PromptField::Goal => "goal",
            PromptField::Context => "context",
            PromptField::Constraints => "constraints",
            PromptField::OutputFormat => "outputFormat",
        }
    }

    /// Line label as written by the composer. The role line carries no
    /// separate label; it is recognized by its `You are` sentence prefix.
    pub fn label(&self) -> &'static str {
        match self {
            PromptField::Role => "You are",
            PromptField::Goal => "Your goal is:",
            PromptField::Context => "Context:",
            PromptField::Constraints => "Constraints:",
            PromptField::OutputFormat => "Provide the answer in the following format:",
        }
    }

    pub fn default_text(&self) -> &'static str {
        FIELD_DEFAULTS
            .iter()
            .find(|(field, _)| field == self)
            .map(|(_, text)| *text)
            .unwrap_or_default()
    }
}

impl fmt::Display for PromptField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The five user-editable fields. All are always present; unset means empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptFields {
    pub role: String,
    pub goal: String,
    pub context: String,
    pub constraints: String,
    pub output_format: String,
}

impl PromptFields {
    pub fn get(&self, field: PromptField) -> &str {
        match field {
            PromptField::Role => &self.role,
            PromptField::Goal => &self.goal,
            PromptField::Context => &self.context,
            PromptField::Constraints => &self.constraints,
            PromptField::OutputFormat => &self.output_format,
        }
    }

    pub fn set(&mut self, field: PromptField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PromptField::Role => self.role = value,
            PromptField::Goal => self.goal = value,
            PromptField::Context => self.context = value,
            PromptField::Constraints => self.constraints = value,
            PromptField::OutputFormat => self.output_format = value,
        }
    }
}
