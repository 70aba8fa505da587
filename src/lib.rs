//! prompt-companion - Build structured LLM prompts and check their quality
//!
//! Composes five template fields (role, goal, context, constraints, output
//! format) into a canonical prompt, parses canonical prompts back into
//! fields, and runs a quick heuristic checklist over any prompt text.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod lint;
pub mod store;
