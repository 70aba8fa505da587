use anyhow::Result;
use tracing::debug;

use crate::cli::read_input;
use crate::engine::{parse_prompt, PromptField, PromptFields};

/// Render fields one per line as `id: value`, blanks shown as `(empty)`.
pub fn format_fields(fields: &PromptFields) -> String {
    PromptField::ALL
        .iter()
        .map(|field| {
            let value = fields.get(*field);
            let shown = if value.is_empty() { "(empty)" } else { value };
            format!("{}: {}", field.id(), shown)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(input: &str, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let fields = parse_prompt(&text);
    debug!("Parsed {} input bytes", text.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
    } else {
        println!("{}", format_fields(&fields));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fields_marks_empty_values() {
        let fields = PromptFields {
            role: "You are a chef.".to_string(),
            output_format: "a recipe card".to_string(),
            ..Default::default()
        };
        assert_eq!(
            format_fields(&fields),
            "role: You are a chef.\n\
             goal: (empty)\n\
             context: (empty)\n\
             constraints: (empty)\n\
             outputFormat: a recipe card"
        );
    }

    #[test]
    fn test_run_on_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("prompt.txt");
        std::fs::write(&path, "Context: a kitchen\n").unwrap();
        assert!(run(path.to_str().unwrap(), false).is_ok());
        assert!(run(path.to_str().unwrap(), true).is_ok());
    }
}
