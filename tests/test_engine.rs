//! Integration tests for the prompt text engine
//! Covers composing, parsing and the compose -> parse round trip

use prompt_companion::engine::{
    compose_prompt, normalize_role, normalize_sentence, parse_prompt, trim_terminal_punctuation,
    PromptField, PromptFields,
};

fn sample_fields() -> Vec<PromptFields> {
    vec![
        PromptFields::default(),
        PromptFields {
            role: "senior data analyst".to_string(),
            goal: "Summarize Q3 revenue by region".to_string(),
            context: "Numbers come from the finance export.".to_string(),
            constraints: "No more than 5 bullets!!".to_string(),
            output_format: "markdown table?".to_string(),
        },
        PromptFields {
            role: "You are a strict grader".to_string(),
            goal: "   ".to_string(),
            context: "...".to_string(),
            constraints: "Context: nested label text".to_string(),
            output_format: "JSON with keys a, b. Nothing else".to_string(),
        },
        PromptFields {
            role: "an owl".to_string(),
            goal: "write, then review.".to_string(),
            context: "e.g. the forest".to_string(),
            constraints: "?".to_string(),
            output_format: "ünïcödé output!".to_string(),
        },
    ]
}

// ============================================================================
// NORMALIZATION
// ============================================================================

#[test]
fn test_role_examples() {
    assert_eq!(normalize_role(""), "You are a helpful AI assistant.");
    assert_eq!(normalize_role("?!"), "You are a .");
    assert_eq!(
        normalize_role("senior data analyst"),
        "You are a senior data analyst."
    );
    assert_eq!(
        normalize_role("an expert reviewer."),
        "You are an expert reviewer."
    );
    assert_eq!(
        normalize_role("You are already formatted"),
        "You are already formatted."
    );
}

#[test]
fn test_punctuation_run_removed_entirely() {
    assert_eq!(trim_terminal_punctuation("do it!!"), "do it");
}

// ============================================================================
// COMPOSITION
// ============================================================================

#[test]
fn test_compose_always_five_lines() {
    for fields in sample_fields() {
        let prompt = compose_prompt(&fields);
        let lines: Vec<&str> = prompt.split('\n').collect();
        assert_eq!(lines.len(), 5, "{:?}", fields);
        assert!(lines[0].starts_with("You are"));
        for (line, field) in lines.iter().zip(PromptField::ALL).skip(1) {
            assert!(line.starts_with(field.label()), "{} missing label", field);
            assert!(line.ends_with('.'));
        }
    }
}

#[test]
fn test_compose_empty_fields_has_placeholders() {
    let prompt = compose_prompt(&PromptFields::default());
    assert!(prompt.contains("[describe the goal]"));
    assert!(prompt.contains("[provide relevant context]"));
    assert!(prompt.contains("[add constraints]"));
    assert!(prompt.contains("[define the output format]"));
}

// ============================================================================
// PARSING
// ============================================================================

#[test]
fn test_parse_empty_string() {
    let fields = parse_prompt("");
    for field in PromptField::ALL {
        assert_eq!(fields.get(field), "");
    }
}

#[test]
fn test_parse_partial_input() {
    let fields = parse_prompt("Some intro\nConstraints: be brief.\nThanks!");
    assert_eq!(fields.constraints, "be brief");
    assert_eq!(fields.goal, "");
    assert_eq!(fields.role, "");
}

#[test]
fn test_parse_duplicate_labels_keep_last() {
    let text = "Your goal is: first goal.\nYour goal is: second goal.\nYour goal is: third goal.";
    assert_eq!(parse_prompt(text).goal, "third goal");
}

// ============================================================================
// ROUND TRIP
// ============================================================================

#[test]
fn test_roundtrip_recovers_normalized_fields() {
    for fields in sample_fields() {
        let parsed = parse_prompt(&compose_prompt(&fields));
        for field in PromptField::ALL.into_iter().skip(1) {
            let normalized = normalize_sentence(fields.get(field), field.default_text());
            let expected = normalized.strip_suffix('.').unwrap();
            assert_eq!(parsed.get(field), expected, "{} of {:?}", field, fields);
        }
        assert_eq!(parsed.role, normalize_role(&fields.role));
    }
}

#[test]
fn test_compose_parse_compose_is_stable() {
    for fields in sample_fields() {
        let once = compose_prompt(&fields);
        let twice = compose_prompt(&parse_prompt(&once));
        assert_eq!(once, twice);
    }
}
