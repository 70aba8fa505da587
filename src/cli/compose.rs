use anyhow::Result;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::cli::last_prompt_store;
use crate::config::Config;
use crate::engine::{compose_prompt, PromptFields};

/// Field values as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct FieldArgs {
    pub role: Option<String>,
    pub goal: Option<String>,
    pub context: Option<String>,
    pub constraints: Option<String>,
    pub output_format: Option<String>,
}

/// Resolve the editor fields. An explicit role wins, then the chosen
/// preset's role text, then the first preset in the catalog.
pub fn build_fields(catalog: &Catalog, args: FieldArgs, preset: Option<&str>) -> Result<PromptFields> {
    let role = match (args.role, preset) {
        (Some(role), _) => role,
        (None, Some(name)) => catalog.find_preset(name)?.default_role_text.clone(),
        (None, None) => match catalog.default_preset() {
            Ok(preset) => preset.default_role_text.clone(),
            Err(e) => {
                warn!("{}; falling back to the default role", e);
                String::new()
            }
        },
    };

    Ok(PromptFields {
        role,
        goal: args.goal.unwrap_or_default(),
        context: args.context.unwrap_or_default(),
        constraints: args.constraints.unwrap_or_default(),
        output_format: args.output_format.unwrap_or_default(),
    })
}

pub fn run(
    args: FieldArgs,
    preset: Option<String>,
    json: bool,
    no_save: bool,
    config_path: Option<String>,
) -> Result<()> {
    let config = Config::load_with_path(config_path)?;
    let catalog = Catalog::load(config.catalog.dir.as_deref())?;

    if let Some(ref name) = preset {
        info!("Using preset: {}", name);
    }
    let fields = build_fields(&catalog, args, preset.as_deref())?;
    let prompt = compose_prompt(&fields);

    if json {
        let out = serde_json::json!({ "fields": fields, "prompt": prompt });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", prompt);
    }

    if !no_save {
        last_prompt_store(&config).save(&prompt)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_role_wins_over_preset() {
        let catalog = Catalog::builtin().unwrap();
        let args = FieldArgs {
            role: Some("pirate".to_string()),
            ..Default::default()
        };
        let fields = build_fields(&catalog, args, Some("Data Analyst")).unwrap();
        assert_eq!(fields.role, "pirate");
    }

    #[test]
    fn test_preset_supplies_role() {
        let catalog = Catalog::builtin().unwrap();
        let fields = build_fields(&catalog, FieldArgs::default(), Some("data analyst")).unwrap();
        assert_eq!(fields.role, "You are an experienced data analyst");
        assert_eq!(
            compose_prompt(&fields).lines().next(),
            Some("You are an experienced data analyst.")
        );
    }

    #[test]
    fn test_unknown_preset_is_an_error() {
        let catalog = Catalog::builtin().unwrap();
        let err = build_fields(&catalog, FieldArgs::default(), Some("Astronaut")).unwrap_err();
        assert!(err.to_string().contains("Astronaut"));
    }

    #[test]
    fn test_no_role_uses_first_preset() {
        let catalog = Catalog::builtin().unwrap();
        let args = FieldArgs {
            goal: Some("list three ideas".to_string()),
            ..Default::default()
        };
        let fields = build_fields(&catalog, args, None).unwrap();
        assert_eq!(fields.role, "You are a helpful AI assistant");
        assert_eq!(fields.goal, "list three ideas");
        assert_eq!(fields.context, "");
    }

    #[test]
    fn test_empty_catalog_falls_back_to_default_role() {
        let catalog = Catalog {
            presets: vec![],
            templates: vec![],
            examples: vec![],
        };
        let fields = build_fields(&catalog, FieldArgs::default(), None).unwrap();
        assert_eq!(fields.role, "");
        assert!(compose_prompt(&fields).starts_with("You are a helpful AI assistant."));
    }
}
