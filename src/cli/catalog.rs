use anyhow::Result;
use tracing::info;

use crate::catalog::{Catalog, PromptTemplate};
use crate::cli::last_prompt_store;
use crate::cli::parse::format_fields;
use crate::config::Config;

fn load(config_path: Option<String>) -> Result<(Config, Catalog)> {
    let config = Config::load_with_path(config_path)?;
    let catalog = Catalog::load(config.catalog.dir.as_deref())?;
    Ok((config, catalog))
}

pub fn presets(json: bool, config_path: Option<String>) -> Result<()> {
    let (_, catalog) = load(config_path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.presets)?);
        return Ok(());
    }

    for preset in &catalog.presets {
        println!("{}", preset.role_name);
        println!("   role:   {}", preset.default_role_text);
        println!("   goal:   {}", preset.goal_hint);
        println!("   format: {}", preset.output_format_hint);
    }
    Ok(())
}

fn print_template(template: &PromptTemplate) {
    println!("{} [{}]", template.title, template.category);
    println!("   When to use: {}", template.when_to_use);
}

pub fn templates(json: bool, config_path: Option<String>) -> Result<()> {
    let (_, catalog) = load(config_path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.templates)?);
        return Ok(());
    }

    for template in &catalog.templates {
        print_template(template);
    }
    Ok(())
}

/// Load a template into the editor: print its parsed fields and remember its
/// text as the last generated prompt.
pub fn use_template(
    title: &str,
    json: bool,
    no_save: bool,
    config_path: Option<String>,
) -> Result<()> {
    let (config, catalog) = load(config_path)?;
    let selection = catalog.use_template(title)?;
    info!("Loaded template '{}'", title);

    if json {
        println!("{}", serde_json::to_string_pretty(&selection)?);
    } else {
        if let Some(ref preset) = selection.preset {
            println!("preset: {}", preset);
        }
        println!("{}", format_fields(&selection.fields));
        println!();
        println!("{}", selection.prompt_text);
    }

    if !no_save {
        last_prompt_store(&config).save(&selection.prompt_text)?;
    }
    Ok(())
}

pub fn examples(json: bool, config_path: Option<String>) -> Result<()> {
    let (_, catalog) = load(config_path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.examples)?);
        return Ok(());
    }

    for example in &catalog.examples {
        println!("== {}", example.title);
        println!("\n-- Bad prompt\n{}", example.bad_prompt);
        println!("\n-- Good prompt\n{}", example.good_prompt);
        println!("\n{}\n", example.explanation);
    }
    Ok(())
}
