//! Read-only catalogs of role presets, prompt templates and good/bad
//! examples. Bundled copies ship with the binary; a directory with the same
//! three JSON files can replace them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::engine::{parse_prompt, PromptFields};
use crate::error::CompanionError;

const BUILTIN_ROLES: &str = include_str!("../data/roles.json");
const BUILTIN_TEMPLATES: &str = include_str!("../data/templates.json");
const BUILTIN_EXAMPLES: &str = include_str!("../data/examples.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePreset {
    pub role_name: String,
    pub default_role_text: String,
    pub goal_hint: String,
    pub output_format_hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptTemplate {
    pub title: String,
    pub category: String,
    pub when_to_use: String,
    pub prompt_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptExample {
    pub title: String,
    pub bad_prompt: String,
    pub good_prompt: String,
    pub explanation: String,
}

/// What the editor needs after picking a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSelection {
    pub fields: PromptFields,
    pub prompt_text: String,
    pub preset: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub presets: Vec<RolePreset>,
    pub templates: Vec<PromptTemplate>,
    pub examples: Vec<PromptExample>,
}

impl Catalog {
    /// Catalogs compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_ROLES, BUILTIN_TEMPLATES, BUILTIN_EXAMPLES)
            .context("Bundled catalog data is malformed")
    }

    /// Load `roles.json`, `templates.json` and `examples.json` from `dir`.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        info!("Loading catalogs from {}", dir.display());

        let read = |name: &str| -> Result<String> {
            let path = dir.join(name);
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
        };

        Self::from_json(
            &read("roles.json")?,
            &read("templates.json")?,
            &read("examples.json")?,
        )
    }

    /// Load from the configured directory, or fall back to the bundled data.
    pub fn load(dir: Option<&str>) -> Result<Self> {
        match dir {
            Some(dir) => Self::load_dir(dir),
            None => Self::builtin(),
        }
    }

    fn from_json(roles: &str, templates: &str, examples: &str) -> Result<Self> {
        let presets: Vec<RolePreset> =
            serde_json::from_str(roles).context("Failed to parse role presets")?;
        let templates: Vec<PromptTemplate> =
            serde_json::from_str(templates).context("Failed to parse prompt templates")?;
        let examples: Vec<PromptExample> =
            serde_json::from_str(examples).context("Failed to parse prompt examples")?;

        debug!(
            "Catalog: {} presets, {} templates, {} examples",
            presets.len(),
            templates.len(),
            examples.len()
        );

        Ok(Self {
            presets,
            templates,
            examples,
        })
    }

    /// The preset the editor starts with.
    pub fn default_preset(&self) -> Result<&RolePreset, CompanionError> {
        self.presets
            .first()
            .ok_or(CompanionError::EmptyCatalog("role presets"))
    }

    pub fn find_preset(&self, name: &str) -> Result<&RolePreset, CompanionError> {
        let name = name.trim();
        self.presets
            .iter()
            .find(|p| p.role_name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CompanionError::PresetNotFound(name.to_string()))
    }

    pub fn find_template(&self, title: &str) -> Result<&PromptTemplate, CompanionError> {
        let title = title.trim();
        self.templates
            .iter()
            .find(|t| t.title.eq_ignore_ascii_case(title))
            .ok_or_else(|| CompanionError::TemplateNotFound(title.to_string()))
    }

    /// First preset whose name appears anywhere in the template text,
    /// ignoring case.
    pub fn preset_for_template(&self, template: &PromptTemplate) -> Option<&RolePreset> {
        let text = template.prompt_text.to_lowercase();
        self.presets
            .iter()
            .find(|p| text.contains(&p.role_name.to_lowercase()))
    }

    /// Parse a template into editor fields and pick the matching preset.
    pub fn use_template(&self, title: &str) -> Result<TemplateSelection, CompanionError> {
        let template = self.find_template(title)?;
        let preset = self
            .preset_for_template(template)
            .map(|p| p.role_name.clone());
        debug!("Template '{}' matched preset {:?}", template.title, preset);

        Ok(TemplateSelection {
            fields: parse_prompt(&template.prompt_text),
            prompt_text: template.prompt_text.clone(),
            preset,
        })
    }
}
