use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompanionError {
    #[error("Unknown role preset: {0}")]
    PresetNotFound(String),

    #[error("Unknown template: {0}")]
    TemplateNotFound(String),

    #[error("Catalog is empty: {0}")]
    EmptyCatalog(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
