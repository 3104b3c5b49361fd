use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModselError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Descriptor error: {0}")]
    Descriptor(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Facade error: {0}")]
    Facade(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Backup error: {0}")]
    Backup(String),

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ModselError>;
