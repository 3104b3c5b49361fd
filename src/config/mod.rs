//! Generator configuration: project layout, line formats and registration strategy

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use types::{CodegenConfig, GeneratorConfig, LayoutConfig, RegistrationStrategy};
