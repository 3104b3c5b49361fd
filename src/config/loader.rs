use super::types::GeneratorConfig;
use crate::io::FileSystem;
use crate::{ModselError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name looked up in the project root
pub const CONFIG_FILE_NAME: &str = "modsel.toml";

/// Loader for the optional generator configuration
pub struct ConfigLoader {
    /// Explicit configuration file, overrides the root lookup
    explicit: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create new config loader
    pub fn new() -> Self {
        Self { explicit: None }
    }

    /// Use a specific configuration file instead of `<root>/modsel.toml`
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.explicit = Some(path.into());
        self
    }

    /// Load the configuration for a project root through `fs`.
    ///
    /// A missing `modsel.toml` in the root yields the defaults. An explicit
    /// file that cannot be read is an error.
    pub fn load<F: FileSystem + ?Sized, P: AsRef<Path>>(
        &self,
        fs: &F,
        project_root: P,
    ) -> Result<GeneratorConfig> {
        let path = match &self.explicit {
            Some(path) => path.clone(),
            None => {
                let candidate = project_root.as_ref().join(CONFIG_FILE_NAME);
                if !fs.is_file(&candidate) {
                    debug!("No {} found, using default layout", CONFIG_FILE_NAME);
                    return Ok(GeneratorConfig::default());
                }
                candidate
            }
        };

        let contents = fs.read_to_string(&path).map_err(|e| {
            ModselError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::parse(&contents).map_err(|e| {
            ModselError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration text and validate it
    pub fn parse(contents: &str) -> Result<GeneratorConfig> {
        let config: GeneratorConfig = toml::from_str(contents)?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &GeneratorConfig) -> Result<()> {
        let layout = &config.layout;
        if layout.facade == layout.facade_backup {
            return Err(ModselError::Config(format!(
                "Facade and its backup share the same path: {}",
                layout.facade
            )));
        }
        if layout.manifest == layout.manifest_backup {
            return Err(ModselError::Config(format!(
                "Manifest and its backup share the same path: {}",
                layout.manifest
            )));
        }
        if layout.sentinel.is_empty() {
            return Err(ModselError::Config("Sentinel descriptor name is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::RegistrationStrategy;
    use crate::io::{DiskFs, MemoryFs};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigLoader::new().load(&DiskFs, temp_dir.path()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_root_file_read_through_filesystem() {
        let fs = MemoryFs::new().with_file(
            "/p/modsel.toml",
            "registration = \"paired\"\n[layout]\nmodules_dir = \"plugins\"\n",
        );
        let config = ConfigLoader::new().load(&fs, "/p").unwrap();
        assert_eq!(config.registration, RegistrationStrategy::Paired);
        assert_eq!(config.layout.modules_dir, "plugins");
    }

    #[test]
    fn test_explicit_file_read_through_filesystem() {
        let fs = MemoryFs::new()
            .with_file("/etc/modsel/custom.toml", "[layout]\nsentinel = \"\"\n");
        let result = ConfigLoader::new()
            .with_file("/etc/modsel/custom.toml")
            .load(&fs, "/p");
        assert!(matches!(result, Err(ModselError::Config(_))));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = ConfigLoader::parse(
            r#"
registration = "paired"

[layout]
modules_dir = "plugins"
"#,
        )
        .unwrap();

        assert_eq!(config.registration, RegistrationStrategy::Paired);
        assert_eq!(config.layout.modules_dir, "plugins");
        assert_eq!(config.layout.sentinel, "module.hpp");
        assert_eq!(config.codegen.manifest_prefix, "murmure_SOURCES += ");
    }

    #[test]
    fn test_backup_collision_rejected() {
        let result = ConfigLoader::parse(
            r#"
[layout]
manifest = "Makefile.am"
manifest_backup = "Makefile.am"
"#,
        );
        assert!(matches!(result, Err(ModselError::Config(_))));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let result = ConfigLoader::new()
            .with_file(temp_dir.path().join("absent.toml"))
            .load(&DiskFs, temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let result = ConfigLoader::parse(r#"registration = "zip""#);
        assert!(matches!(result, Err(ModselError::Toml(_))));
    }
}
