use serde::Deserialize;

/// Root configuration file structure for modsel.toml
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct GeneratorConfig {
    /// Where descriptors and generated artifacts live, relative to the root
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Shape of the generated include, registration and manifest lines
    #[serde(default)]
    pub codegen: CodegenConfig,

    /// How type tags are paired with factory classes
    #[serde(default)]
    pub registration: RegistrationStrategy,
}

/// Filesystem layout of the project, every path relative to the project root
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Directory holding one descriptor per optional module
    pub modules_dir: String,
    /// Base descriptor file name excluded from the catalog
    pub sentinel: String,
    /// Facade source containing the insertion markers
    pub facade: String,
    /// Backup slot for the facade
    pub facade_backup: String,
    /// Build manifest that receives the source list
    pub manifest: String,
    /// Backup slot for the manifest
    pub manifest_backup: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            modules_dir: "include/core/modules".to_string(),
            sentinel: "module.hpp".to_string(),
            facade: "src/core/modulefacade.cpp".to_string(),
            facade_backup: "src/core/modulefacade.orig.cpp".to_string(),
            manifest: "src/Makefile.am".to_string(),
            manifest_backup: "src/Makefile.am.bak".to_string(),
        }
    }
}

/// Formatting of generated lines
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CodegenConfig {
    /// Include path prefix placed before `<stem>.<descriptor_extension>`
    pub include_prefix: String,
    pub descriptor_extension: String,
    /// Source path prefix placed before `<stem>.<source_extension>`
    pub source_prefix: String,
    pub source_extension: String,
    /// Fixed token that starts the appended manifest line
    pub manifest_prefix: String,
    /// Lookup table receiving the registrations
    pub factory_table: String,
    /// Factory template parameterized by the module class
    pub factory_fn: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            include_prefix: "core/modules/".to_string(),
            descriptor_extension: "hpp".to_string(),
            source_prefix: "core/modules/".to_string(),
            source_extension: "cpp".to_string(),
            manifest_prefix: "murmure_SOURCES += ".to_string(),
            factory_table: "modules".to_string(),
            factory_fn: "getModuleInstance".to_string(),
        }
    }
}

impl CodegenConfig {
    /// `#include <core/modules/integer32.hpp>`
    pub fn include_directive(&self, stem: &str) -> String {
        format!(
            "#include <{}{}.{}>",
            self.include_prefix, stem, self.descriptor_extension
        )
    }

    /// `modules["INTEGER32"] = &getModuleInstance<Integer32>;`
    pub fn registration_statement(&self, type_tag: &str, class_name: &str) -> String {
        format!(
            "{}[\"{}\"] = &{}<{}>;",
            self.factory_table, type_tag, self.factory_fn, class_name
        )
    }

    /// Compiled source path for a module, as listed in the manifest
    pub fn source_path(&self, stem: &str) -> String {
        format!("{}{}.{}", self.source_prefix, stem, self.source_extension)
    }
}

/// Pairing rule between the collected type tags and class names
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationStrategy {
    /// Every type tag registered against every class, tags in the outer loop
    #[default]
    CrossProduct,
    /// One registration per module declaring both a tag and a class
    Paired,
}

impl std::fmt::Display for RegistrationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationStrategy::CrossProduct => write!(f, "cross-product"),
            RegistrationStrategy::Paired => write!(f, "paired"),
        }
    }
}
