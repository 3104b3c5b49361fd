use crate::config::LayoutConfig;
use std::path::{Path, PathBuf};

/// Resolved locations of every artifact a run reads or writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Descriptor directory (include/core/modules/)
    pub modules_dir: PathBuf,
    /// Base descriptor name excluded from the catalog
    pub sentinel: String,
    pub facade: PathBuf,
    pub facade_backup: PathBuf,
    pub manifest: PathBuf,
    pub manifest_backup: PathBuf,
}

impl ProjectPaths {
    /// Resolve a layout against a project root
    pub fn for_root(root: &Path, layout: &LayoutConfig) -> Self {
        Self {
            modules_dir: root.join(&layout.modules_dir),
            sentinel: layout.sentinel.clone(),
            facade: root.join(&layout.facade),
            facade_backup: root.join(&layout.facade_backup),
            manifest: root.join(&layout.manifest),
            manifest_backup: root.join(&layout.manifest_backup),
        }
    }
}
