//! Module catalog discovery
//!
//! The catalog is the set of descriptor files in the modules directory,
//! minus the sentinel base descriptor every module derives from.

pub mod metadata;

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::io::FileSystem;
use crate::{ModselError, Result};

pub use metadata::{extract_metadata, read_metadata, ModuleMetadata};

/// A module available for selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// File name without extension, the module's identity
    pub stem: String,
    /// Descriptor file declaring the module
    pub path: PathBuf,
}

/// List the modules declared in `modules_dir`.
///
/// Only files carrying the descriptor `extension` are considered, and the
/// `sentinel` file is skipped. Order follows the directory listing.
pub fn scan_catalog<F: FileSystem + ?Sized>(
    fs: &F,
    modules_dir: &Path,
    sentinel: &str,
    extension: &str,
) -> Result<Vec<ModuleDescriptor>> {
    info!("Scanning for module descriptors in: {:?}", modules_dir);

    if !fs.is_dir(modules_dir) {
        return Err(ModselError::Catalog(format!(
            "Failed to list module directory {}: not a directory",
            modules_dir.display()
        )));
    }

    let files = fs.list_files(modules_dir).map_err(|e| {
        ModselError::Catalog(format!(
            "Failed to list module directory {}: {}",
            modules_dir.display(),
            e
        ))
    })?;

    let mut catalog = Vec::new();
    for path in files {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if file_name == sentinel {
            debug!("Skipping base descriptor: {:?}", path);
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            debug!("Skipping non-descriptor file: {:?}", path);
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        debug!("Found module descriptor: {:?}", path);
        catalog.push(ModuleDescriptor {
            stem: stem.to_string(),
            path: path.clone(),
        });
    }

    info!("Scan complete: found {} modules", catalog.len());
    Ok(catalog)
}
