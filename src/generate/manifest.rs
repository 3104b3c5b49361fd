use tracing::info;

use crate::backup::BackupSlot;
use crate::config::CodegenConfig;
use crate::io::{FileSystem, ProjectPaths};
use crate::selector::SelectionSet;
use crate::{ModselError, Result};

/// Appends the selected module sources to the build manifest
pub struct ManifestUpdater<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    paths: &'a ProjectPaths,
    codegen: &'a CodegenConfig,
}

impl<'a, F: FileSystem + ?Sized> ManifestUpdater<'a, F> {
    pub fn new(fs: &'a F, paths: &'a ProjectPaths, codegen: &'a CodegenConfig) -> Self {
        Self { fs, paths, codegen }
    }

    /// `murmure_SOURCES += core/modules/a.cpp core/modules/b.cpp \n`
    ///
    /// Every path keeps its trailing space, so an empty selection yields the
    /// bare prefix.
    pub fn source_line(&self, selection: &SelectionSet) -> String {
        let mut line = self.codegen.manifest_prefix.clone();
        for stem in selection.iter() {
            line.push_str(&self.codegen.source_path(stem));
            line.push(' ');
        }
        line.push('\n');
        line
    }

    /// Back up the manifest, then append the source line. Returns the line.
    pub fn update(&self, selection: &SelectionSet) -> Result<String> {
        let manifest = &self.paths.manifest;

        BackupSlot::new(self.fs, manifest, &self.paths.manifest_backup).snapshot()?;

        let line = self.source_line(selection);
        self.fs.append(manifest, &line).map_err(|e| {
            ModselError::Manifest(format!(
                "Failed to append to manifest {}: {}",
                manifest.display(),
                e
            ))
        })?;

        info!(sources = selection.len(), "Updated {}", manifest.display());
        Ok(line)
    }
}
