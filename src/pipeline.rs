//! Generation pipeline
//!
//! Restore guard, catalog scan, selection, metadata extraction, facade
//! rewrite and manifest update, run strictly in that order. Descriptors are
//! all read before the first artifact is touched.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::backup::BackupSlot;
use crate::catalog::{read_metadata, scan_catalog, ModuleDescriptor, ModuleMetadata};
use crate::config::GeneratorConfig;
use crate::generate::{build_registrations, FacadeRewriter, ManifestUpdater, Registration};
use crate::io::{FileSystem, ProjectPaths};
use crate::selector::{ModuleSelector, SelectionSet};
use crate::{ModselError, Result};

/// Artifacts put back in place by the restore guard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    pub restored: Vec<PathBuf>,
}

/// Outcome of one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub selection: SelectionSet,
    pub registrations: Vec<Registration>,
    /// Line appended to the manifest, newline included
    pub manifest_line: String,
    /// Full facade text written
    pub facade: String,
}

pub struct Generator<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    paths: ProjectPaths,
    config: &'a GeneratorConfig,
}

impl<'a, F: FileSystem + ?Sized> Generator<'a, F> {
    pub fn new(fs: &'a F, paths: ProjectPaths, config: &'a GeneratorConfig) -> Self {
        Self { fs, paths, config }
    }

    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    /// Undo a previous run's substitutions, facade first, then manifest
    pub fn restore(&self) -> Result<RestoreReport> {
        self.restore_with(|_| Ok(()))
    }

    /// Restore guard calling `on_restored` as soon as each artifact is back,
    /// so a later failure does not hide restorations already done
    pub fn restore_with<C>(&self, mut on_restored: C) -> Result<RestoreReport>
    where
        C: FnMut(&Path) -> Result<()>,
    {
        let mut report = RestoreReport::default();
        let slots = [
            BackupSlot::new(self.fs, &self.paths.facade, &self.paths.facade_backup),
            BackupSlot::new(self.fs, &self.paths.manifest, &self.paths.manifest_backup),
        ];
        for slot in &slots {
            if slot.restore()? {
                on_restored(slot.live())?;
                report.restored.push(slot.live().to_path_buf());
            }
        }
        Ok(report)
    }

    pub fn scan(&self) -> Result<Vec<ModuleDescriptor>> {
        scan_catalog(
            self.fs,
            &self.paths.modules_dir,
            &self.paths.sentinel,
            &self.config.codegen.descriptor_extension,
        )
    }

    /// Read every selected descriptor, in selection order
    pub fn extract(
        &self,
        selection: &SelectionSet,
        catalog: &[ModuleDescriptor],
    ) -> Result<Vec<ModuleMetadata>> {
        selection
            .iter()
            .map(|stem| {
                let descriptor = catalog.iter().find(|d| d.stem == stem).ok_or_else(|| {
                    ModselError::Descriptor(format!("Module {} is not in the catalog", stem))
                })?;
                read_metadata(self.fs, descriptor)
            })
            .collect()
    }

    /// Rewrite the facade and update the manifest for a selection
    pub fn generate(
        &self,
        selection: SelectionSet,
        catalog: &[ModuleDescriptor],
    ) -> Result<GenerationReport> {
        let metadata = self.extract(&selection, catalog)?;
        let registrations = build_registrations(&metadata, self.config.registration);
        debug!(
            strategy = %self.config.registration,
            count = registrations.len(),
            "Built registrations"
        );

        let codegen = &self.config.codegen;
        let facade = FacadeRewriter::new(self.fs, &self.paths, codegen)
            .rewrite(&selection, &registrations)?;
        let manifest_line = ManifestUpdater::new(self.fs, &self.paths, codegen).update(&selection)?;

        Ok(GenerationReport {
            selection,
            registrations,
            manifest_line,
            facade,
        })
    }

    /// Full run after the restore guard: scan, select, generate
    pub fn run(&self, selector: &mut dyn ModuleSelector) -> Result<GenerationReport> {
        let catalog = self.scan()?;
        let stems: Vec<String> = catalog.iter().map(|d| d.stem.clone()).collect();

        info!("Selecting modules with {} selector", selector.name());
        let choices = selector.select(&stems)?;
        let selection = SelectionSet::from_choices(choices, &stems);
        info!("Selected {} of {} modules", selection.len(), stems.len());

        self.generate(selection, &catalog)
    }
}
