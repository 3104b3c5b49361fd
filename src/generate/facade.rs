use tracing::{info, warn};

use super::registration::Registration;
use super::template::{FacadeTemplate, SlotContents, SlotKind};
use crate::backup::BackupSlot;
use crate::config::CodegenConfig;
use crate::io::{FileSystem, ProjectPaths};
use crate::selector::SelectionSet;
use crate::{ModselError, Result};

/// Rewrites the facade source with the selected modules
pub struct FacadeRewriter<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    paths: &'a ProjectPaths,
    codegen: &'a CodegenConfig,
}

impl<'a, F: FileSystem + ?Sized> FacadeRewriter<'a, F> {
    pub fn new(fs: &'a F, paths: &'a ProjectPaths, codegen: &'a CodegenConfig) -> Self {
        Self { fs, paths, codegen }
    }

    /// Generated blocks for the two facade slots
    pub fn slot_contents(
        &self,
        selection: &SelectionSet,
        registrations: &[Registration],
    ) -> SlotContents {
        let mut contents = SlotContents::default();
        for stem in selection.iter() {
            contents.includes.push_str(&self.codegen.include_directive(stem));
            contents.includes.push('\n');
        }
        for registration in registrations {
            contents.registrations.push_str(&registration.render(self.codegen));
            contents.registrations.push('\n');
        }
        contents
    }

    /// Back up the pristine facade, then replace it with the rendered template.
    ///
    /// Returns the text written.
    pub fn rewrite(
        &self,
        selection: &SelectionSet,
        registrations: &[Registration],
    ) -> Result<String> {
        let facade = &self.paths.facade;

        let text = self.fs.read_to_string(facade).map_err(|e| {
            ModselError::Facade(format!("Failed to read facade {}: {}", facade.display(), e))
        })?;
        let template = FacadeTemplate::parse(&text)?;
        for kind in SlotKind::ALL {
            if !template.has_slot(kind) {
                warn!("Facade {} has no {} marker", facade.display(), kind.marker());
            }
        }

        BackupSlot::new(self.fs, facade, &self.paths.facade_backup).snapshot()?;

        let rendered = template.render(&self.slot_contents(selection, registrations));
        self.fs.write(facade, &rendered).map_err(|e| {
            ModselError::Facade(format!("Failed to write facade {}: {}", facade.display(), e))
        })?;

        info!(
            includes = selection.len(),
            registrations = registrations.len(),
            "Rewrote {}",
            facade.display()
        );
        Ok(rendered)
    }
}
