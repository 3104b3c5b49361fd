//! Single-slot backups for the generated artifacts
//!
//! Each artifact is either `Pristine` (no backup on disk) or `PendingRestore`
//! (a previous run left its pristine copy in the backup slot). The restore
//! guard is the only way from `PendingRestore` back to `Pristine`, and a
//! snapshot is the only way into `PendingRestore`.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::io::FileSystem;
use crate::{ModselError, Result};

/// Observable state of one artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactState {
    Pristine,
    PendingRestore,
}

/// A live artifact paired with its backup slot
pub struct BackupSlot<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    live: PathBuf,
    backup: PathBuf,
}

impl<'a, F: FileSystem + ?Sized> BackupSlot<'a, F> {
    pub fn new(fs: &'a F, live: &Path, backup: &Path) -> Self {
        Self {
            fs,
            live: live.to_path_buf(),
            backup: backup.to_path_buf(),
        }
    }

    pub fn live(&self) -> &Path {
        &self.live
    }

    pub fn backup(&self) -> &Path {
        &self.backup
    }

    pub fn state(&self) -> ArtifactState {
        if self.fs.is_file(&self.backup) {
            ArtifactState::PendingRestore
        } else {
            ArtifactState::Pristine
        }
    }

    /// Move the backup back over the live artifact.
    ///
    /// Returns whether a restoration happened; a missing backup is a no-op.
    pub fn restore(&self) -> Result<bool> {
        if self.state() == ArtifactState::Pristine {
            debug!("No backup at {}, nothing to restore", self.backup.display());
            return Ok(false);
        }

        self.fs.rename(&self.backup, &self.live).map_err(|e| {
            ModselError::Backup(format!(
                "Failed to restore {} from {}: {}",
                self.live.display(),
                self.backup.display(),
                e
            ))
        })?;

        info!("Restored {}", self.live.display());
        Ok(true)
    }

    /// Copy the live artifact into the backup slot.
    ///
    /// Refused while a previous backup is still pending restoration, since
    /// overwriting it would lose the pristine copy.
    pub fn snapshot(&self) -> Result<()> {
        if self.state() == ArtifactState::PendingRestore {
            return Err(ModselError::Backup(format!(
                "Backup {} is pending restoration; refusing to overwrite it",
                self.backup.display()
            )));
        }

        self.fs.copy(&self.live, &self.backup).map_err(|e| {
            ModselError::Backup(format!(
                "Failed to back up {} to {}: {}",
                self.live.display(),
                self.backup.display(),
                e
            ))
        })?;

        debug!("Backed up {} to {}", self.live.display(), self.backup.display());
        Ok(())
    }
}
