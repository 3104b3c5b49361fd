use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Filesystem operations used by the generator.
///
/// Every artifact touched by a run goes through this trait so that the
/// pipeline can be exercised against [`super::MemoryFs`] without a real tree.
pub trait FileSystem {
    /// Whether `path` is an existing regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the full contents of `path`
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Append to an existing file
    fn append(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Copy `from` over `to`, replacing `to` if present
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Move `from` over `to`, replacing `to` if present
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Regular files directly inside `dir`, in listing order
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn append(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::copy(from, to).map(|_| ())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.is_dir(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such directory: {}", dir.display()),
            ));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            // Follow symlinked descriptors as well
            if entry.path().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}
