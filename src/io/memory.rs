use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use super::fs::FileSystem;

/// In-memory filesystem for exercising the generator without touching disk.
///
/// Directory listings come back sorted by path, which makes catalog order
/// deterministic in tests.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    read_only: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, registering its parent directories
    pub fn with_file<P: Into<PathBuf>>(self, path: P, contents: &str) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add an empty directory
    pub fn with_dir<P: Into<PathBuf>>(self, path: P) -> Self {
        self.register_dirs(&path.into());
        self
    }

    pub fn insert<P: Into<PathBuf>>(&self, path: P, contents: &str) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.register_dirs(parent);
        }
        self.files.borrow_mut().insert(path, contents.to_string());
    }

    pub fn remove(&self, path: &Path) -> Option<String> {
        self.files.borrow_mut().remove(path)
    }

    /// Current contents of a file
    pub fn file(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// Make writes, appends and renames targeting `path` fail
    pub fn deny_writes<P: Into<PathBuf>>(&self, path: P) {
        self.read_only.borrow_mut().insert(path.into());
    }

    fn register_dirs(&self, dir: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in dir.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn check_writable(&self, path: &Path) -> io::Result<()> {
        if self.read_only.borrow().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {}", path.display()),
            ));
        }
        Ok(())
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("No such file or directory: {}", path.display()),
        )
    }
}

impl FileSystem for MemoryFs {
    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.file(path).ok_or_else(|| Self::not_found(path))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.check_writable(path)?;
        self.insert(path, contents);
        Ok(())
    }

    fn append(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.check_writable(path)?;
        let mut files = self.files.borrow_mut();
        let existing = files.get_mut(path).ok_or_else(|| Self::not_found(path))?;
        existing.push_str(contents);
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.check_writable(to)?;
        let contents = self.read_to_string(from)?;
        self.insert(to, &contents);
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.check_writable(to)?;
        let contents = self.remove(from).ok_or_else(|| Self::not_found(from))?;
        self.insert(to, &contents);
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.is_dir(dir) {
            return Err(Self::not_found(dir));
        }
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect())
    }
}
