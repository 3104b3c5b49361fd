//! Filesystem access and path resolution

pub mod fs;
pub mod memory;
pub mod paths;

pub use fs::{DiskFs, FileSystem};
pub use memory::MemoryFs;
pub use paths::ProjectPaths;
