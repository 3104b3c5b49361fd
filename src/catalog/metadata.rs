//! Descriptor metadata extraction
//!
//! Descriptors are free-form text. Two lines matter:
//!
//! ```text
//!  * @name: INTEGER32
//! class Integer32 : public Module {
//! ```
//!
//! Fields are split on single spaces with empty fields kept, so the leading
//! space of a doc-comment line counts as field 0 and the tag is field 3.

use tracing::{debug, warn};

use super::ModuleDescriptor;
use crate::io::FileSystem;
use crate::{ModselError, Result};

const NAME_MARKER: &str = "@name";
const CLASS_KEYWORD: &str = "class";
const TYPE_TAG_FIELD: usize = 3;
const CLASS_NAME_FIELD: usize = 1;

/// Type tag and factory class declared by one descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleMetadata {
    pub type_tag: Option<String>,
    pub class_name: Option<String>,
}

impl ModuleMetadata {
    pub fn is_complete(&self) -> bool {
        self.type_tag.is_some() && self.class_name.is_some()
    }
}

/// Recover the type tag and class name from descriptor text.
///
/// Only the first `@name` line is consulted for the tag, even when it is too
/// short to carry one; no `@name` line is checked for a class. The first line starting with `class` provides the class and ends
/// the scan, so an `@name` after it is never seen.
pub fn extract_metadata(text: &str) -> ModuleMetadata {
    let mut metadata = ModuleMetadata::default();
    let mut seen_name = false;

    for line in text.lines() {
        if line.contains(NAME_MARKER) {
            if !seen_name {
                metadata.type_tag = field(line, TYPE_TAG_FIELD);
                seen_name = true;
            }
            continue;
        }
        if line.starts_with(CLASS_KEYWORD) {
            metadata.class_name = field(line, CLASS_NAME_FIELD);
            break;
        }
    }

    metadata
}

fn field(line: &str, index: usize) -> Option<String> {
    line.split(' ')
        .nth(index)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
}

/// Read a descriptor and extract its metadata.
///
/// Incomplete metadata is logged, not rejected.
pub fn read_metadata<F: FileSystem + ?Sized>(
    fs: &F,
    descriptor: &ModuleDescriptor,
) -> Result<ModuleMetadata> {
    let text = fs.read_to_string(&descriptor.path).map_err(|e| {
        ModselError::Descriptor(format!(
            "Failed to read descriptor {}: {}",
            descriptor.path.display(),
            e
        ))
    })?;

    let metadata = extract_metadata(&text);
    debug!(
        module = %descriptor.stem,
        type_tag = ?metadata.type_tag,
        class_name = ?metadata.class_name,
        "Extracted module metadata"
    );

    if !metadata.is_complete() {
        warn!(
            module = %descriptor.stem,
            has_type_tag = metadata.type_tag.is_some(),
            has_class = metadata.class_name.is_some(),
            "Module metadata is incomplete"
        );
    }

    Ok(metadata)
}
