//! Operator module selection
//!
//! Two implementations sit behind [`ModuleSelector`]: the ratatui checklist
//! (feature `tui`) and a sequential `[Y/n]` prompt. [`detect_selector`] picks
//! one once, at startup.

pub mod prompt;

use std::io::IsTerminal;
use tracing::{debug, warn};

use crate::Result;

pub use prompt::PromptSelector;

/// Source of the operator's module choice
pub trait ModuleSelector {
    /// Return the chosen stems, in the order the selector yields them
    fn select(&mut self, catalog: &[String]) -> Result<Vec<String>>;

    /// Get selector name for logging
    fn name(&self) -> &'static str;
}

/// Ordered set of distinct module stems chosen for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    stems: Vec<String>,
}

impl SelectionSet {
    /// Build a selection from selector output.
    ///
    /// Duplicates keep their first position; stems absent from the catalog
    /// are dropped.
    pub fn from_choices(choices: Vec<String>, catalog: &[String]) -> Self {
        let mut stems: Vec<String> = Vec::with_capacity(choices.len());
        for stem in choices {
            if !catalog.contains(&stem) {
                warn!("Ignoring unknown module: {}", stem);
                continue;
            }
            if stems.contains(&stem) {
                continue;
            }
            stems.push(stem);
        }
        Self { stems }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stems.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.stems
    }
}

/// Whether the rich checklist can run in this process
pub fn checklist_available() -> bool {
    cfg!(feature = "tui") && std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Choose the selector implementation for this run
pub fn detect_selector(force_prompt: bool) -> Box<dyn ModuleSelector> {
    #[cfg(feature = "tui")]
    {
        if !force_prompt && checklist_available() {
            debug!("Using checklist selector");
            return Box::new(crate::cli::tui::ChecklistSelector::new());
        }
    }

    debug!(force_prompt, "Using sequential prompt selector");
    Box::new(PromptSelector::stdio())
}
