/// Terminal User Interface for interactive module selection
pub mod checklist;
pub mod theme;

pub use checklist::ChecklistSelector;
