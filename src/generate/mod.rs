//! Artifact generation: facade rewriting and manifest updates

pub mod facade;
pub mod manifest;
pub mod registration;
pub mod template;

pub use facade::FacadeRewriter;
pub use manifest::ManifestUpdater;
pub use registration::{build_registrations, Registration};
pub use template::{FacadeTemplate, Segment, SlotContents, SlotKind};
