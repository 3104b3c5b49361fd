use tracing::{debug, warn};

use crate::catalog::ModuleMetadata;
use crate::config::{CodegenConfig, RegistrationStrategy};

/// One `table["tag"] = &factory<Class>;` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub type_tag: String,
    pub class_name: String,
}

impl Registration {
    pub fn new(type_tag: &str, class_name: &str) -> Self {
        Self {
            type_tag: type_tag.to_string(),
            class_name: class_name.to_string(),
        }
    }

    pub fn render(&self, codegen: &CodegenConfig) -> String {
        codegen.registration_statement(&self.type_tag, &self.class_name)
    }
}

/// Build the registrations for the selected modules' metadata, in selection order
pub fn build_registrations(
    metadata: &[ModuleMetadata],
    strategy: RegistrationStrategy,
) -> Vec<Registration> {
    match strategy {
        RegistrationStrategy::CrossProduct => cross_product(metadata),
        RegistrationStrategy::Paired => paired(metadata),
    }
}

/// Tags and classes are collected into two independent lists and every
/// tag is bound to every class. A module missing one field shifts the
/// pairing of everything after it.
fn cross_product(metadata: &[ModuleMetadata]) -> Vec<Registration> {
    let tags: Vec<&str> = metadata.iter().filter_map(|m| m.type_tag.as_deref()).collect();
    let classes: Vec<&str> = metadata.iter().filter_map(|m| m.class_name.as_deref()).collect();

    if metadata.len() > 1 {
        debug!(
            tags = tags.len(),
            classes = classes.len(),
            "Cross-product registration binds every tag to every class"
        );
    }

    let mut registrations = Vec::with_capacity(tags.len() * classes.len());
    for tag in &tags {
        for class in &classes {
            registrations.push(Registration::new(tag, class));
        }
    }
    registrations
}

fn paired(metadata: &[ModuleMetadata]) -> Vec<Registration> {
    metadata
        .iter()
        .filter_map(|m| match (&m.type_tag, &m.class_name) {
            (Some(tag), Some(class)) => Some(Registration::new(tag, class)),
            _ => {
                warn!(?m, "Skipping module without both a type tag and a class");
                None
            }
        })
        .collect()
}
