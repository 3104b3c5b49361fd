//! Facade template model
//!
//! The facade source is parsed into verbatim lines and named insertion
//! slots. Rendering fills each slot with its generated block and drops the
//! marker line itself.

use crate::{ModselError, Result};

/// Insertion points recognised in the facade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Generated `#include` directives
    Includes,
    /// Generated factory registrations
    Registrations,
}

impl SlotKind {
    pub const ALL: [SlotKind; 2] = [SlotKind::Includes, SlotKind::Registrations];

    /// Marker token identifying the slot's line
    pub fn marker(&self) -> &'static str {
        match self {
            SlotKind::Includes => "::AUTO_INCLUDES::",
            SlotKind::Registrations => "::AUTO_MODULES::",
        }
    }

    /// Slot whose marker appears in `line`. Includes take precedence.
    fn matching(line: &str) -> Option<SlotKind> {
        Self::ALL.into_iter().find(|kind| line.contains(kind.marker()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Line(String),
    Slot(SlotKind),
}

/// Generated text for each slot; every line already carries its `\n`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotContents {
    pub includes: String,
    pub registrations: String,
}

impl SlotContents {
    fn get(&self, kind: SlotKind) -> &str {
        match kind {
            SlotKind::Includes => &self.includes,
            SlotKind::Registrations => &self.registrations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeTemplate {
    segments: Vec<Segment>,
}

impl FacadeTemplate {
    /// Parse facade text, rejecting a marker that appears twice
    pub fn parse(text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut seen: Vec<SlotKind> = Vec::new();

        for (number, line) in text.lines().enumerate() {
            match SlotKind::matching(line) {
                Some(kind) => {
                    if seen.contains(&kind) {
                        return Err(ModselError::Template(format!(
                            "Marker {} appears more than once (again on line {})",
                            kind.marker(),
                            number + 1
                        )));
                    }
                    seen.push(kind);
                    segments.push(Segment::Slot(kind));
                }
                None => segments.push(Segment::Line(line.to_string())),
            }
        }

        Ok(Self { segments })
    }

    pub fn has_slot(&self, kind: SlotKind) -> bool {
        self.segments.contains(&Segment::Slot(kind))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn render(&self, contents: &SlotContents) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Line(line) => {
                    out.push_str(line);
                    out.push('\n');
                }
                Segment::Slot(kind) => out.push_str(contents.get(*kind)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FACADE: &str = "#include <facade.hpp>\n\
/* @!::AUTO_INCLUDES::@! */\n\
\n\
void load() {\n\
  /* @!::AUTO_MODULES::@! */\n\
}";

    #[test]
    fn test_parse_finds_both_slots() {
        let template = FacadeTemplate::parse(FACADE).unwrap();
        assert!(template.has_slot(SlotKind::Includes));
        assert!(template.has_slot(SlotKind::Registrations));
        assert_eq!(template.segments().len(), 6);
    }

    #[test]
    fn test_render_replaces_marker_lines() {
        let template = FacadeTemplate::parse(FACADE).unwrap();
        let rendered = template.render(&SlotContents {
            includes: "#include <a.hpp>\n".to_string(),
            registrations: "m[\"A\"] = &f<A>;\n".to_string(),
        });

        assert_eq!(
            rendered,
            "#include <facade.hpp>\n#include <a.hpp>\n\nvoid load() {\nm[\"A\"] = &f<A>;\n}\n"
        );
    }

    #[test]
    fn test_render_empty_slots_removes_markers() {
        let template = FacadeTemplate::parse(FACADE).unwrap();
        let rendered = template.render(&SlotContents::default());
        assert!(!rendered.contains("AUTO_"));
        assert_eq!(rendered, "#include <facade.hpp>\n\nvoid load() {\n}\n");
    }

    #[test]
    fn test_duplicate_marker_rejected() {
        let result = FacadeTemplate::parse("::AUTO_MODULES::\nx\n::AUTO_MODULES::\n");
        assert!(matches!(result, Err(ModselError::Template(_))));
    }

    #[test]
    fn test_includes_marker_wins_on_shared_line() {
        let template = FacadeTemplate::parse("::AUTO_INCLUDES:: ::AUTO_MODULES::\n").unwrap();
        assert_eq!(template.segments(), &[Segment::Slot(SlotKind::Includes)]);
    }

    #[test]
    fn test_crlf_lines_are_normalised() {
        let template = FacadeTemplate::parse("a\r\nb\r\n").unwrap();
        assert_eq!(template.render(&SlotContents::default()), "a\nb\n");
    }
}
