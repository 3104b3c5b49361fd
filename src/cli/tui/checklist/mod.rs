//! Interactive module checklist

pub mod screen;
pub mod state;

use anyhow::Context;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::cli::tui::theme::Theme;
use crate::selector::ModuleSelector;
use crate::{ModselError, Result};

pub use state::{ChecklistOutcome, ChecklistState};

/// Multi-select checklist on the alternate screen
#[derive(Default)]
pub struct ChecklistSelector {
    theme: Theme,
}

impl ChecklistSelector {
    pub fn new() -> Self {
        Self::default()
    }

    fn run(
        &self,
        terminal: &mut DefaultTerminal,
        mut state: ChecklistState,
    ) -> anyhow::Result<ChecklistOutcome> {
        loop {
            terminal
                .draw(|frame| screen::render(frame, &state, &self.theme))
                .context("Failed to draw module checklist")?;

            if let Event::Key(key) = event::read().context("Failed to read terminal input")? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(outcome) = state.handle_key(key) {
                    return Ok(outcome);
                }
            }
        }
    }
}

impl ModuleSelector for ChecklistSelector {
    fn select(&mut self, catalog: &[String]) -> Result<Vec<String>> {
        if catalog.is_empty() {
            return Ok(Vec::new());
        }

        let mut terminal = ratatui::init();
        let result = self.run(&mut terminal, ChecklistState::new(catalog.to_vec()));
        ratatui::restore();

        match result? {
            ChecklistOutcome::Confirmed(selected) => Ok(selected),
            ChecklistOutcome::Cancelled => {
                Err(ModselError::Selection("Module selection cancelled".to_string()))
            }
        }
    }

    fn name(&self) -> &'static str {
        "checklist"
    }
}
