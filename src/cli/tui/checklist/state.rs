use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// How the checklist was left
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistOutcome {
    /// Checked modules, in catalog order
    Confirmed(Vec<String>),
    Cancelled,
}

/// State for the module checklist screen
#[derive(Debug, Clone, Default)]
pub struct ChecklistState {
    pub items: Vec<String>,
    pub checked: Vec<bool>,
    pub cursor: usize,
}

impl ChecklistState {
    pub fn new(items: Vec<String>) -> Self {
        let checked = vec![false; items.len()];
        Self {
            items,
            checked,
            cursor: 0,
        }
    }

    pub fn move_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.items.len() - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn move_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.items.len();
    }

    /// Toggle the item under the cursor
    pub fn toggle(&mut self) {
        if let Some(checked) = self.checked.get_mut(self.cursor) {
            *checked = !*checked;
        }
    }

    /// Check everything, or clear everything if all are already checked
    pub fn toggle_all(&mut self) {
        let all = self.checked.iter().all(|c| *c);
        self.checked.iter_mut().for_each(|c| *c = !all);
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn selected_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }

    pub fn selected(&self) -> Vec<String> {
        self.items
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// Apply a key press, returning an outcome once the operator is done
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ChecklistOutcome> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(ChecklistOutcome::Cancelled);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Char(' ') => self.toggle(),
            KeyCode::Char('a') => self.toggle_all(),
            KeyCode::Enter => return Some(ChecklistOutcome::Confirmed(self.selected())),
            KeyCode::Esc | KeyCode::Char('q') => return Some(ChecklistOutcome::Cancelled),
            _ => {}
        }
        None
    }
}
