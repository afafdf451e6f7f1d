use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use tracing::debug;

use crate::app::models::{Draft, Priority, TaskId};
use crate::app::store::TaskStore;

// Lines of the dialog, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Project,
    DueDate,
    Priority,
}

impl DraftField {
    const ORDER: [DraftField; 5] = [
        DraftField::Title,
        DraftField::Description,
        DraftField::Project,
        DraftField::DueDate,
        DraftField::Priority,
    ];

    fn at(y_position: usize) -> DraftField {
        DraftField::ORDER[y_position.min(DraftField::ORDER.len() - 1)]
    }

    fn prefix(&self) -> &'static str {
        match self {
            DraftField::Title => "Title:       ",
            DraftField::Description => "Description: ",
            DraftField::Project => "Project:     ",
            DraftField::DueDate => "Due date:    ",
            DraftField::Priority => "Priority:    ",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            DraftField::Title => "Task name",
            DraftField::Description => "Description",
            DraftField::Project => "Project",
            DraftField::DueDate => "2024-12-31",
            DraftField::Priority => "medium",
        }
    }
}

// State of the "new task" dialog
// Owns the draft until it is committed to the store
#[derive(Debug, Default)]
pub struct TaskEditDialogState {
    pub dialog_active: bool,
    draft: Draft,
    error_message: Option<String>,
    // (char column, line)
    cursor_position: (usize, usize),
}

impl TaskEditDialogState {
    // Opens the dialog on whatever the draft currently holds
    pub fn open(&mut self) {
        self.dialog_active = true;
        self.cursor_position = (self.draft.title.chars().count(), 0);
    }

    // Closes the dialog, the draft is kept for next time
    pub fn close(&mut self) {
        self.dialog_active = false;
        self.error_message = None;
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn active_field(&self) -> DraftField {
        DraftField::at(self.cursor_position.1)
    }

    fn text_of(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.draft.title,
            DraftField::Description => &self.draft.description,
            DraftField::Project => &self.draft.project,
            DraftField::DueDate => &self.draft.due_date,
            DraftField::Priority => self.draft.priority.as_str(),
        }
    }

    fn text_of_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::Title => Some(&mut self.draft.title),
            DraftField::Description => Some(&mut self.draft.description),
            DraftField::Project => Some(&mut self.draft.project),
            DraftField::DueDate => Some(&mut self.draft.due_date),
            DraftField::Priority => None,
        }
    }

    fn line_length(&self, y_position: usize) -> usize {
        self.text_of(DraftField::at(y_position)).chars().count()
    }

    // Move the cursor one line below, keeping the column where the line allows it
    pub fn move_cursor_down(&mut self) {
        let (x, y) = self.cursor_position;
        let y = (y + 1).min(DraftField::ORDER.len() - 1);
        self.cursor_position = (x.min(self.line_length(y)), y);
    }

    pub fn move_cursor_up(&mut self) {
        let (x, y) = self.cursor_position;
        let y = y.saturating_sub(1);
        self.cursor_position = (x.min(self.line_length(y)), y);
    }

    // On the priority line left/right cycle the priority instead
    pub fn move_cursor_left(&mut self) {
        if self.active_field() == DraftField::Priority {
            self.draft.priority = self.draft.priority.previous();
            return;
        }
        let (x, y) = self.cursor_position;
        self.cursor_position = (x.saturating_sub(1), y);
    }

    pub fn move_cursor_right(&mut self) {
        if self.active_field() == DraftField::Priority {
            self.draft.priority = self.draft.priority.next();
            return;
        }
        let (x, y) = self.cursor_position;
        self.cursor_position = ((x + 1).min(self.line_length(y)), y);
    }

    // Delete the char before the cursor
    pub fn delete_char(&mut self) {
        let (x, y) = self.cursor_position;
        if x == 0 {
            return;
        }
        if let Some(text) = self.text_of_mut(DraftField::at(y)) {
            let at = byte_index(text, x - 1);
            text.remove(at);
            self.cursor_position = (x - 1, y);
        }
    }

    // Insert a char at the cursor of the active line
    pub fn input(&mut self, to_insert: char) {
        // Typing the first letter of a priority picks it
        if self.active_field() == DraftField::Priority {
            if let Some(priority) = Priority::ALL
                .into_iter()
                .find(|p| p.as_str().starts_with(to_insert.to_ascii_lowercase()))
            {
                self.draft.priority = priority;
            }
            return;
        }

        let (x, y) = self.cursor_position;
        if let Some(text) = self.text_of_mut(DraftField::at(y)) {
            let at = byte_index(text, x);
            text.insert(at, to_insert);
            self.cursor_position = (x + 1, y);
        }
    }

    // Hand the draft to the store
    // On success the draft is cleared and the dialog closes, otherwise both stay as they are
    pub fn save_task(&mut self, store: &mut TaskStore) -> Option<TaskId> {
        match store.create_task(&self.draft) {
            Ok(id) => {
                self.draft.clear();
                self.error_message = None;
                self.dialog_active = false;
                self.cursor_position = (0, 0);
                Some(id)
            }
            Err(err) => {
                debug!(%err, "draft not committed");
                self.error_message = Some(err.to_string());
                None
            }
        }
    }
}

// Byte offset of the char at `char_index`, or the end of the string
fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(at, _)| at)
        .unwrap_or(text.len())
}

// Returns the UI content for the task edit dialog
pub fn get_task_edit_ui(state: &TaskEditDialogState) -> Vec<Line<'_>> {
    const GRAY_TEXT: Style = Style::new().fg(Color::Rgb(62, 62, 62));
    const WHITE_TEXT: Style = Style::new().fg(Color::White);
    const BLACK_ON_WHITE: Style = Style::new().fg(Color::Black).bg(Color::White);
    let mut text = Vec::new();

    let (cursor_x, cursor_y) = state.cursor_position;

    for (i, field) in DraftField::ORDER.iter().enumerate() {
        let value = state.text_of(*field);
        let mut spans = vec![Span::styled(field.prefix(), WHITE_TEXT)];

        if *field == DraftField::Priority {
            let style = if cursor_y == i { BLACK_ON_WHITE } else { WHITE_TEXT };
            spans.push(Span::styled(format!("< {value} >"), style));
        } else if value.is_empty() {
            // Empty line shows a placeholder; on the active line its first char is the cursor
            let placeholder = field.placeholder();
            if cursor_y == i {
                spans.push(Span::styled(placeholder.chars().take(1).collect::<String>(), BLACK_ON_WHITE));
                spans.push(Span::styled(placeholder.chars().skip(1).collect::<String>(), GRAY_TEXT));
            } else {
                spans.push(Span::styled(placeholder, GRAY_TEXT));
            }
        } else if cursor_y == i {
            spans.push(Span::styled(value.chars().take(cursor_x).collect::<String>(), WHITE_TEXT));
            let under_cursor: String = value.chars().skip(cursor_x).take(1).collect();
            if under_cursor.is_empty() {
                spans.push(Span::styled(" ", BLACK_ON_WHITE));
            } else {
                spans.push(Span::styled(under_cursor, BLACK_ON_WHITE));
            }
            spans.push(Span::styled(value.chars().skip(cursor_x + 1).collect::<String>(), WHITE_TEXT));
        } else {
            spans.push(Span::styled(value, WHITE_TEXT));
        }

        text.push(Line::from(spans));
    }

    text.push(Line::raw(""));

    if let Some(error_message) = state.error_message() {
        text.push(Line::from(Span::styled(error_message, Style::new().fg(Color::Red))));
        text.push(Line::raw(""));
    }

    text.push(Line::from(Span::styled(
        "Enter - save, Esc - close, Left/Right - change priority",
        WHITE_TEXT,
    )));

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::id_gen::IdGenerator;
    use crate::app::models::Status;
    use pretty_assertions::assert_eq;

    fn type_text(state: &mut TaskEditDialogState, text: &str) {
        for c in text.chars() {
            state.input(c);
        }
    }

    #[test]
    fn test_typing_fills_the_active_field() {
        let mut state = TaskEditDialogState::default();
        state.open();
        type_text(&mut state, "Write report");
        state.move_cursor_down();
        type_text(&mut state, "Q4 numbers");
        state.move_cursor_down();
        type_text(&mut state, "Ops");
        state.move_cursor_down();
        type_text(&mut state, "2025-01-31");

        assert_eq!(
            state.draft(),
            &Draft {
                title: "Write report".into(),
                description: "Q4 numbers".into(),
                priority: Priority::Medium,
                project: "Ops".into(),
                due_date: "2025-01-31".into(),
            }
        );
    }

    #[test]
    fn test_editing_in_the_middle_of_multibyte_text() {
        let mut state = TaskEditDialogState::default();
        state.open();
        type_text(&mut state, "Задача");
        state.move_cursor_left();
        state.move_cursor_left();
        state.delete_char();
        type_text(&mut state, "Ч");
        assert_eq!(state.draft().title, "ЗадЧча");
    }

    #[test]
    fn test_priority_line_cycles_and_accepts_initials() {
        let mut state = TaskEditDialogState::default();
        state.open();
        for _ in 0..4 {
            state.move_cursor_down();
        }
        assert_eq!(state.active_field(), DraftField::Priority);

        state.move_cursor_right();
        assert_eq!(state.draft().priority, Priority::High);
        state.move_cursor_right();
        assert_eq!(state.draft().priority, Priority::Low);
        state.move_cursor_left();
        assert_eq!(state.draft().priority, Priority::High);

        state.input('l');
        assert_eq!(state.draft().priority, Priority::Low);
        state.input('x');
        assert_eq!(state.draft().priority, Priority::Low);
    }

    #[test]
    fn test_save_commits_and_resets_the_draft() {
        let mut store = TaskStore::with_id_generator(IdGenerator::sequential());
        let mut state = TaskEditDialogState::default();
        state.open();
        type_text(&mut state, "Write report");

        let id = state.save_task(&mut store);

        assert_eq!(id, Some(1));
        assert!(!state.dialog_active);
        assert_eq!(state.draft(), &Draft::default());
        assert_eq!(state.error_message(), None);
        assert_eq!(store.get(1).unwrap().status, Status::Pending);
    }

    #[test]
    fn test_rejected_save_keeps_draft_and_dialog() {
        let mut store = TaskStore::with_id_generator(IdGenerator::sequential());
        let mut state = TaskEditDialogState::default();
        state.open();
        type_text(&mut state, "   ");
        state.move_cursor_down();
        type_text(&mut state, "kept");

        assert_eq!(state.save_task(&mut store), None);

        assert!(state.dialog_active);
        assert_eq!(state.draft().title, "   ");
        assert_eq!(state.draft().description, "kept");
        assert_eq!(state.error_message(), Some("Title cannot be empty"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_close_keeps_the_draft() {
        let mut state = TaskEditDialogState::default();
        state.open();
        type_text(&mut state, "half done");
        state.close();
        state.open();
        assert_eq!(state.draft().title, "half done");
        type_text(&mut state, "!");
        assert_eq!(state.draft().title, "half done!");
    }

    #[test]
    fn test_ui_lists_every_field() {
        let state = TaskEditDialogState::default();
        let lines = get_task_edit_ui(&state);
        // five fields, a blank line, the help line
        assert_eq!(lines.len(), 7);
    }
}
