use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::*;
use tracing::debug;

use crate::app::models::{Priority, Status, Task, TaskId};
use crate::app::stats::Stats;
use crate::app::store::TaskStore;

// Selection over the store's task snapshot
#[derive(Debug, Default)]
pub struct TaskList {
    pub state: ListState,
}

impl TaskList {
    // Move the selection to the next item, wrapping to the top
    pub fn next(&mut self, len: usize) {
        let i = match self.state.selected() {
            Some(i) => {
                if len == 0 || i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    // Move the selection to the previous item, wrapping to the bottom
    pub fn previous(&mut self, len: usize) {
        let i = match self.state.selected() {
            Some(i) => {
                if len == 0 {
                    0
                } else if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn unselect(&mut self) {
        self.state.select(None);
    }

    pub fn selected_id(&self, store: &TaskStore) -> Option<TaskId> {
        self.state
            .selected()
            .and_then(|i| store.tasks().get(i))
            .map(|task| task.id)
    }

    // Toggle completion of the selected task
    pub fn toggle_selected(&self, store: &mut TaskStore) -> Option<Status> {
        let id = self.selected_id(store)?;
        match store.toggle_completed(id) {
            Ok(status) => Some(status),
            Err(err) => {
                debug!(%err, "toggle ignored");
                None
            }
        }
    }
}

pub fn status_color(status: Status) -> Color {
    match status {
        Status::Completed => Color::Green,
        Status::InProgress => Color::Blue,
        Status::Pending => Color::Gray,
    }
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

fn status_marker(status: Status) -> &'static str {
    match status {
        Status::Completed => "[x] ",
        Status::InProgress => "[~] ",
        Status::Pending => "[ ] ",
    }
}

// Build the UI (list) for the task list
pub fn get_list_items_ui(tasks: &[Task]) -> Vec<ListItem<'_>> {
    tasks
        .iter()
        .map(|task| {
            let lines = vec![
                Line::from(vec![
                    Span::from(status_marker(task.status)).fg(status_color(task.status)),
                    Span::from(task.title.as_str()).fg(priority_color(task.priority)),
                    Span::from(format!(" ({})", task.priority)),
                ]),
                Line::from(vec![
                    Span::from(format!("    Project: {}", task.project)),
                    Span::from(format!(" Due: {}", task.due_date)),
                ]),
                Line::from(format!("    {}", task.description)),
            ];
            ListItem::new(lines).style(Style::default().fg(Color::White))
        })
        .collect()
}

// Build the UI (lines) for the statistics infobox
pub fn get_statistics_ui<'a>(stats: &Stats) -> Vec<Line<'a>> {
    let colored = |text: String, status: Status| {
        Line::from(Span::styled(text, Style::default().fg(status_color(status))))
    };
    vec![
        Line::from(format!("Total tasks: {}", stats.total)),
        colored(
            format!("Completed: {} ({}% of all)", stats.completed, stats.rounded_percentage()),
            Status::Completed,
        ),
        colored(format!("In progress: {}", stats.in_progress), Status::InProgress),
        colored(format!("Pending: {}", stats.pending), Status::Pending),
    ]
}

// Build the UI (lines) for the instructions infobox
pub fn get_instructions_ui<'a>() -> Vec<Line<'a>> {
    vec![
        "Enter - toggle done / not done".into(),
        "a - add a task".into(),
        "Up/Down - select, Left - unselect".into(),
        "Tab / 1-3 - switch tab".into(),
        "q - quit".into(),
    ]
}
