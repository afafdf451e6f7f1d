use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{prelude::*, widgets::*};
use std::{
    io,
    time::{Duration, Instant},
};
use tracing::info;

use crate::app::stats::compute_project_stats;
use crate::app::store::TaskStore;
use crate::app::{task_edit::*, task_list::*};

// How many tasks the dashboard shows
const RECENT_TASKS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Tasks,
    Statistics,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Tasks, Tab::Statistics];

    fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "1 Dashboard",
            Tab::Tasks => "2 Tasks",
            Tab::Statistics => "3 Statistics",
        }
    }

    fn index(&self) -> usize {
        Tab::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

pub struct App {
    pub store: TaskStore,
    pub items: TaskList,
    pub task_edit_dialog_state: TaskEditDialogState,
    pub active_tab: Tab,
}

impl App {
    pub fn new(store: TaskStore) -> App {
        App {
            store,
            items: TaskList::default(),
            task_edit_dialog_state: TaskEditDialogState::default(),
            active_tab: Tab::default(),
        }
    }

    // Apply one key press; returns false once the user asked to quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return true;
        }

        if self.task_edit_dialog_state.dialog_active {
            // Handle input for the task edit dialog
            let dialog = &mut self.task_edit_dialog_state;
            match key.code {
                KeyCode::Down => dialog.move_cursor_down(),
                KeyCode::Up => dialog.move_cursor_up(),
                KeyCode::Esc => dialog.close(),
                KeyCode::Enter => {
                    dialog.save_task(&mut self.store);
                }
                KeyCode::Left => dialog.move_cursor_left(),
                KeyCode::Right => dialog.move_cursor_right(),
                KeyCode::Backspace => dialog.delete_char(),
                KeyCode::Char(to_insert) => dialog.input(to_insert),
                _ => {}
            }
            return true;
        }

        match key.code {
            KeyCode::Char('q') => return false,
            KeyCode::Tab => self.active_tab = self.active_tab.next(),
            KeyCode::BackTab => self.active_tab = self.active_tab.previous(),
            KeyCode::Char('1') => self.active_tab = Tab::Dashboard,
            KeyCode::Char('2') => self.active_tab = Tab::Tasks,
            KeyCode::Char('3') => self.active_tab = Tab::Statistics,
            KeyCode::Char('a') => {
                self.active_tab = Tab::Tasks;
                self.task_edit_dialog_state.open();
            }
            _ if self.active_tab == Tab::Tasks => self.handle_list_key(key.code),
            _ => {}
        }
        true
    }

    // Selection keys only mean something where the task list is drawn
    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Down => self.items.next(self.store.len()),
            KeyCode::Up => self.items.previous(self.store.len()),
            KeyCode::Left => self.items.unselect(),
            KeyCode::Enter => {
                self.items.toggle_selected(&mut self.store);
            }
            _ => {}
        }
    }
}

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> io::Result<TaskStore> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| draw_ui(f, &mut app))?;
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if crossterm::event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if !app.handle_key(key) {
                    info!(tasks = app.store.len(), "quit requested");
                    return Ok(app.store);
                }
            }
        }
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
}

// Draws the whole user interface
fn draw_ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(f.size());

    let tabs = Tabs::new(Tab::ALL.iter().map(|tab| tab.title()).collect::<Vec<&str>>())
        .block(Block::default().borders(Borders::ALL).title("TaskPlanner"))
        .select(app.active_tab.index())
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    match app.active_tab {
        Tab::Dashboard => draw_dashboard(f, app, chunks[1]),
        Tab::Tasks => draw_tasks(f, app, chunks[1]),
        Tab::Statistics => draw_statistics(f, app, chunks[1]),
    }
}

fn progress_gauge<'a>(title: String, completed: usize, total: usize, percent: u16) -> Gauge<'a> {
    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent.min(100))
        .label(format!("{completed} of {total} ({percent}%)"))
}

fn draw_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.store.stats();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let statistics = Paragraph::new(get_statistics_ui(&stats))
        .block(Block::new().title("Overview").borders(Borders::ALL))
        .style(Style::new().white());
    f.render_widget(statistics, rows[0]);

    let gauge = progress_gauge(
        "Overall progress".to_string(),
        stats.completed,
        stats.total,
        stats.rounded_percentage(),
    );
    f.render_widget(gauge, rows[1]);

    let recent = List::new(get_list_items_ui(app.store.recent(RECENT_TASKS)))
        .block(Block::default().borders(Borders::ALL).title("Recent tasks"));
    f.render_widget(recent, rows[2]);
}

fn draw_tasks(f: &mut Frame, app: &mut App, area: Rect) {
    // Create two chunks of screen in 60-40 ratio
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    // Create a List from all tasks and highlight the currently selected one
    let task_list = List::new(get_list_items_ui(app.store.tasks()))
        .block(Block::default().borders(Borders::ALL).title("Tasks"))
        .highlight_style(
            Style::default()
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(task_list, chunks[0], &mut app.items.state);

    if app.task_edit_dialog_state.dialog_active {
        let new_task = Paragraph::new(get_task_edit_ui(&app.task_edit_dialog_state))
            .block(Block::new().title("New task").borders(Borders::ALL))
            .style(Style::new().white());

        f.render_widget(new_task, chunks[1]);
    } else {
        let instructions = Paragraph::new(get_instructions_ui())
            .block(Block::new().title("Commands").borders(Borders::ALL))
            .style(Style::new().white());

        f.render_widget(instructions, chunks[1]);
    }
}

fn draw_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.store.stats();
    let projects = compute_project_stats(app.store.tasks());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Length(3), Constraint::Min(0)])
        .split(chunks[0]);

    let statistics = Paragraph::new(get_statistics_ui(&stats))
        .block(Block::new().title("Completion").borders(Borders::ALL))
        .style(Style::new().white());
    f.render_widget(statistics, left[0]);
    f.render_widget(
        progress_gauge(
            "Productivity".to_string(),
            stats.completed,
            stats.total,
            stats.rounded_percentage(),
        ),
        left[1],
    );

    // One gauge per project, as many as fit
    let block = Block::default().borders(Borders::ALL).title("Projects");
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    let fitting = ((inner.height / 3) as usize).min(projects.len());
    if fitting == 0 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); fitting])
        .split(inner);

    for (project, row) in projects.iter().zip(rows.iter()) {
        let title = if project.project.is_empty() {
            "(no project)".to_string()
        } else {
            project.project.clone()
        };
        f.render_widget(
            progress_gauge(
                title,
                project.stats.completed,
                project.stats.total,
                project.stats.rounded_percentage(),
            ),
            *row,
        );
    }
}
