use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::{error::Error, fs::File, io, sync::Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

use task_planner::app::{store::TaskStore, ui};
use task_planner::config::Config;

// The terminal belongs to the UI, so log lines only go to a file
fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("task_planner=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    init_logging(&config)?;

    let store = if config.sample_tasks {
        TaskStore::with_sample_tasks()
    } else {
        TaskStore::new()
    };
    info!(tasks = store.len(), tick_ms = config.tick_rate.as_millis() as u64, "starting planner");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(store);
    let res = ui::run_app(&mut terminal, app, config.tick_rate);

    // Restore previous terminal state after exit
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(store) => {
            let stats = store.stats();
            info!(
                total = stats.total,
                completed = stats.completed,
                "planner closed, tasks are not kept"
            );
        }
        Err(err) => println!("{err:?}"),
    }

    Ok(())
}
