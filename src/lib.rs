// Personal task planner: an in-memory task store, progress statistics
// derived from it, and a terminal front-end driving both.

pub mod app;
pub mod config;

pub use app::{
    compute_project_stats, compute_stats, Draft, IdGenerator, ParseError, Priority, ProjectStats,
    Stats, Status, StoreError, Task, TaskId, TaskStore,
};
pub use config::{Config, ConfigError};
