pub mod error;
pub mod id_gen;
pub mod models;
pub mod stats;
pub mod store;
pub mod task_edit;
pub mod task_list;
pub mod ui;

pub use error::{ParseError, StoreError};
pub use id_gen::IdGenerator;
pub use models::{Draft, Priority, Status, Task, TaskId};
pub use stats::{compute_project_stats, compute_stats, ProjectStats, Stats};
pub use store::TaskStore;
