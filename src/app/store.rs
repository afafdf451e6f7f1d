// The authoritative task collection.
// Insertion ordered, append only; the status of a task is the only thing that changes.
use tracing::debug;

use crate::app::error::StoreError;
use crate::app::id_gen::IdGenerator;
use crate::app::models::{Draft, Priority, Status, Task, TaskId};
use crate::app::stats::{compute_stats, Stats};

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::with_id_generator(IdGenerator::new())
    }

    pub fn with_id_generator(ids: IdGenerator) -> Self {
        TaskStore {
            tasks: Vec::new(),
            ids,
        }
    }

    // Start from an existing collection; new ids are issued past the largest seeded one
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut store = TaskStore::new();
        store.seed(tasks);
        store
    }

    // The three tasks the planner shows on first launch
    pub fn with_sample_tasks() -> Self {
        TaskStore::with_tasks(sample_tasks())
    }

    fn seed(&mut self, tasks: Vec<Task>) {
        for task in tasks {
            if self.get(task.id).is_some() {
                debug!(id = task.id, "skipping seeded task with duplicate id");
                continue;
            }
            self.ids.advance_past(task.id);
            self.tasks.push(task);
        }
    }

    // CREATE
    // Commits `draft` as a new pending task at the end of the collection.
    // A title that is empty after trimming leaves the collection untouched
    // and yields StoreError::EmptyTitle; the caller keeps its draft.
    pub fn create_task(&mut self, draft: &Draft) -> Result<TaskId, StoreError> {
        if !draft.has_title() {
            debug!("rejected draft with empty title");
            return Err(StoreError::EmptyTitle);
        }

        let Some(id) = self.ids.next_id() else {
            debug!("rejected draft, id space exhausted");
            return Err(StoreError::IdsExhausted);
        };
        let task = Task {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: Status::Pending,
            priority: draft.priority,
            due_date: draft.due_date.clone(),
            project: draft.project.clone(),
        };
        debug!(id, title = %task.title, priority = %task.priority, "task created");
        self.tasks.push(task);
        Ok(id)
    }

    // UPDATE
    // Replaces the status of the task with `id`. Nothing else changes.
    pub fn update_status(&mut self, id: TaskId, status: Status) -> Result<(), StoreError> {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                debug!(id, from = %task.status, to = %status, "status updated");
                task.status = status;
                Ok(())
            }
            None => {
                debug!(id, "status update for unknown task ignored");
                Err(StoreError::UnknownId(id))
            }
        }
    }

    // Flip between completed and not completed; returns the new status
    pub fn toggle_completed(&mut self, id: TaskId) -> Result<Status, StoreError> {
        let target = self.get(id).ok_or(StoreError::UnknownId(id))?.status.toggled();
        self.update_status(id, target)?;
        Ok(target)
    }

    // READ
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    // The first `count` tasks in insertion order
    pub fn recent(&self, count: usize) -> &[Task] {
        &self.tasks[..count.min(self.tasks.len())]
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn stats(&self) -> Stats {
        compute_stats(&self.tasks)
    }
}

fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Prepare the presentation".into(),
            description: "Build the slides for the client meeting".into(),
            status: Status::InProgress,
            priority: Priority::High,
            due_date: "2024-12-25".into(),
            project: "Project Alpha".into(),
        },
        Task {
            id: 2,
            title: "Update the documentation".into(),
            description: "Add the new API sections".into(),
            status: Status::Pending,
            priority: Priority::Medium,
            due_date: "2024-12-28".into(),
            project: "Project Beta".into(),
        },
        Task {
            id: 3,
            title: "Run the code review".into(),
            description: "Go through the team's pull request".into(),
            status: Status::Completed,
            priority: Priority::High,
            due_date: "2024-12-20".into(),
            project: "Project Alpha".into(),
        },
    ]
}
