use crate::app::models::{Status, Task};

// Aggregate progress of a task collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    // `completed / total * 100`, or `0.0` for an empty collection.
    pub completion_percentage: f64,
}

impl Stats {
    // Percentage as shown on screen, rounded half up
    pub fn rounded_percentage(&self) -> u16 {
        self.completion_percentage.round() as u16
    }

    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Pending => self.pending,
            Status::InProgress => self.in_progress,
            Status::Completed => self.completed,
        }
    }
}

// Progress of the tasks sharing one project label
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectStats {
    pub project: String,
    pub stats: Stats,
}

// Counts tasks per status. Never touches its input.
pub fn compute_stats(tasks: &[Task]) -> Stats {
    compute_stats_iter(tasks.iter())
}

fn compute_stats_iter<'a>(tasks: impl Iterator<Item = &'a Task>) -> Stats {
    let mut stats = Stats::default();
    for task in tasks {
        stats.total += 1;
        match task.status {
            Status::Pending => stats.pending += 1,
            Status::InProgress => stats.in_progress += 1,
            Status::Completed => stats.completed += 1,
        }
    }

    if stats.total > 0 {
        stats.completion_percentage = stats.completed as f64 / stats.total as f64 * 100.0;
    }
    stats
}

// One entry per project label, in order of first appearance.
// Tasks without a project share the empty label.
pub fn compute_project_stats(tasks: &[Task]) -> Vec<ProjectStats> {
    let mut projects: Vec<&str> = Vec::new();
    for task in tasks {
        if !projects.contains(&task.project.as_str()) {
            projects.push(task.project.as_str());
        }
    }

    projects
        .into_iter()
        .map(|project| ProjectStats {
            project: project.to_string(),
            stats: compute_stats_iter(tasks.iter().filter(|task| task.project == project)),
        })
        .collect()
}
