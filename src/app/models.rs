use std::fmt;
use std::str::FromStr;

use derivative::Derivative;

use crate::app::error::ParseError;

pub type TaskId = i64;

// Lifecycle stage of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
        }
    }

    // Target status of the "toggle completion" action.
    // Anything that is not completed becomes completed, a completed task
    // goes back to pending (an in-progress task never comes back to
    // in-progress through this path).
    pub fn toggled(&self) -> Status {
        match self {
            Status::Completed => Status::Pending,
            _ => Status::Completed,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseError::UnknownStatus(s.to_string()))
    }
}

// Urgency tag of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    // Next priority in the low -> medium -> high order, wrapping around
    pub fn next(&self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    // Previous priority in the low -> medium -> high order, wrapping around
    pub fn previous(&self) -> Priority {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPriority(s.to_string()))
    }
}

// A committed unit of work.
// Only the store creates tasks, and `status` is the only field it ever
// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub due_date: String,
    pub project: String,
}

// An uncommitted task as typed into the form. Starts with medium priority.
#[derive(Derivative, Clone, PartialEq, Eq)]
#[derivative(Debug, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
    #[derivative(Default(value = "Priority::Medium"))]
    pub priority: Priority,
    pub project: String,
    pub due_date: String,
}

impl Draft {
    pub fn new(title: impl Into<String>) -> Self {
        Draft {
            title: title.into(),
            ..Draft::default()
        }
    }

    // True when the title holds something other than whitespace
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Draft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names_round_trip_through_from_str() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>(), Ok(status));
        }
        assert_eq!(Status::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn test_status_outside_domain_is_rejected() {
        assert_eq!(
            "archived".parse::<Status>(),
            Err(ParseError::UnknownStatus("archived".to_string()))
        );
        assert!("Completed".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Status::Pending.toggled(), Status::Completed);
        assert_eq!(Status::InProgress.toggled(), Status::Completed);
        assert_eq!(Status::Completed.toggled(), Status::Pending);
    }

    #[test]
    fn test_priority_cycles() {
        assert_eq!(Priority::Low.next(), Priority::Medium);
        assert_eq!(Priority::High.next(), Priority::Low);
        assert_eq!(Priority::Low.previous(), Priority::High);
        for priority in Priority::ALL {
            assert_eq!(priority.next().previous(), priority);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_draft_defaults_to_medium_priority() {
        let draft = Draft::default();
        assert_eq!(draft.priority, Priority::Medium);
        assert!(draft.title.is_empty());
        assert!(draft.description.is_empty());
        assert!(draft.project.is_empty());
        assert!(draft.due_date.is_empty());
    }

    #[test]
    fn test_draft_has_title() {
        assert!(Draft::new("Write report").has_title());
        assert!(!Draft::new("   \t").has_title());
        assert!(!Draft::default().has_title());
    }

    #[test]
    fn test_draft_clear_restores_defaults() {
        let mut draft = Draft {
            title: "x".into(),
            description: "y".into(),
            priority: Priority::High,
            project: "z".into(),
            due_date: "2024-12-25".into(),
        };
        draft.clear();
        assert_eq!(draft, Draft::default());
    }
}
