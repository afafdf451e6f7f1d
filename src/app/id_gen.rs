use chrono::Utc;

use crate::app::models::TaskId;

// Where the base value of a new id comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clock {
    // Milliseconds since the Unix epoch
    Wall,
    // Always zero, which turns the generator into a plain counter
    Frozen,
}

impl Clock {
    fn now(&self) -> TaskId {
        match self {
            Clock::Wall => Utc::now().timestamp_millis(),
            Clock::Frozen => 0,
        }
    }
}

// Hands out task ids that are strictly increasing for the lifetime of the
// generator.
// An id is the current clock reading, bumped to one past the last issued
// id when the clock has not moved on (two tasks created within the same
// millisecond, or the wall clock stepping backwards).
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: TaskId,
    clock: Clock,
}

impl IdGenerator {
    // Ids seeded from the wall clock
    pub fn new() -> Self {
        IdGenerator {
            last: 0,
            clock: Clock::Wall,
        }
    }

    // Ids 1, 2, 3, ...
    pub fn sequential() -> Self {
        IdGenerator {
            last: 0,
            clock: Clock::Frozen,
        }
    }

    // None once the id space is used up
    pub fn next_id(&mut self) -> Option<TaskId> {
        let id = self.clock.now().max(self.last.checked_add(1)?);
        self.last = id;
        Some(id)
    }

    // Make sure every future id is greater than `id`
    pub fn advance_past(&mut self, id: TaskId) {
        self.last = self.last.max(id);
    }

    pub fn last_issued(&self) -> Option<TaskId> {
        (self.last > 0).then_some(self.last)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
