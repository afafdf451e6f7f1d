use pretty_assertions::assert_eq;
use task_planner::{compute_stats, Draft, IdGenerator, Priority, Status, StoreError, Task, TaskStore};

fn task(id: i64, status: Status) -> Task {
    Task {
        id,
        title: format!("task {id}"),
        description: String::new(),
        status,
        priority: Priority::Medium,
        due_date: String::new(),
        project: String::new(),
    }
}

// ids 1,2,3 with statuses in_progress, pending, completed
fn three_tasks() -> TaskStore {
    TaskStore::with_tasks(vec![
        task(1, Status::InProgress),
        task(2, Status::Pending),
        task(3, Status::Completed),
    ])
}

#[test]
fn stats_of_three_tasks() {
    let stats = compute_stats(three_tasks().tasks());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.pending, 1);
    assert!((stats.completion_percentage - 33.333_333).abs() < 1e-3);
}

#[test]
fn create_then_reject_blank_title() {
    let mut store = three_tasks();
    let draft = Draft {
        title: "Write report".into(),
        description: "".into(),
        priority: Priority::Low,
        project: "".into(),
        due_date: "".into(),
    };

    let id = store.create_task(&draft).unwrap();
    assert_eq!(store.len(), 4);
    let created = store.tasks().last().unwrap();
    assert_eq!(created.id, id);
    assert_eq!(created.status, Status::Pending);
    assert_eq!(created.priority, Priority::Low);

    let snapshot = store.tasks().to_vec();
    assert_eq!(store.create_task(&Draft::new("   ")), Err(StoreError::EmptyTitle));
    assert_eq!(store.len(), 4);
    assert_eq!(store.tasks(), snapshot.as_slice());
}

#[test]
fn completing_the_pending_task() {
    let mut store = three_tasks();
    let before = store.tasks().to_vec();

    store.update_status(2, Status::Completed).unwrap();

    assert_eq!(store.get(2).unwrap().status, Status::Completed);
    assert_eq!(store.get(1), Some(&before[0]));
    assert_eq!(store.get(3), Some(&before[2]));

    let stats = store.stats();
    assert_eq!(
        (stats.completed, stats.in_progress, stats.pending, stats.total),
        (2, 1, 0, 3)
    );
}

#[test]
fn unknown_id_changes_nothing() {
    let mut store = three_tasks();
    let before = store.tasks().to_vec();
    // a caller that ignores the outcome sees a plain no-op
    let _ = store.update_status(99, Status::Completed);
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn ids_stay_unique_under_rapid_creation() {
    let mut store = TaskStore::new();
    for i in 0..500 {
        store.create_task(&Draft::new(format!("task {i}"))).unwrap();
    }
    let mut ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
    let in_order = ids.clone();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 500);
    assert_eq!(ids, in_order);
}

#[test]
fn sequential_ids_count_from_one() {
    let mut store = TaskStore::with_id_generator(IdGenerator::sequential());
    assert_eq!(store.create_task(&Draft::new("first")), Ok(1));
    assert_eq!(store.create_task(&Draft::new("second")), Ok(2));
}

#[test]
fn empty_collection_has_zero_percent() {
    let stats = compute_stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.completion_percentage, 0.0);
}
