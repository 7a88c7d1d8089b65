use lazytask_core::{JsonFileStore, TaskService, TaskServiceError, TaskValidationError};
use tempfile::TempDir;

fn open_service(dir: &TempDir) -> TaskService<JsonFileStore> {
    TaskService::open(JsonFileStore::new(dir.path().join("tasks.json"))).unwrap()
}

#[test]
fn add_then_list_contains_the_task_exactly_once() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let task = service
        .add_task("write report", "06-15-2025 04:30 PM")
        .unwrap();

    let listed: Vec<_> = service
        .list_by_due()
        .into_iter()
        .filter(|t| t.id == task.id)
        .collect();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].description, "write report");
    assert_eq!(listed[0].due, task.due);
}

#[test]
fn list_orders_ascending_by_due_date() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let later = service
        .add_task("exam prep", "06-15-2025 04:30 PM")
        .unwrap();
    let sooner = service
        .add_task("submit form", "06-10-2025 09:00 AM")
        .unwrap();

    let view = service.list_by_due();
    assert_eq!(view[0].id, sooner.id);
    assert_eq!(view[1].id, later.id);
}

#[test]
fn list_sort_is_stable_for_equal_due_dates() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let t3 = service.add_task("third due", "06-20-2025 10:00 AM").unwrap();
    let t1 = service.add_task("first due", "06-10-2025 10:00 AM").unwrap();
    let t2 = service.add_task("second due", "06-15-2025 10:00 AM").unwrap();

    let view = service.list_by_due();
    let ordered: Vec<_> = view.iter().map(|t| t.id).collect();
    assert_eq!(ordered, vec![t1.id, t2.id, t3.id]);

    // Two tasks sharing a due date keep insertion order.
    let tie_a = service.add_task("tie a", "06-10-2025 10:00 AM").unwrap();
    let tie_b = service.add_task("tie b", "06-10-2025 10:00 AM").unwrap();
    let view = service.list_by_due();
    let tie_positions: Vec<_> = view
        .iter()
        .filter(|t| t.due == tie_a.due)
        .map(|t| t.id)
        .collect();
    assert_eq!(tie_positions, vec![t1.id, tie_a.id, tie_b.id]);
}

#[test]
fn add_rejects_blank_description_and_leaves_state_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let err = service.add_task("   ", "06-15-2025 04:30 PM").unwrap_err();
    assert!(matches!(
        err,
        TaskServiceError::Validation(TaskValidationError::EmptyDescription)
    ));
    assert!(service.is_empty());
}

#[test]
fn add_rejects_malformed_due_input() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let err = service.add_task("write report", "2025-06-15 16:30").unwrap_err();
    assert!(matches!(
        err,
        TaskServiceError::Validation(TaskValidationError::InvalidDueFormat(_))
    ));
    assert!(service.is_empty());
}

#[test]
fn update_rewrites_description_and_due_but_not_created() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let task = service
        .add_task("draft slides", "06-15-2025 04:30 PM")
        .unwrap();
    let updated = service
        .update_task(task.id, "final slides", "06-16-2025 11:00 AM")
        .unwrap();

    assert_eq!(updated.id, task.id);
    assert_eq!(updated.description, "final slides");
    assert_ne!(updated.due, task.due);
    assert_eq!(updated.created, task.created);
}

#[test]
fn update_with_invalid_due_leaves_the_task_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let task = service
        .add_task("draft slides", "06-15-2025 04:30 PM")
        .unwrap();
    let err = service
        .update_task(task.id, "final slides", "tomorrow")
        .unwrap_err();
    assert!(matches!(
        err,
        TaskServiceError::Validation(TaskValidationError::InvalidDueFormat(_))
    ));

    let stored = service.get_task(task.id).unwrap();
    assert_eq!(stored.description, "draft slides");
    assert_eq!(stored.due, task.due);
}

#[test]
fn update_unknown_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let ghost = uuid::Uuid::new_v4();
    let err = service
        .update_task(ghost, "anything", "06-15-2025 04:30 PM")
        .unwrap_err();
    assert!(matches!(err, TaskServiceError::NotFound(id) if id == ghost));
}

#[test]
fn complete_removes_the_task_and_persists() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    let keep = service.add_task("keep me", "06-10-2025 09:00 AM").unwrap();
    let done = service.add_task("drop me", "06-15-2025 04:30 PM").unwrap();

    let removed = service.complete_task(done.id).unwrap();
    assert_eq!(removed.id, done.id);
    assert!(service.get_task(done.id).is_none());

    // Reopen from disk: the removal survived.
    let reopened = open_service(&dir);
    assert_eq!(reopened.len(), 1);
    assert!(reopened.get_task(keep.id).is_some());
}

#[test]
fn manual_entries_are_not_deduplicated() {
    let dir = TempDir::new().unwrap();
    let mut service = open_service(&dir);

    service.add_task("buy milk", "06-10-2025 09:00 AM").unwrap();
    service.add_task("buy milk", "06-12-2025 09:00 AM").unwrap();

    assert_eq!(service.len(), 2);
}

#[test]
fn empty_store_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let service = open_service(&dir);
    assert!(service.list_by_due().is_empty());
}
