//! Screen controller flows: create, edit sessions, filtering.

use hibi::{
    EntityStore, ProjectField, ProjectId, ProjectManager, ProjectStatus, StatusFilter, StoreError,
    TaskField, TaskId, TaskManager, TaskPriority, TaskStatus, ValidationError,
};
use rstest::{fixture, rstest};

#[fixture]
fn store() -> EntityStore {
    EntityStore::sample()
}

#[rstest]
fn failed_create_keeps_draft_and_success_resets_it(mut store: EntityStore) {
    let mut projects = ProjectManager::new();
    projects.set_new_field(ProjectField::Description("説明だけ".into()));
    assert!(projects.create(&mut store).is_err());
    assert_eq!(projects.new_project().description, "説明だけ");

    projects.set_new_field(ProjectField::Name("新規".into()));
    let id = projects.create(&mut store).unwrap();
    assert_eq!(store.projects()[0].id, id);
    assert_eq!(projects.new_project(), &Default::default());
}

#[rstest]
fn second_edit_replaces_first(mut store: EntityStore) {
    let a = ProjectId::new("project-1");
    let b = ProjectId::new("project-2");
    let original_a = store.project(&a).unwrap().clone();
    let mut projects = ProjectManager::new();

    projects.start_edit(&store, &a).unwrap();
    projects.set_edit_field(ProjectField::Name("A 改".into()));
    projects.start_edit(&store, &b).unwrap();

    let session = projects.editing().unwrap();
    assert_eq!(session.target(), &b);
    assert_eq!(session.draft().name, store.project(&b).unwrap().name);

    projects.set_edit_field(ProjectField::Status(ProjectStatus::Completed));
    projects.save_edit(&mut store).unwrap();
    assert_eq!(store.project(&a), Some(&original_a));
    assert_eq!(store.project(&b).unwrap().status, ProjectStatus::Completed);
    assert!(projects.editing().is_none());
}

#[rstest]
fn cancel_leaves_project_unchanged(mut store: EntityStore) {
    let id = ProjectId::new("project-3");
    let before = store.project(&id).unwrap().clone();
    let mut projects = ProjectManager::new();

    projects.start_edit(&store, &id).unwrap();
    projects.set_edit_field(ProjectField::Name("破棄される名前".into()));
    projects.cancel_edit();

    assert!(projects.editing().is_none());
    assert_eq!(projects.save_edit(&mut store), Ok(None));
    assert_eq!(store.project(&id), Some(&before));
}

#[rstest]
fn invalid_edit_stays_open(mut store: EntityStore) {
    let id = ProjectId::new("project-1");
    let mut projects = ProjectManager::new();
    projects.start_edit(&store, &id).unwrap();
    projects.set_edit_field(ProjectField::Name("  ".into()));

    let result = projects.save_edit(&mut store);
    assert_eq!(
        result,
        Err(StoreError::Validation(ValidationError::Blank { field: "name" }))
    );
    assert!(projects.is_editing(&id));
    assert_eq!(store.project(&id).unwrap().name, "MVP 基盤構築");
}

#[rstest]
fn deleting_the_edited_project_closes_the_session(mut store: EntityStore) {
    let id = ProjectId::new("project-2");
    let mut projects = ProjectManager::new();
    projects.start_edit(&store, &id).unwrap();
    projects.delete(&mut store, &id).unwrap();
    assert!(projects.editing().is_none());
    assert_eq!(projects.summary(&store).total, 2);
}

// ── Tasks ───────────────────────────────────────────────────────

#[rstest]
fn scoped_manager_only_sees_its_project(store: EntityStore) {
    let tasks = TaskManager::for_project(ProjectId::new("project-3"));
    let ids: Vec<_> = tasks
        .visible_tasks(&store)
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, ["task-6", "task-7"]);
    assert_eq!(tasks.summary(&store).all, 2);
}

#[rstest]
#[case(StatusFilter::All, 7)]
#[case(StatusFilter::Only(TaskStatus::NotStarted), 2)]
#[case(StatusFilter::Only(TaskStatus::InProgress), 2)]
#[case(StatusFilter::Only(TaskStatus::Completed), 2)]
#[case(StatusFilter::Only(TaskStatus::Overdue), 1)]
fn tabs_count_all_tasks(store: EntityStore, #[case] tab: StatusFilter, #[case] expected: usize) {
    let tasks = TaskManager::all().with_status_filter(tab);
    assert_eq!(tasks.visible_tasks(&store).len(), expected);
    assert_eq!(tasks.summary(&store).count(tab), expected);
}

#[rstest]
fn summary_ignores_the_active_filter(store: EntityStore) {
    let mut tasks = TaskManager::all();
    tasks.set_status_filter(StatusFilter::Only(TaskStatus::Overdue));
    tasks.set_query("存在しないタイトル");
    assert!(tasks.visible_tasks(&store).is_empty());
    assert_eq!(tasks.summary(&store).all, 7);
}

#[rstest]
fn unscoped_create_needs_a_target(mut store: EntityStore) {
    let mut tasks = TaskManager::all();
    tasks.set_new_field(TaskField::Title("目標なし".into()));
    assert_eq!(
        tasks.create(&mut store),
        Err(StoreError::Validation(ValidationError::Blank { field: "project" }))
    );
    assert_eq!(tasks.new_task().title, "目標なし");

    let target = ProjectId::new("project-2");
    tasks.set_target_project(Some(target.clone()));
    tasks.set_new_field(TaskField::Priority(Some(TaskPriority::High)));
    let created = tasks.create(&mut store).unwrap();
    assert_eq!(created.project, target);
    let task = store.project(&target).unwrap().task(&created.task).unwrap();
    assert_eq!(task.priority, Some(TaskPriority::High));
    assert_eq!(tasks.new_task().title, "");
}

#[rstest]
fn scoped_target_cannot_be_changed() {
    let scope = ProjectId::new("project-1");
    let mut tasks = TaskManager::for_project(scope.clone());
    tasks.set_target_project(Some(ProjectId::new("project-2")));
    assert_eq!(tasks.target_project(), Some(&scope));
}

#[rstest]
fn task_edit_round(mut store: EntityStore) {
    let id = TaskId::new("task-5");
    let mut tasks = TaskManager::all();
    tasks.start_edit(&store, &id).unwrap();
    assert_eq!(tasks.editing().unwrap().target().project, ProjectId::new("project-2"));

    tasks.set_edit_field(TaskField::Status(TaskStatus::InProgress));
    tasks.set_edit_field(TaskField::Tags("設計, レビュー".into()));
    let saved = tasks.save_edit(&mut store).unwrap().unwrap();
    assert_eq!(saved.task, id);

    let task = store.owner_of(&id).unwrap().task(&id).unwrap();
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.tags, ["設計", "レビュー"]);
    assert!(!tasks.is_editing(&id));
}

#[rstest]
fn second_task_edit_replaces_first(mut store: EntityStore) {
    let a = TaskId::new("task-1");
    let b = TaskId::new("task-6");
    let original_a = store.owner_of(&a).unwrap().task(&a).unwrap().clone();
    let mut tasks = TaskManager::all();

    tasks.start_edit(&store, &a).unwrap();
    tasks.set_edit_field(TaskField::Title("A の下書き".into()));
    tasks.start_edit(&store, &b).unwrap();

    assert!(!tasks.is_editing(&a));
    assert!(tasks.is_editing(&b));
    let session = tasks.editing().unwrap();
    assert_eq!(session.target().project, ProjectId::new("project-3"));
    assert_eq!(session.draft().title, store.owner_of(&b).unwrap().task(&b).unwrap().title);

    tasks.set_edit_field(TaskField::Status(TaskStatus::Overdue));
    tasks.save_edit(&mut store).unwrap();
    assert_eq!(store.owner_of(&a).unwrap().task(&a), Some(&original_a));
    assert_eq!(
        store.owner_of(&b).unwrap().task(&b).unwrap().status,
        TaskStatus::Overdue
    );
    assert!(tasks.editing().is_none());
}

#[rstest]
fn task_edit_for_deleted_task_closes(mut store: EntityStore) {
    let id = TaskId::new("task-4");
    let mut tasks = TaskManager::all();
    tasks.start_edit(&store, &id).unwrap();
    store
        .delete_task(&ProjectId::new("project-2"), &id)
        .unwrap();

    assert!(matches!(
        tasks.save_edit(&mut store),
        Err(StoreError::TaskNotFound { .. })
    ));
    assert!(tasks.editing().is_none());
}

#[rstest]
fn unknown_task_cannot_be_edited_or_deleted(mut store: EntityStore) {
    let id = TaskId::new("task-404");
    let mut tasks = TaskManager::all();
    assert_eq!(tasks.start_edit(&store, &id), Err(StoreError::UnknownTask(id.clone())));
    assert_eq!(tasks.delete(&mut store, &id), Err(StoreError::UnknownTask(id)));
    assert_eq!(store.all_tasks().len(), 7);
}
