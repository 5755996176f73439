//! Store and derived-view behavior over the sample fixtures.

use hibi::model::sample;
use hibi::{
    filter_tasks, project_task_view, set_field, summarize_projects, summarize_tasks, EntityStore,
    ProjectField, ProjectForm, ProjectId, ProjectStatus, StatusFilter, StoreError, TaskField,
    TaskForm, TaskId, TaskStatus, ValidationError,
};
use proptest::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> EntityStore {
    EntityStore::sample()
}

fn named(name: &str) -> ProjectForm {
    ProjectForm {
        name: name.to_string(),
        ..ProjectForm::default()
    }
}

// ── Project CRUD ────────────────────────────────────────────────

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_project_name_is_refused(mut store: EntityStore, #[case] name: &str) {
    let before = store.len();
    let result = store.create_project(&named(name));
    assert_eq!(result.unwrap_err(), ValidationError::Blank { field: "name" });
    assert_eq!(store.len(), before);
}

#[rstest]
fn created_project_is_trimmed_and_first(mut store: EntityStore) {
    let id = store.create_project(&named("  Foo  ")).unwrap().id.clone();
    assert_eq!(store.len(), 4);
    assert_eq!(store.projects()[0].id, id);
    assert_eq!(store.projects()[0].name, "Foo");
    assert!(store.projects()[0].tasks.is_empty());
}

#[rstest]
fn created_ids_are_unique(mut store: EntityStore) {
    for i in 0..20 {
        store.create_project(&named(&format!("p{i}"))).unwrap();
    }
    let mut ids: Vec<_> = store.projects().iter().map(|p| p.id.clone()).collect();
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    ids.dedup();
    assert_eq!(ids.len(), store.len());
}

#[rstest]
fn deleting_a_project_removes_its_tasks(mut store: EntityStore) {
    let removed = store.delete_project(&ProjectId::new("project-1")).unwrap();
    assert_eq!(removed.tasks.len(), 3);
    assert_eq!(store.len(), 2);
    for id in ["task-1", "task-2", "task-3"] {
        assert!(!store.contains_task(&TaskId::new(id)));
    }
    assert_eq!(store.all_tasks().len(), 4);
}

#[rstest]
fn unknown_project_is_not_found(mut store: EntityStore) {
    let missing = ProjectId::new("project-404");
    assert!(matches!(
        store.update_project(&missing, &named("x")),
        Err(StoreError::ProjectNotFound(_))
    ));
    assert!(matches!(store.delete_project(&missing), Err(StoreError::ProjectNotFound(_))));
    assert_eq!(store.len(), 3);
}

#[rstest]
fn update_keeps_id_and_tasks(mut store: EntityStore) {
    let id = ProjectId::new("project-2");
    let form = ProjectForm {
        name: "改名".into(),
        status: ProjectStatus::Completed,
        start_date: "2025-01-01".into(),
        end_date: "2025-03-01".into(),
        ..ProjectForm::default()
    };
    let updated = store.update_project(&id, &form).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "改名");
    assert_eq!(updated.status, ProjectStatus::Completed);
    assert_eq!(updated.tasks.len(), 2);
}

#[rstest]
fn end_before_start_is_refused(mut store: EntityStore) {
    let form = ProjectForm {
        name: "x".into(),
        start_date: "2025-03-01".into(),
        end_date: "2025-01-01".into(),
        ..ProjectForm::default()
    };
    assert!(matches!(
        store.create_project(&form),
        Err(ValidationError::EndBeforeStart { .. })
    ));
    assert_eq!(store.len(), 3);
}

// ── Task CRUD ───────────────────────────────────────────────────

#[rstest]
fn task_crud_in_one_project(mut store: EntityStore) {
    let project = ProjectId::new("project-2");
    let form = TaskForm {
        title: "  新しいタスク ".into(),
        tags: "開発, 統合、開発".into(),
        ..TaskForm::default()
    };
    let task = store.create_task(&project, &form).unwrap().clone();
    assert_eq!(task.title, "新しいタスク");
    assert_eq!(task.tags, vec!["開発".to_string(), "統合".to_string()]);
    assert_eq!(store.project(&project).unwrap().tasks[0].id, task.id);

    let edit = TaskForm {
        status: TaskStatus::Completed,
        ..TaskForm::from_task(&task)
    };
    let updated = store.update_task(&project, &task.id, &edit).unwrap();
    assert_eq!(updated.status, TaskStatus::Completed);
    assert!(updated.updated_at >= task.updated_at);
    assert_eq!(updated.created_at, task.created_at);

    let before = store.all_tasks().len();
    store.delete_task(&project, &task.id).unwrap();
    assert_eq!(store.all_tasks().len(), before - 1);
    assert!(!store.contains_task(&task.id));
}

#[rstest]
fn task_in_other_project_is_not_found(mut store: EntityStore) {
    let result = store.delete_task(&ProjectId::new("project-2"), &TaskId::new("task-1"));
    assert!(matches!(result, Err(StoreError::TaskNotFound { .. })));
    assert!(store.contains_task(&TaskId::new("task-1")));
}

// ── Derived views ───────────────────────────────────────────────

#[test]
fn completed_filter_keeps_fixture_order() {
    let tasks = sample::tasks();
    let ids: Vec<_> = filter_tasks(&tasks, StatusFilter::Only(TaskStatus::Completed), "")
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, ["1"]);

    let in_progress: Vec<_> = filter_tasks(&tasks, StatusFilter::Only(TaskStatus::InProgress), "")
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(in_progress, ["2", "5"]);
}

#[rstest]
#[case("calendar")]
#[case("CALENDAR")]
#[case("Calendar")]
fn search_is_case_insensitive(#[case] query: &str) {
    let tasks = sample::tasks();
    let titles: Vec<_> = filter_tasks(&tasks, StatusFilter::All, query)
        .into_iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, ["Google Calendar API統合"]);
}

#[rstest]
fn summaries_add_up(store: EntityStore) {
    let projects = summarize_projects(store.projects());
    assert_eq!(projects.total, 3);
    assert_eq!(
        projects.planning + projects.in_progress + projects.on_hold + projects.completed,
        projects.total
    );

    let tasks = summarize_tasks(store.all_tasks());
    assert_eq!(tasks.all, 7);
    assert_eq!(
        tasks.not_started + tasks.in_progress + tasks.completed + tasks.overdue,
        tasks.all
    );
}

#[rstest]
fn unknown_route_shows_placeholder(store: EntityStore) {
    let view = project_task_view(&store, &ProjectId::new("project-99"));
    assert!(!view.registered);
    assert_eq!(view.context.name, "未登録プロジェクト");
    assert_eq!(view.context.status, ProjectStatus::Planning);
    assert!(view.tasks.is_empty());

    let known = project_task_view(&store, &ProjectId::new("project-3"));
    assert!(known.registered);
    assert_eq!(known.tasks.len(), 2);
}

// ── Properties ──────────────────────────────────────────────────

fn task_status() -> impl Strategy<Value = TaskStatus> {
    prop::sample::select(TaskStatus::ALL.to_vec())
}

proptest! {
    #[test]
    fn set_name_replaces_only_name(
        name in ".*",
        description in ".*",
        new_name in ".*"
    ) {
        let draft = ProjectForm {
            name,
            description: description.clone(),
            status: ProjectStatus::OnHold,
            start_date: "2025-01-01".into(),
            end_date: String::new(),
        };
        let next = set_field(&draft, ProjectField::Name(new_name.clone()));
        prop_assert_eq!(&next.name, &new_name);
        prop_assert_eq!(next.description, description);
        prop_assert_eq!(next.status, ProjectStatus::OnHold);
        prop_assert_eq!(next.start_date, draft.start_date.clone());
        prop_assert_eq!(next.end_date, draft.end_date.clone());
    }

    #[test]
    fn set_status_leaves_task_text_alone(title in ".*", tags in ".*", status in task_status()) {
        let draft = TaskForm { title: title.clone(), tags: tags.clone(), ..TaskForm::default() };
        let next = set_field(&draft, TaskField::Status(status));
        prop_assert_eq!(next.status, status);
        prop_assert_eq!(next.title, title);
        prop_assert_eq!(next.tags, tags);
        prop_assert_eq!(draft.status, TaskStatus::NotStarted);
    }

    #[test]
    fn filter_result_is_ordered_subset(query in "[a-zA-Z統合 ]{0,6}", status in task_status()) {
        let tasks = sample::tasks();
        let visible = filter_tasks(&tasks, StatusFilter::Only(status), &query);
        let mut last = None;
        for position in visible.iter().map(|v| tasks.iter().position(|t| t.id == v.id)) {
            prop_assert!(position.is_some());
            prop_assert!(position > last);
            last = position;
        }
        for task in visible {
            prop_assert_eq!(task.status, status);
        }
    }

    #[test]
    fn whitespace_name_never_grows_store(name in "[ \t\n]{0,8}") {
        let mut store = EntityStore::sample();
        prop_assert!(store.create_project(&named(&name)).is_err());
        prop_assert_eq!(store.len(), 3);
    }
}
