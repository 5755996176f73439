//! Screen controllers for the project list and the task list.
//!
//! A controller owns a screen's drafts, its single edit session and (for
//! tasks) the filter criteria. The [`EntityStore`] stays with the caller and
//! is passed in by reference to each operation.

use tracing::debug;

use crate::error::{StoreError, ValidationError};
use crate::filter::{filter_tasks, StatusFilter};
use crate::form::{EditSession, ProjectField, ProjectForm, TaskField, TaskForm};
use crate::model::{Project, ProjectId, Task, TaskId};
use crate::store::EntityStore;
use crate::summary::{summarize_projects, summarize_tasks, ProjectSummary, TaskSummary};

// ── Projects ────────────────────────────────────────────────────────────────

pub type ProjectEdit = EditSession<ProjectId, ProjectForm>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectManager {
    new_project: ProjectForm,
    editing: Option<ProjectEdit>,
}

impl ProjectManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The create-form draft.
    pub fn new_project(&self) -> &ProjectForm {
        &self.new_project
    }

    pub fn set_new_field(&mut self, field: ProjectField) {
        self.new_project = crate::form::set_field(&self.new_project, field);
    }

    /// Commit the create-form. On success the draft resets to empty; on
    /// failure it is kept so the user can correct it.
    pub fn create(&mut self, store: &mut EntityStore) -> Result<ProjectId, ValidationError> {
        let id = store.create_project(&self.new_project)?.id.clone();
        self.new_project = ProjectForm::default();
        Ok(id)
    }

    pub fn editing(&self) -> Option<&ProjectEdit> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &ProjectId) -> bool {
        self.editing.as_ref().is_some_and(|e| e.target() == id)
    }

    /// Open an edit on `id`, seeded from the stored project. Any edit already
    /// open is replaced and its unsaved changes are dropped.
    pub fn start_edit(&mut self, store: &EntityStore, id: &ProjectId) -> Result<(), StoreError> {
        let project = store
            .project(id)
            .ok_or_else(|| StoreError::ProjectNotFound(id.clone()))?;
        if let Some(previous) = self.editing.as_ref().filter(|e| e.target() != id) {
            debug!(previous = %previous.target(), next = %id, "replacing open project edit");
        }
        self.editing = Some(EditSession::new(id.clone(), ProjectForm::from_project(project)));
        Ok(())
    }

    /// Set a field on the open edit draft. Returns `false` when nothing is being edited.
    pub fn set_edit_field(&mut self, field: ProjectField) -> bool {
        match self.editing.as_mut() {
            Some(session) => {
                session.set_field(field);
                true
            }
            None => false,
        }
    }

    /// Commit the open edit. `Ok(None)` when no edit is open.
    ///
    /// A validation failure keeps the session open. If the target no longer
    /// exists the session is closed.
    pub fn save_edit(&mut self, store: &mut EntityStore) -> Result<Option<ProjectId>, StoreError> {
        let Some(session) = self.editing.as_ref() else {
            return Ok(None);
        };
        match store.update_project(session.target(), session.draft()) {
            Ok(project) => {
                let id = project.id.clone();
                self.editing = None;
                Ok(Some(id))
            }
            Err(err @ StoreError::ProjectNotFound(_)) => {
                self.editing = None;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Drop the open edit without touching the store.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Delete a project, closing the edit session if it targeted that project.
    pub fn delete(&mut self, store: &mut EntityStore, id: &ProjectId) -> Result<Project, StoreError> {
        let removed = store.delete_project(id)?;
        if self.is_editing(id) {
            self.editing = None;
        }
        Ok(removed)
    }

    pub fn summary(&self, store: &EntityStore) -> ProjectSummary {
        summarize_projects(store.projects())
    }
}

// ── Tasks ───────────────────────────────────────────────────────────────────

/// A task addressed through its owning project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskRef {
    pub project: ProjectId,
    pub task: TaskId,
}

pub type TaskEdit = EditSession<TaskRef, TaskForm>;

/// State of the task screen: which tasks are in scope, how they are
/// filtered, and the task drafts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskManager {
    /// `None` shows every task in the store.
    scope: Option<ProjectId>,
    status_filter: StatusFilter,
    query: String,
    new_task: TaskForm,
    /// Project new tasks are added to.
    target_project: Option<ProjectId>,
    editing: Option<TaskEdit>,
}

impl TaskManager {
    /// Every task in the store.
    pub fn all() -> Self {
        Self::default()
    }

    /// Only the tasks of one project.
    pub fn for_project(id: ProjectId) -> Self {
        Self {
            scope: Some(id.clone()),
            target_project: Some(id),
            ..Self::default()
        }
    }

    pub fn with_status_filter(mut self, filter: StatusFilter) -> Self {
        self.status_filter = filter;
        self
    }

    pub fn scope(&self) -> Option<&ProjectId> {
        self.scope.as_ref()
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Tasks in scope, before filtering.
    pub fn scoped_tasks<'a>(&self, store: &'a EntityStore) -> Vec<&'a Task> {
        match &self.scope {
            Some(id) => store
                .project(id)
                .map(|p| p.tasks.iter().collect())
                .unwrap_or_default(),
            None => store.all_tasks(),
        }
    }

    /// Tasks in scope that pass the status filter and search query.
    pub fn visible_tasks<'a>(&self, store: &'a EntityStore) -> Vec<&'a Task> {
        filter_tasks(self.scoped_tasks(store), self.status_filter, &self.query)
    }

    /// Counters over every task in scope, ignoring the current filter.
    pub fn summary(&self, store: &EntityStore) -> TaskSummary {
        summarize_tasks(self.scoped_tasks(store))
    }

    // ── Create ──────────────────────────────────────────────────

    pub fn new_task(&self) -> &TaskForm {
        &self.new_task
    }

    pub fn set_new_field(&mut self, field: TaskField) {
        self.new_task = crate::form::set_field(&self.new_task, field);
    }

    pub fn target_project(&self) -> Option<&ProjectId> {
        self.target_project.as_ref()
    }

    /// Choose the project new tasks go to. Fixed to the scope when scoped.
    pub fn set_target_project(&mut self, id: Option<ProjectId>) {
        if self.scope.is_none() {
            self.target_project = id;
        }
    }

    /// Commit the new-task draft into the target project. On success the
    /// draft resets; on failure it is kept.
    pub fn create(&mut self, store: &mut EntityStore) -> Result<TaskRef, StoreError> {
        let project = self
            .target_project
            .clone()
            .ok_or(ValidationError::Blank { field: "project" })?;
        let task = store.create_task(&project, &self.new_task)?.id.clone();
        self.new_task = TaskForm::default();
        Ok(TaskRef { project, task })
    }

    // ── Edit ────────────────────────────────────────────────────

    pub fn editing(&self) -> Option<&TaskEdit> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, task: &TaskId) -> bool {
        self.editing.as_ref().is_some_and(|e| &e.target().task == task)
    }

    /// Open an edit on `task`, replacing any edit already open.
    pub fn start_edit(&mut self, store: &EntityStore, task: &TaskId) -> Result<(), StoreError> {
        let project = store
            .owner_of(task)
            .ok_or_else(|| StoreError::UnknownTask(task.clone()))?;
        let draft = project
            .task(task)
            .map(TaskForm::from_task)
            .unwrap_or_default();
        let target = TaskRef {
            project: project.id.clone(),
            task: task.clone(),
        };
        self.editing = Some(EditSession::new(target, draft));
        Ok(())
    }

    pub fn set_edit_field(&mut self, field: TaskField) -> bool {
        match self.editing.as_mut() {
            Some(session) => {
                session.set_field(field);
                true
            }
            None => false,
        }
    }

    /// Commit the open edit. Same rules as [`ProjectManager::save_edit`].
    pub fn save_edit(&mut self, store: &mut EntityStore) -> Result<Option<TaskRef>, StoreError> {
        let Some(session) = self.editing.as_ref() else {
            return Ok(None);
        };
        let target = session.target().clone();
        match store.update_task(&target.project, &target.task, session.draft()) {
            Ok(_) => {
                self.editing = None;
                Ok(Some(target))
            }
            Err(err @ (StoreError::ProjectNotFound(_) | StoreError::TaskNotFound { .. })) => {
                self.editing = None;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Delete a task, closing the edit session if it targeted that task.
    pub fn delete(&mut self, store: &mut EntityStore, task: &TaskId) -> Result<Task, StoreError> {
        let project = store
            .owner_of(task)
            .map(|p| p.id.clone())
            .ok_or_else(|| StoreError::UnknownTask(task.clone()))?;
        let removed = store.delete_task(&project, task)?;
        if self.is_editing(task) {
            self.editing = None;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProjectStatus, TaskStatus};

    #[test]
    fn failed_create_keeps_draft() {
        let mut store = EntityStore::sample();
        let mut manager = ProjectManager::new();
        manager.set_new_field(ProjectField::Description("scope".into()));
        manager.set_new_field(ProjectField::Name("   ".into()));

        assert!(manager.create(&mut store).is_err());
        assert_eq!(store.len(), 3);
        assert_eq!(manager.new_project().description, "scope");
    }

    #[test]
    fn successful_create_resets_draft() {
        let mut store = EntityStore::sample();
        let mut manager = ProjectManager::new();
        manager.set_new_field(ProjectField::Name("New".into()));
        manager.set_new_field(ProjectField::Status(ProjectStatus::OnHold));
        let id = manager.create(&mut store).unwrap();

        assert_eq!(store.projects()[0].id, id);
        assert_eq!(store.projects()[0].status, ProjectStatus::OnHold);
        assert_eq!(manager.new_project(), &ProjectForm::default());
    }

    #[test]
    fn set_edit_field_without_session_is_refused() {
        let mut manager = ProjectManager::new();
        assert!(!manager.set_edit_field(ProjectField::Name("x".into())));
        assert!(manager.editing().is_none());
    }

    #[test]
    fn invalid_edit_stays_open() {
        let mut store = EntityStore::sample();
        let mut manager = ProjectManager::new();
        let id = ProjectId::new("project-2");
        manager.start_edit(&store, &id).unwrap();
        manager.set_edit_field(ProjectField::Name("".into()));

        assert!(manager.save_edit(&mut store).is_err());
        assert!(manager.is_editing(&id));
        assert_eq!(store.project(&id).unwrap().name, "AI アシスト強化");
    }

    #[test]
    fn saving_without_session_is_noop() {
        let mut store = EntityStore::sample();
        let mut manager = ProjectManager::new();
        assert_eq!(manager.save_edit(&mut store), Ok(None));
    }

    #[test]
    fn task_scope_limits_view_and_counts() {
        let store = EntityStore::sample();
        let manager = TaskManager::for_project(ProjectId::new("project-3"))
            .with_status_filter(TaskStatus::Overdue.into());

        let visible = manager.visible_tasks(&store);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "task-7");

        let summary = manager.summary(&store);
        assert_eq!(summary.all, 2);
        assert_eq!(summary.completed, 1);
    }

    #[test]
    fn unknown_scope_shows_nothing() {
        let store = EntityStore::sample();
        let manager = TaskManager::for_project(ProjectId::new("missing"));
        assert!(manager.visible_tasks(&store).is_empty());
        assert_eq!(manager.summary(&store).all, 0);
    }

    #[test]
    fn unscoped_create_needs_a_target() {
        let mut store = EntityStore::sample();
        let mut manager = TaskManager::all();
        manager.set_new_field(TaskField::Title("Orphan".into()));
        assert_eq!(
            manager.create(&mut store),
            Err(StoreError::Validation(ValidationError::Blank { field: "project" }))
        );

        manager.set_target_project(Some(ProjectId::new("project-2")));
        let created = manager.create(&mut store).unwrap();
        assert_eq!(created.project.as_str(), "project-2");
        assert_eq!(manager.new_task(), &TaskForm::default());
        assert_eq!(store.all_tasks().len(), 8);
    }

    #[test]
    fn scoped_target_cannot_be_changed() {
        let mut manager = TaskManager::for_project(ProjectId::new("project-1"));
        manager.set_target_project(Some(ProjectId::new("project-2")));
        assert_eq!(manager.target_project().map(ProjectId::as_str), Some("project-1"));
    }

    #[test]
    fn task_edit_flow() {
        let mut store = EntityStore::sample();
        let mut manager = TaskManager::all();
        let task = TaskId::new("task-3");
        manager.start_edit(&store, &task).unwrap();
        manager.set_edit_field(TaskField::Status(TaskStatus::InProgress));
        manager.set_edit_field(TaskField::Tags("開発".into()));

        let saved = manager.save_edit(&mut store).unwrap().unwrap();
        assert_eq!(saved.project.as_str(), "project-1");
        let stored = store.project(&saved.project).unwrap().task(&task).unwrap();
        assert_eq!(stored.status, TaskStatus::InProgress);
        assert_eq!(stored.tags, ["開発"]);
        assert!(manager.editing().is_none());
    }

    #[test]
    fn deleting_edited_task_closes_session() {
        let mut store = EntityStore::sample();
        let mut manager = TaskManager::for_project(ProjectId::new("project-1"));
        let task = TaskId::new("task-2");
        manager.start_edit(&store, &task).unwrap();
        manager.delete(&mut store, &task).unwrap();
        assert!(manager.editing().is_none());
        assert_eq!(manager.summary(&store).all, 2);
    }

    #[test]
    fn edit_of_vanished_task_is_closed_on_save() {
        let mut store = EntityStore::sample();
        let mut manager = TaskManager::all();
        let task = TaskId::new("task-4");
        manager.start_edit(&store, &task).unwrap();
        store.delete_project(&ProjectId::new("project-2")).unwrap();

        assert!(matches!(
            manager.save_edit(&mut store),
            Err(StoreError::ProjectNotFound(_))
        ));
        assert!(manager.editing().is_none());
    }
}
