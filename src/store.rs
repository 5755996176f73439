//! The in-memory entity store.

use tracing::{debug, warn};

use crate::error::{StoreError, ValidationError};
use crate::form::{split_tags, ProjectForm, TaskForm};
use crate::model::{sample, Project, ProjectId, Task, TaskId};

/// Authoritative collection of projects and the tasks they own.
///
/// Project ids are unique in the store and task ids are unique across all
/// projects. Every operation either applies completely or leaves the store
/// as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityStore {
    projects: Vec<Project>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing projects. Later duplicates of a project
    /// or task id are dropped. Tags are normalized the way the task form
    /// stores them, so a tag never contains a list separator.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let mut store = Self::new();
        for mut project in projects {
            if store.project(&project.id).is_some() {
                warn!(id = %project.id, "dropping duplicate project");
                continue;
            }
            let mut tasks = Vec::with_capacity(project.tasks.len());
            for mut task in std::mem::take(&mut project.tasks) {
                if store.contains_task(&task.id) || tasks.iter().any(|t: &Task| t.id == task.id) {
                    warn!(id = %task.id, project = %project.id, "dropping duplicate task");
                    continue;
                }
                let tags = split_tags(&task.tags.join(","));
                if tags != task.tags {
                    warn!(id = %task.id, before = ?task.tags, after = ?tags, "normalized task tags");
                    task.tags = tags;
                }
                tasks.push(task);
            }
            project.tasks = tasks;
            store.projects.push(project);
        }
        store
    }

    /// A store seeded with the built-in sample projects.
    pub fn sample() -> Self {
        Self::with_projects(sample::projects())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Every task, in project order then task order.
    pub fn all_tasks(&self) -> Vec<&Task> {
        self.projects.iter().flat_map(|p| p.tasks.iter()).collect()
    }

    /// The project owning `task`, if any.
    pub fn owner_of(&self, task: &TaskId) -> Option<&Project> {
        self.projects.iter().find(|p| p.task(task).is_some())
    }

    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.owner_of(id).is_some()
    }

    // ── Projects ────────────────────────────────────────────────

    /// Add a project built from `form` at the front of the collection.
    pub fn create_project(&mut self, form: &ProjectForm) -> Result<&Project, ValidationError> {
        let values = form.validate().inspect_err(|e| {
            warn!(error = %e, "project not created");
        })?;

        let project = Project {
            id: self.fresh_project_id(),
            name: values.name,
            description: values.description,
            status: values.status,
            start_date: values.start_date,
            end_date: values.end_date,
            tasks: Vec::new(),
        };
        debug!(id = %project.id, name = %project.name, "project created");
        self.projects.insert(0, project);
        Ok(&self.projects[0])
    }

    /// Replace the editable fields of a project, keeping its id and tasks.
    pub fn update_project(&mut self, id: &ProjectId, form: &ProjectForm) -> Result<&Project, StoreError> {
        let index = self.project_index(id)?;
        let values = form.validate().inspect_err(|e| {
            warn!(%id, error = %e, "project not updated");
        })?;

        let project = &mut self.projects[index];
        project.name = values.name;
        project.description = values.description;
        project.status = values.status;
        project.start_date = values.start_date;
        project.end_date = values.end_date;
        debug!(%id, "project updated");
        Ok(project)
    }

    /// Remove a project together with all of its tasks.
    pub fn delete_project(&mut self, id: &ProjectId) -> Result<Project, StoreError> {
        let index = self.project_index(id)?;
        let removed = self.projects.remove(index);
        debug!(%id, tasks = removed.tasks.len(), "project deleted");
        Ok(removed)
    }

    // ── Tasks ───────────────────────────────────────────────────

    /// Add a task built from `form` at the front of a project's task list.
    pub fn create_task(&mut self, project_id: &ProjectId, form: &TaskForm) -> Result<&Task, StoreError> {
        let index = self.project_index(project_id)?;
        let values = form.validate().inspect_err(|e| {
            warn!(project = %project_id, error = %e, "task not created");
        })?;

        let mut task = Task::new(values.title);
        task.id = self.fresh_task_id();
        task.status = values.status;
        task.due_date = values.due_date;
        task.tags = values.tags;
        task.priority = values.priority;
        debug!(id = %task.id, project = %project_id, "task created");

        let tasks = &mut self.projects[index].tasks;
        tasks.insert(0, task);
        Ok(&tasks[0])
    }

    /// Replace the editable fields of a task. `updated_at` is refreshed only
    /// when a field actually changes.
    pub fn update_task(
        &mut self,
        project_id: &ProjectId,
        task_id: &TaskId,
        form: &TaskForm,
    ) -> Result<&Task, StoreError> {
        let index = self.project_index(project_id)?;
        if self.projects[index].task(task_id).is_none() {
            return Err(Self::task_not_found(project_id, task_id));
        }
        let values = form.validate().inspect_err(|e| {
            warn!(id = %task_id, error = %e, "task not updated");
        })?;

        let task = self.projects[index]
            .task_mut(task_id)
            .ok_or_else(|| Self::task_not_found(project_id, task_id))?;
        let unchanged = task.title == values.title
            && task.status == values.status
            && task.due_date == values.due_date
            && task.tags == values.tags
            && task.priority == values.priority;
        if unchanged {
            debug!(id = %task_id, "task update had no changes");
            return Ok(task);
        }
        task.title = values.title;
        task.status = values.status;
        task.due_date = values.due_date;
        task.tags = values.tags;
        task.priority = values.priority;
        task.touch();
        debug!(id = %task_id, "task updated");
        Ok(task)
    }

    pub fn delete_task(&mut self, project_id: &ProjectId, task_id: &TaskId) -> Result<Task, StoreError> {
        let index = self.project_index(project_id)?;
        let tasks = &mut self.projects[index].tasks;
        let position = tasks
            .iter()
            .position(|t| &t.id == task_id)
            .ok_or_else(|| Self::task_not_found(project_id, task_id))?;
        debug!(id = %task_id, project = %project_id, "task deleted");
        Ok(tasks.remove(position))
    }

    // ── Helpers ─────────────────────────────────────────────────

    fn project_index(&self, id: &ProjectId) -> Result<usize, StoreError> {
        self.projects
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| {
                warn!(%id, "project not found");
                StoreError::ProjectNotFound(id.clone())
            })
    }

    fn task_not_found(project: &ProjectId, task: &TaskId) -> StoreError {
        warn!(%project, %task, "task not found");
        StoreError::TaskNotFound {
            project: project.clone(),
            task: task.clone(),
        }
    }

    fn fresh_project_id(&self) -> ProjectId {
        loop {
            let id = ProjectId::generate();
            if self.project(&id).is_none() {
                return id;
            }
        }
    }

    fn fresh_task_id(&self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if !self.contains_task(&id) {
                return id;
            }
        }
    }
}
