//! Screens, and the project header shown above a project's task list.

use chrono::NaiveDate;

use crate::model::{self, Project, ProjectId, ProjectStatus, Task};
use crate::store::EntityStore;

pub const UNREGISTERED_PROJECT_NAME: &str = "未登録プロジェクト";
pub const UNREGISTERED_PROJECT_DESCRIPTION: &str =
    "モックデータが未定義のため空のタスク一覧を表示しています。";

/// A screen of the signed-in application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    Summary,
    #[default]
    Projects,
    Tasks,
    ProjectTasks(ProjectId),
}

impl Route {
    /// Entries of the navigation sidebar.
    pub const NAV: [Route; 3] = [Route::Summary, Route::Projects, Route::Tasks];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Summary => "サマリー",
            Route::Projects => "プロジェクト",
            Route::Tasks | Route::ProjectTasks(_) => "タスク管理",
        }
    }

    /// Whether this sidebar entry should be highlighted while `current` is shown.
    pub fn is_active(&self, current: &Route) -> bool {
        match (self, current) {
            (Route::Projects, Route::ProjectTasks(_)) => true,
            _ => self == current,
        }
    }
}

/// Header information for a task list scoped to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ProjectContext {
    /// Stand-in for a project id that is not in the store.
    pub fn unregistered() -> Self {
        Self {
            name: UNREGISTERED_PROJECT_NAME.to_string(),
            description: UNREGISTERED_PROJECT_DESCRIPTION.to_string(),
            status: ProjectStatus::Planning,
            start_date: None,
            end_date: None,
        }
    }

    /// `MVP 基盤構築のタスク`
    pub fn title(&self) -> String {
        format!("{}のタスク", self.name)
    }

    pub fn period_label(&self) -> Option<String> {
        model::period_label(self.start_date, self.end_date)
    }
}

impl From<&Project> for ProjectContext {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status,
            start_date: project.start_date,
            end_date: project.end_date,
        }
    }
}

/// What the task screen shows for a routed project id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTaskView<'a> {
    pub context: ProjectContext,
    pub tasks: &'a [Task],
    /// `false` when the id is unknown and the placeholder is shown.
    pub registered: bool,
}

/// Resolve a routed project id. An unknown id yields the unregistered
/// placeholder with no tasks rather than an error.
pub fn project_task_view<'a>(store: &'a EntityStore, id: &ProjectId) -> ProjectTaskView<'a> {
    match store.project(id) {
        Some(project) => ProjectTaskView {
            context: ProjectContext::from(project),
            tasks: &project.tasks,
            registered: true,
        },
        None => ProjectTaskView {
            context: ProjectContext::unregistered(),
            tasks: &[],
            registered: false,
        },
    }
}
