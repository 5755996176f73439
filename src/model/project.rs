use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::task::{Task, TaskId};
use super::string_id;
use crate::error::FormError;

string_id! {
    /// Identifier of a [`Project`]. Unique within an [`EntityStore`](crate::EntityStore).
    ProjectId
}

/// Lifecycle stage of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "計画中",
            ProjectStatus::InProgress => "進行中",
            ProjectStatus::OnHold => "保留中",
            ProjectStatus::Completed => "完了",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| FormError::InvalidValue {
                kind: "project status",
                value: s.to_string(),
            })
    }
}

/// A project and the tasks it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Owned tasks, most recently created first.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// A planning-stage project with a fresh id and no tasks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ProjectId::generate(),
            name: name.into(),
            description: String::new(),
            status: ProjectStatus::default(),
            start_date: None,
            end_date: None,
            tasks: Vec::new(),
        }
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub(crate) fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    pub fn period_label(&self) -> Option<String> {
        super::period_label(self.start_date, self.end_date)
    }
}
