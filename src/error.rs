//! Error types for Hibi

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{ProjectId, TaskId};

/// A draft that cannot be committed as it stands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("invalid {field} '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    #[error("Task {task} not found in project {project}")]
    TaskNotFound { project: ProjectId, task: TaskId },

    #[error("Task not found: {0}")]
    UnknownTask(TaskId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Setting a draft field by name failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown {form} field '{name}'")]
    UnknownField { form: &'static str, name: String },

    #[error("invalid {kind} '{value}'")]
    InvalidValue { kind: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no config directory available on this platform")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
