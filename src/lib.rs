//! Hibi core: an in-memory project and task model with the form drafts,
//! filters and summaries the desktop front-end is built on.
//!
//! The front-end owns one [`EntityStore`] per session and passes it by
//! reference to the screen controllers ([`ProjectManager`], [`TaskManager`]).
//! Derived views are plain functions over the current store contents.

pub mod config;
pub mod daily;
pub mod error;
pub mod filter;
pub mod form;
pub mod manager;
pub mod model;
pub mod store;
pub mod summary;
pub mod view;

pub use config::AppConfig;
pub use error::{ConfigError, Error, FormError, Result, StoreError, ValidationError};
pub use filter::{filter_tasks, StatusFilter};
pub use form::{set_field, Draft, EditSession, ProjectField, ProjectForm, TaskField, TaskForm};
pub use manager::{ProjectManager, TaskManager, TaskRef};
pub use model::{Project, ProjectId, ProjectStatus, Task, TaskId, TaskPriority, TaskStatus};
pub use store::EntityStore;
pub use summary::{summarize_projects, summarize_tasks, ProjectSummary, TaskSummary};
pub use view::{project_task_view, ProjectContext, ProjectTaskView, Route};
