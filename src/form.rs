//! Form drafts for creating and editing projects and tasks.
//!
//! A draft holds raw form values (dates as text, tags as one comma separated
//! string). Fields are replaced one at a time through [`set_field`], which
//! always returns a new draft, and the draft is checked and normalized only
//! when it is committed to the store.

use chrono::NaiveDate;

use crate::error::{FormError, ValidationError};
use crate::model::{Project, ProjectStatus, Task, TaskPriority, TaskStatus, DATE_FORMAT};

/// A record shape whose fields can be replaced one at a time.
pub trait Draft: Clone {
    /// One declared field together with its new value.
    type Field;

    /// A copy of `self` with exactly one field replaced.
    fn with_field(&self, field: Self::Field) -> Self;
}

/// Returns `draft` with one field replaced. The input is left untouched.
pub fn set_field<D: Draft>(draft: &D, field: D::Field) -> D {
    draft.with_field(field)
}

/// Parse a form date. Blank input means "no date".
pub(crate) fn parse_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

// ── Projects ────────────────────────────────────────────────────────────────

/// Draft for the project create and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectField {
    Name(String),
    Description(String),
    Status(ProjectStatus),
    StartDate(String),
    EndDate(String),
}

impl ProjectField {
    /// Build a field from its form name (`name`, `description`, `status`,
    /// `startDate`, `endDate`) and a raw value.
    pub fn parse(name: &str, value: &str) -> Result<Self, FormError> {
        match name {
            "name" => Ok(Self::Name(value.to_string())),
            "description" => Ok(Self::Description(value.to_string())),
            "status" => Ok(Self::Status(value.parse()?)),
            "startDate" | "start_date" => Ok(Self::StartDate(value.to_string())),
            "endDate" | "end_date" => Ok(Self::EndDate(value.to_string())),
            _ => Err(FormError::UnknownField {
                form: "project",
                name: name.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Description(_) => "description",
            Self::Status(_) => "status",
            Self::StartDate(_) => "startDate",
            Self::EndDate(_) => "endDate",
        }
    }
}

impl Draft for ProjectForm {
    type Field = ProjectField;

    fn with_field(&self, field: ProjectField) -> Self {
        let mut next = self.clone();
        match field {
            ProjectField::Name(v) => next.name = v,
            ProjectField::Description(v) => next.description = v,
            ProjectField::Status(v) => next.status = v,
            ProjectField::StartDate(v) => next.start_date = v,
            ProjectField::EndDate(v) => next.end_date = v,
        }
        next
    }
}

/// Checked, normalized values of a [`ProjectForm`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProjectValues {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ProjectForm {
    /// Seed an edit draft from a project. A missing end date becomes "".
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status,
            start_date: format_date(project.start_date),
            end_date: format_date(project.end_date),
        }
    }

    pub(crate) fn validate(&self) -> Result<ProjectValues, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Blank { field: "name" });
        }
        let start_date = parse_date("startDate", &self.start_date)?;
        let end_date = parse_date("endDate", &self.end_date)?;
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(ValidationError::EndBeforeStart { start, end });
            }
        }
        Ok(ProjectValues {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            status: self.status,
            start_date,
            end_date,
        })
    }
}

// ── Tasks ───────────────────────────────────────────────────────────────────

/// Draft for the task create and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub status: TaskStatus,
    pub due_date: String,
    /// Comma separated, e.g. `開発, 統合`.
    pub tags: String,
    pub priority: Option<TaskPriority>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskField {
    Title(String),
    Status(TaskStatus),
    DueDate(String),
    Tags(String),
    Priority(Option<TaskPriority>),
}

impl TaskField {
    /// Build a field from its form name (`title`, `status`, `dueDate`,
    /// `tags`, `priority`) and a raw value. An empty priority clears it.
    pub fn parse(name: &str, value: &str) -> Result<Self, FormError> {
        match name {
            "title" => Ok(Self::Title(value.to_string())),
            "status" => Ok(Self::Status(value.parse()?)),
            "dueDate" | "due_date" => Ok(Self::DueDate(value.to_string())),
            "tags" => Ok(Self::Tags(value.to_string())),
            "priority" if value.is_empty() => Ok(Self::Priority(None)),
            "priority" => Ok(Self::Priority(Some(value.parse()?))),
            _ => Err(FormError::UnknownField {
                form: "task",
                name: name.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Status(_) => "status",
            Self::DueDate(_) => "dueDate",
            Self::Tags(_) => "tags",
            Self::Priority(_) => "priority",
        }
    }
}

impl Draft for TaskForm {
    type Field = TaskField;

    fn with_field(&self, field: TaskField) -> Self {
        let mut next = self.clone();
        match field {
            TaskField::Title(v) => next.title = v,
            TaskField::Status(v) => next.status = v,
            TaskField::DueDate(v) => next.due_date = v,
            TaskField::Tags(v) => next.tags = v,
            TaskField::Priority(v) => next.priority = v,
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TaskValues {
    pub title: String,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub priority: Option<TaskPriority>,
}

/// Split a tag list on ASCII or ideographic commas, dropping blanks and repeats.
pub(crate) fn split_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split([',', '、']).map(str::trim) {
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            status: task.status,
            due_date: format_date(task.due_date),
            tags: task.tags.join(", "),
            priority: task.priority,
        }
    }

    pub(crate) fn validate(&self) -> Result<TaskValues, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::Blank { field: "title" });
        }
        Ok(TaskValues {
            title: title.to_string(),
            status: self.status,
            due_date: parse_date("dueDate", &self.due_date)?,
            tags: split_tags(&self.tags),
            priority: self.priority,
        })
    }
}

// ── Edit sessions ───────────────────────────────────────────────────────────

/// An open edit of one entity: which entity, and the draft being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession<Id, D> {
    target: Id,
    draft: D,
}

impl<Id, D: Draft> EditSession<Id, D> {
    pub fn new(target: Id, draft: D) -> Self {
        Self { target, draft }
    }

    pub fn target(&self) -> &Id {
        &self.target
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn set_field(&mut self, field: D::Field) {
        self.draft = set_field(&self.draft, field);
    }
}
