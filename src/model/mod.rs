/// Calendar date format used by forms and the UI (`2025-01-15`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `2024-12-01 〜 2025-02-28`, or just the start date when open-ended.
pub fn period_label(start: Option<chrono::NaiveDate>, end: Option<chrono::NaiveDate>) -> Option<String> {
    let start = start?.format(DATE_FORMAT).to_string();
    Some(match end {
        Some(end) => format!("{} 〜 {}", start, end.format(DATE_FORMAT)),
        None => start,
    })
}

/// Declares an opaque string identifier newtype.
///
/// Fresh identifiers are UUID v4 strings; existing ids (sample data, routes)
/// are taken verbatim.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// A new random identifier.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

pub(crate) use string_id;

pub mod project;
pub mod sample;
pub mod task;

pub use project::{Project, ProjectId, ProjectStatus};
pub use task::{Task, TaskId, TaskPriority, TaskStatus};
