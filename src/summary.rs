//! Status counters shown in screen headers and on filter tabs.

use crate::filter::StatusFilter;
use crate::model::{Project, ProjectStatus, Task, TaskStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectSummary {
    pub total: usize,
    pub planning: usize,
    pub in_progress: usize,
    pub on_hold: usize,
    pub completed: usize,
}

impl ProjectSummary {
    pub fn count(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::Planning => self.planning,
            ProjectStatus::InProgress => self.in_progress,
            ProjectStatus::OnHold => self.on_hold,
            ProjectStatus::Completed => self.completed,
        }
    }
}

/// Task counters. `all` is the size of the whole list, whatever filter is
/// currently applied to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub all: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl TaskSummary {
    pub fn count(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.all,
            StatusFilter::Only(TaskStatus::NotStarted) => self.not_started,
            StatusFilter::Only(TaskStatus::InProgress) => self.in_progress,
            StatusFilter::Only(TaskStatus::Completed) => self.completed,
            StatusFilter::Only(TaskStatus::Overdue) => self.overdue,
        }
    }
}

pub fn summarize_projects<'a, I>(projects: I) -> ProjectSummary
where
    I: IntoIterator<Item = &'a Project>,
{
    projects
        .into_iter()
        .fold(ProjectSummary::default(), |mut summary, project| {
            summary.total += 1;
            match project.status {
                ProjectStatus::Planning => summary.planning += 1,
                ProjectStatus::InProgress => summary.in_progress += 1,
                ProjectStatus::OnHold => summary.on_hold += 1,
                ProjectStatus::Completed => summary.completed += 1,
            }
            summary
        })
}

pub fn summarize_tasks<'a, I>(tasks: I) -> TaskSummary
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks.into_iter().fold(TaskSummary::default(), |mut summary, task| {
        summary.all += 1;
        match task.status {
            TaskStatus::NotStarted => summary.not_started += 1,
            TaskStatus::InProgress => summary.in_progress += 1,
            TaskStatus::Completed => summary.completed += 1,
            TaskStatus::Overdue => summary.overdue += 1,
        }
        summary
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample;

    #[test]
    fn sample_projects_partition() {
        let summary = summarize_projects(&sample::projects());
        assert_eq!(
            summary,
            ProjectSummary {
                total: 3,
                planning: 1,
                in_progress: 1,
                on_hold: 1,
                completed: 0,
            }
        );
        let sum: usize = ProjectStatus::ALL.iter().map(|s| summary.count(*s)).sum();
        assert_eq!(sum, summary.total);
    }

    #[test]
    fn sample_tasks_partition() {
        let summary = summarize_tasks(&sample::tasks());
        assert_eq!(summary.all, 5);
        assert_eq!(summary.count(TaskStatus::InProgress.into()), 2);
        assert_eq!(summary.count(TaskStatus::Overdue.into()), 1);
        let sum: usize = StatusFilter::TABS[1..].iter().map(|f| summary.count(*f)).sum();
        assert_eq!(sum, summary.all);
    }

    #[test]
    fn empty_collections_count_zero() {
        let no_tasks: Vec<Task> = Vec::new();
        let no_projects: Vec<Project> = Vec::new();
        assert_eq!(summarize_tasks(&no_tasks), TaskSummary::default());
        assert_eq!(summarize_projects(&no_projects), ProjectSummary::default());
    }
}
