//! Built-in sample data used to seed a session.

use chrono::{DateTime, NaiveDate, Utc};

use super::{Project, ProjectId, ProjectStatus, Task, TaskId, TaskPriority, TaskStatus, DATE_FORMAT};

fn date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

fn timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    title: &str,
    status: TaskStatus,
    due: &str,
    tags: &[&str],
    priority: TaskPriority,
    created: &str,
    updated: &str,
) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_string(),
        status,
        due_date: date(due),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        priority: Some(priority),
        created_at: timestamp(created),
        updated_at: timestamp(updated),
    }
}

/// Three projects: one in progress, one planning, one on hold.
pub fn projects() -> Vec<Project> {
    use TaskPriority::*;
    use TaskStatus::*;

    vec![
        Project {
            id: ProjectId::new("project-1"),
            name: "MVP 基盤構築".into(),
            description: "カレンダー・TODO・ストレージ連携を含む MVP の土台構築を進める。".into(),
            status: ProjectStatus::InProgress,
            start_date: date("2024-12-01"),
            end_date: date("2025-02-28"),
            tasks: vec![
                task(
                    "task-1",
                    "プロダクトビジョンドキュメントの作成",
                    Completed,
                    "2025-01-05",
                    &["ドキュメント", "計画"],
                    High,
                    "2025-01-01T09:00:00Z",
                    "2025-01-05T14:30:00Z",
                ),
                task(
                    "task-2",
                    "データベーススキーマ設計",
                    InProgress,
                    "2025-01-12",
                    &["開発", "データベース"],
                    High,
                    "2025-01-06T10:00:00Z",
                    "2025-01-08T16:20:00Z",
                ),
                task(
                    "task-3",
                    "Google Calendar API統合",
                    NotStarted,
                    "2025-01-15",
                    &["開発", "統合"],
                    Medium,
                    "2025-01-07T11:00:00Z",
                    "2025-01-07T11:00:00Z",
                ),
            ],
        },
        Project {
            id: ProjectId::new("project-2"),
            name: "AI アシスト強化".into(),
            description: "TODO 候補提案と日次要約の精度改善に向けたアシスト機能を試作する。".into(),
            status: ProjectStatus::Planning,
            start_date: date("2025-02-01"),
            end_date: date("2025-03-31"),
            tasks: vec![
                task(
                    "task-4",
                    "LLM プロンプトの最適化",
                    InProgress,
                    "2025-02-15",
                    &["AI", "開発"],
                    Medium,
                    "2025-01-20T15:00:00Z",
                    "2025-01-28T10:15:00Z",
                ),
                task(
                    "task-5",
                    "要約評価の指標設計",
                    NotStarted,
                    "2025-02-20",
                    &["分析", "AI"],
                    Medium,
                    "2025-01-27T13:00:00Z",
                    "2025-01-27T13:00:00Z",
                ),
            ],
        },
        Project {
            id: ProjectId::new("project-3"),
            name: "ユーザーリサーチ".into(),
            description: "Early adopter へのヒアリングと操作ログ分析を通じて UX 課題を特定する。".into(),
            status: ProjectStatus::OnHold,
            start_date: date("2024-12-15"),
            end_date: None,
            tasks: vec![
                task(
                    "task-6",
                    "ヒアリングスクリプト作成",
                    Completed,
                    "2024-12-22",
                    &["UX", "ドキュメント"],
                    Low,
                    "2024-12-18T09:00:00Z",
                    "2024-12-22T10:00:00Z",
                ),
                task(
                    "task-7",
                    "初回インタビュー実施",
                    Overdue,
                    "2025-01-10",
                    &["リサーチ"],
                    High,
                    "2024-12-28T09:30:00Z",
                    "2025-01-11T18:00:00Z",
                ),
            ],
        },
    ]
}

/// The standalone five-task list shown when no project is selected.
pub fn tasks() -> Vec<Task> {
    use TaskPriority::*;
    use TaskStatus::*;

    vec![
        task(
            "1",
            "プロダクトビジョンドキュメントの作成",
            Completed,
            "2025-01-05",
            &["ドキュメント", "計画"],
            High,
            "2025-01-01T09:00:00Z",
            "2025-01-05T14:30:00Z",
        ),
        task(
            "2",
            "データベーススキーマ設計",
            InProgress,
            "2025-01-12",
            &["開発", "データベース"],
            High,
            "2025-01-06T10:00:00Z",
            "2025-01-08T16:20:00Z",
        ),
        task(
            "3",
            "Google Calendar API統合",
            NotStarted,
            "2025-01-15",
            &["開発", "統合"],
            Medium,
            "2025-01-07T11:00:00Z",
            "2025-01-07T11:00:00Z",
        ),
        task(
            "4",
            "UIデザインレビュー",
            Overdue,
            "2025-01-06",
            &["デザイン", "レビュー"],
            High,
            "2025-01-03T13:00:00Z",
            "2025-01-06T09:00:00Z",
        ),
        task(
            "5",
            "LLMプロンプトの最適化",
            InProgress,
            "2025-01-10",
            &["AI", "開発"],
            Medium,
            "2025-01-05T15:00:00Z",
            "2025-01-08T10:15:00Z",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_timestamps_parse() {
        for task in projects().iter().flat_map(|p| &p.tasks).chain(&tasks()) {
            assert!(task.created_at.timestamp() > 0, "{}", task.id);
            assert!(task.updated_at >= task.created_at, "{}", task.id);
            assert!(task.due_date.is_some());
        }
    }

    #[test]
    fn third_project_is_open_ended() {
        let projects = projects();
        assert_eq!(projects.len(), 3);
        assert!(projects[2].end_date.is_none());
    }
}
