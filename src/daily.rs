//! Content of the daily summary screen.
//!
//! The summary text and figures are fixed; nothing here is generated.

use chrono::{Datelike, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    WorkTime,
    CompletedTasks,
    EditedFiles,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub kind: StatKind,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Calendar,
    Github,
    File,
    Todo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub time: String,
    pub title: String,
    pub description: String,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditedFile {
    pub name: String,
    pub file_type: String,
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub headline: String,
    pub stats: Vec<Stat>,
    pub activities: Vec<Activity>,
    pub files: Vec<EditedFile>,
}

impl DailySummary {
    pub fn sample() -> Self {
        let stat = |kind, value: &str, label: &str| Stat {
            kind,
            value: value.into(),
            label: label.into(),
        };
        let activity = |time: &str, title: &str, description: &str, kind| Activity {
            time: time.into(),
            title: title.into(),
            description: description.into(),
            kind,
        };
        let file = |name: &str, file_type: &str, when: &str| EditedFile {
            name: name.into(),
            file_type: file_type.into(),
            when: when.into(),
        };

        Self {
            headline: "本日は3つのプロジェクトに取り組みました。午前中はクライアントプロジェクトのUI設計を完了し、\
                       Figmaで5つの画面デザインを作成しました。午後はコードレビューを2件実施し、新機能の実装を進めました。\
                       また、技術ドキュメントを3ページ更新し、チームとの定例ミーティングで進捗を共有しました。"
                .into(),
            stats: vec![
                stat(StatKind::WorkTime, "6.5h", "作業時間"),
                stat(StatKind::CompletedTasks, "8/12", "完了タスク"),
                stat(StatKind::EditedFiles, "15", "編集ファイル"),
            ],
            activities: vec![
                activity("14:30", "プロジェクト会議", "チームとの週次進捗確認", ActivityKind::Calendar),
                activity("11:45", "コードレビュー完了", "PR #234 をマージ", ActivityKind::Github),
                activity("09:15", "デザイン更新", "ダッシュボードUIの改善案を作成", ActivityKind::File),
                activity("08:30", "タスク完了", "認証フローの実装", ActivityKind::Todo),
            ],
            files: vec![
                file("dashboard-redesign.fig", "Figma", "2時間前"),
                file("auth-flow.tsx", "TypeScript", "4時間前"),
                file("api-documentation.md", "Markdown", "5時間前"),
                file("user-research.pdf", "PDF", "6時間前"),
            ],
        }
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "月曜日",
        Weekday::Tue => "火曜日",
        Weekday::Wed => "水曜日",
        Weekday::Thu => "木曜日",
        Weekday::Fri => "金曜日",
        Weekday::Sat => "土曜日",
        Weekday::Sun => "日曜日",
    }
}

/// `2025年1月15日 水曜日`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}年{}月{}日 {}",
        date.year(),
        date.month(),
        date.day(),
        weekday_name(date.weekday())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_uses_japanese_weekday() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(format_long_date(date), "2025年1月15日 水曜日");
    }

    #[test]
    fn sample_has_three_stats() {
        let summary = DailySummary::sample();
        assert_eq!(summary.stats.len(), 3);
        assert_eq!(summary.activities[0].kind, ActivityKind::Calendar);
        assert!(summary.headline.starts_with("本日は3つのプロジェクト"));
    }
}
