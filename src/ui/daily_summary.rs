use egui::{RichText, Ui};
use hibi::daily::{format_long_date, ActivityKind, DailySummary, StatKind};

use crate::ui::{theme, widgets};

fn stat_icon(kind: StatKind) -> &'static str {
    match kind {
        StatKind::WorkTime => egui_phosphor::regular::CLOCK,
        StatKind::CompletedTasks => egui_phosphor::regular::CHECK_SQUARE,
        StatKind::EditedFiles => egui_phosphor::regular::FILE_TEXT,
    }
}

fn activity_icon(kind: ActivityKind) -> (&'static str, egui::Color32) {
    match kind {
        ActivityKind::Calendar => (egui_phosphor::regular::CALENDAR_BLANK, theme::CHART_1),
        ActivityKind::Github => (egui_phosphor::regular::GITHUB_LOGO, theme::CHART_3),
        ActivityKind::File => (egui_phosphor::regular::FILE_TEXT, theme::CHART_2),
        ActivityKind::Todo => (egui_phosphor::regular::CHECK_SQUARE, theme::CHART_5),
    }
}

/// Render the daily summary screen.
pub fn show_daily_summary(summary: &DailySummary, ui: &mut Ui) {
    let today = chrono::Local::now().date_naive();
    ui.label(RichText::new("今日のサマリー").font(theme::font_title()).strong());
    widgets::subtle(ui, format_long_date(today));
    ui.add_space(12.0);

    widgets::card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(egui_phosphor::regular::SPARKLE).color(theme::CHART_1));
            ui.label(RichText::new("AI による作業サマリー").strong());
        });
        ui.add_space(4.0);
        ui.label(&summary.headline);
    });
    ui.add_space(10.0);

    ui.columns(summary.stats.len().max(1), |columns| {
        for (column, stat) in columns.iter_mut().zip(&summary.stats) {
            widgets::card().show(column, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(stat_icon(stat.kind)).size(18.0).color(theme::TEXT_MUTED));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&stat.value).size(20.0).strong());
                        widgets::subtle(ui, &stat.label);
                    });
                });
            });
        }
    });
    ui.add_space(10.0);

    ui.columns(2, |columns| {
        widgets::card().show(&mut columns[0], |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("アクティビティ").strong());
            ui.add_space(6.0);
            for activity in &summary.activities {
                let (icon, color) = activity_icon(activity.kind);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).size(16.0).color(color));
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&activity.title).strong());
                            widgets::subtle(ui, &activity.time);
                        });
                        widgets::subtle(ui, &activity.description);
                    });
                });
                ui.add_space(4.0);
            }
        });

        widgets::card().show(&mut columns[1], |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("編集したファイル").strong());
            ui.add_space(6.0);
            for file in &summary.files {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(egui_phosphor::regular::FILE).color(theme::TEXT_MUTED));
                    ui.label(&file.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        widgets::subtle(ui, &file.when);
                        widgets::badge(ui, &file.file_type, theme::CHART_3);
                    });
                });
            }
        });
    });
}
