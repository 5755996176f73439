use egui::{RichText, Ui};
use hibi::{EntityStore, Project, ProjectField, ProjectForm, ProjectId, ProjectManager, ProjectStatus};

use crate::ui::{theme, widgets};

/// Actions the project screen asks the app to perform on the store.
pub enum ProjectAction {
    None,
    Create,
    StartEdit(ProjectId),
    SaveEdit,
    CancelEdit,
    Delete(ProjectId),
    Open(ProjectId),
}

/// Render the project list with its create form and inline edit form.
///
/// Field edits go straight to the manager's drafts; anything touching the
/// store is returned as an action.
pub fn show_project_manager(store: &EntityStore, manager: &mut ProjectManager, ui: &mut Ui) -> ProjectAction {
    let mut action = ProjectAction::None;

    show_header(store, manager, ui);
    ui.add_space(12.0);

    widgets::dashed_card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        let draft = manager.new_project().clone();
        for field in project_fields(ui, "new_project", &draft) {
            manager.set_new_field(field);
        }
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if widgets::primary_button(ui, &format!("{} プロジェクト追加", egui_phosphor::regular::PLUS)) {
                action = ProjectAction::Create;
            }
        });
    });
    ui.add_space(12.0);

    if store.is_empty() {
        widgets::dashed_card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                widgets::subtle(ui, "プロジェクトがまだありません。上部のフォームから追加を開始してください。");
            });
        });
        return action;
    }

    for project in store.projects() {
        let row_action = if manager.is_editing(&project.id) {
            show_edit_card(manager, ui)
        } else {
            show_project_card(project, ui)
        };
        if !matches!(row_action, ProjectAction::None) {
            action = row_action;
        }
        ui.add_space(6.0);
    }

    action
}

fn show_header(store: &EntityStore, manager: &ProjectManager, ui: &mut Ui) {
    let summary = manager.summary(store);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new("プロジェクト").font(theme::font_title()).strong());
            widgets::subtle(ui, "プロジェクト単位でタスク進捗を整理・管理します");
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for status in ProjectStatus::ALL.iter().rev() {
                widgets::subtle(ui, format!("{}: {}", status.label(), summary.count(*status)));
            }
            widgets::subtle(ui, format!("総数: {}", summary.total));
        });
    });
}

/// Inputs for every project field. Returns the fields the user changed.
fn project_fields(ui: &mut Ui, id: &str, draft: &ProjectForm) -> Vec<ProjectField> {
    let mut changes = Vec::new();

    egui::Grid::new(format!("{id}_grid"))
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            widgets::field_label(ui, "プロジェクト名");
            if let Some(name) = widgets::text_field(ui, &draft.name, "例: MVP 基盤構築", 320.0) {
                changes.push(ProjectField::Name(name));
            }
            ui.end_row();

            widgets::field_label(ui, "概要");
            if let Some(text) = widgets::multiline_field(ui, &draft.description, "目的やスコープを入力") {
                changes.push(ProjectField::Description(text));
            }
            ui.end_row();

            widgets::field_label(ui, "ステータス");
            if let Some(status) = widgets::choice(
                ui,
                &format!("{id}_status"),
                draft.status,
                &ProjectStatus::ALL,
                ProjectStatus::label,
            ) {
                changes.push(ProjectField::Status(status));
            }
            ui.end_row();

            widgets::field_label(ui, "開始日");
            if let Some(date) = widgets::date_field(ui, &format!("{id}_start"), &draft.start_date) {
                changes.push(ProjectField::StartDate(date));
            }
            ui.end_row();

            widgets::field_label(ui, "終了予定日");
            if let Some(date) = widgets::date_field(ui, &format!("{id}_end"), &draft.end_date) {
                changes.push(ProjectField::EndDate(date));
            }
            ui.end_row();
        });

    changes
}

fn show_edit_card(manager: &mut ProjectManager, ui: &mut Ui) -> ProjectAction {
    let mut action = ProjectAction::None;
    let Some(session) = manager.editing() else {
        return action;
    };
    let draft = session.draft().clone();
    let id = format!("edit_{}", session.target());

    widgets::card()
        .stroke(egui::Stroke::new(1.0, theme::BORDER_FOCUS))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            for field in project_fields(ui, &id, &draft) {
                manager.set_edit_field(field);
            }
            ui.add_space(4.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if widgets::primary_button(ui, "更新する") {
                    action = ProjectAction::SaveEdit;
                }
                if ui.button("キャンセル").clicked() {
                    action = ProjectAction::CancelEdit;
                }
            });
        });

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = ProjectAction::CancelEdit;
    }
    action
}

/// `タスク 2/3`, or `タスク未登録` for a project without tasks.
fn task_progress_label(done: usize, total: usize) -> String {
    if total == 0 {
        "タスク未登録".to_string()
    } else {
        format!("タスク {done}/{total}")
    }
}

fn show_project_card(project: &Project, ui: &mut Ui) -> ProjectAction {
    let mut action = ProjectAction::None;

    let response = widgets::card()
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&project.name).font(theme::font_body()).strong());
                widgets::badge(
                    ui,
                    project.status.label(),
                    theme::project_status_color(project.status),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if widgets::icon_button(ui, egui_phosphor::regular::TRASH, "削除") {
                        action = ProjectAction::Delete(project.id.clone());
                    }
                    if widgets::icon_button(ui, egui_phosphor::regular::PENCIL_SIMPLE, "編集") {
                        action = ProjectAction::StartEdit(project.id.clone());
                    }
                    if widgets::icon_button(ui, egui_phosphor::regular::LIST_CHECKS, "タスクを開く") {
                        action = ProjectAction::Open(project.id.clone());
                    }
                });
            });
            if !project.description.is_empty() {
                ui.label(RichText::new(&project.description).color(theme::TEXT_MUTED));
            }
            ui.horizontal(|ui| {
                if let Some(period) = project.period_label() {
                    widgets::subtle(ui, format!("{} {}", egui_phosphor::regular::CALENDAR_BLANK, period));
                }
                let done = project
                    .tasks
                    .iter()
                    .filter(|t| t.status == hibi::TaskStatus::Completed)
                    .count();
                widgets::subtle(ui, task_progress_label(done, project.tasks.len()));
            });
        })
        .response;

    // Clicking the card body opens its tasks.
    if matches!(action, ProjectAction::None) && response.interact(egui::Sense::click()).clicked() {
        action = ProjectAction::Open(project.id.clone());
    }
    action
}
