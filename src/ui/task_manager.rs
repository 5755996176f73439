use egui::{RichText, Ui};
use hibi::model::DATE_FORMAT;
use hibi::{
    project_task_view, EntityStore, ProjectId, StatusFilter, Task, TaskField, TaskForm, TaskId,
    TaskManager, TaskPriority, TaskStatus,
};

use crate::ui::{theme, widgets};

/// Actions the task screen asks the app to perform on the store.
pub enum TaskAction {
    None,
    Back,
    Create,
    StartEdit(TaskId),
    SaveEdit,
    CancelEdit,
    Delete(TaskId),
}

const PRIORITIES: [Option<TaskPriority>; 4] = [
    None,
    Some(TaskPriority::Low),
    Some(TaskPriority::Medium),
    Some(TaskPriority::High),
];

fn priority_label(priority: Option<TaskPriority>) -> &'static str {
    priority.map_or("なし", TaskPriority::label)
}

/// Render the task list for the manager's scope: header, search, status
/// tabs, the new-task form and the task rows.
pub fn show_task_manager(store: &EntityStore, manager: &mut TaskManager, ui: &mut Ui) -> TaskAction {
    let mut action = TaskAction::None;

    if let Some(id) = manager.scope().cloned() {
        if show_project_header(store, &id, ui) {
            action = TaskAction::Back;
        }
    } else {
        ui.label(RichText::new("タスク管理").font(theme::font_title()).strong());
        widgets::subtle(ui, "すべてのプロジェクトのタスクを一覧・検索します");
    }
    ui.add_space(10.0);

    // ── Search and tabs ─────────────────────────────────────────
    ui.horizontal(|ui| {
        ui.label(egui_phosphor::regular::MAGNIFYING_GLASS);
        if let Some(query) = widgets::text_field(ui, manager.query(), "タスクを検索...", 280.0) {
            manager.set_query(query);
        }
    });
    ui.add_space(6.0);

    let summary = manager.summary(store);
    ui.horizontal(|ui| {
        for tab in StatusFilter::TABS {
            let text = format!("{} ({})", tab.label(), summary.count(tab));
            if ui
                .selectable_label(manager.status_filter() == tab, text)
                .clicked()
            {
                manager.set_status_filter(tab);
            }
        }
    });
    ui.add_space(10.0);

    // ── New task ────────────────────────────────────────────────
    widgets::dashed_card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        if manager.scope().is_none() {
            ui.horizontal(|ui| {
                widgets::field_label(ui, "追加先プロジェクト");
                if let Some(target) = project_picker(store, manager.target_project(), ui) {
                    manager.set_target_project(Some(target));
                }
            });
        }
        let draft = manager.new_task().clone();
        for field in task_fields(ui, "new_task", &draft) {
            manager.set_new_field(field);
        }
        ui.add_space(4.0);
        if widgets::primary_button(ui, &format!("{} タスク追加", egui_phosphor::regular::PLUS)) {
            action = TaskAction::Create;
        }
    });
    ui.add_space(10.0);

    // ── Rows ────────────────────────────────────────────────────
    let tasks = manager.visible_tasks(store);
    if tasks.is_empty() {
        widgets::dashed_card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("タスクが見つかりません").strong());
                widgets::subtle(ui, "検索条件を変えるか、新しいタスクを追加してください");
            });
        });
        return action;
    }

    for task in tasks {
        let row_action = if manager.is_editing(&task.id) {
            show_edit_row(manager, ui)
        } else {
            show_task_row(task, ui)
        };
        if !matches!(row_action, TaskAction::None) {
            action = row_action;
        }
        ui.add_space(4.0);
    }

    action
}

const DEFAULT_PROJECT_SUBTITLE: &str = "Notion風の柔軟なプロパティでタスクを管理";

fn header_subtitle(description: &str) -> &str {
    if description.trim().is_empty() {
        DEFAULT_PROJECT_SUBTITLE
    } else {
        description
    }
}

/// Returns true when the back button was clicked.
fn show_project_header(store: &EntityStore, id: &ProjectId, ui: &mut Ui) -> bool {
    let view = project_task_view(store, id);
    let mut back = false;

    if ui
        .button(format!("{} プロジェクト一覧へ戻る", egui_phosphor::regular::ARROW_LEFT))
        .clicked()
    {
        back = true;
    }
    ui.add_space(6.0);

    widgets::card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(view.context.title()).font(theme::font_title()).strong());
            widgets::badge(
                ui,
                view.context.status.label(),
                theme::project_status_color(view.context.status),
            );
        });
        ui.label(RichText::new(header_subtitle(&view.context.description)).color(theme::TEXT_MUTED));
        if let Some(period) = view.context.period_label() {
            widgets::subtle(ui, format!("{} {}", egui_phosphor::regular::CALENDAR_BLANK, period));
        }
        if view.registered {
            widgets::subtle(ui, format!("タスク数: {}", view.tasks.len()));
        }
    });
    back
}

fn project_picker(store: &EntityStore, current: Option<&ProjectId>, ui: &mut Ui) -> Option<ProjectId> {
    let selected_name = current
        .and_then(|id| store.project(id))
        .map_or("プロジェクトを選択", |p| p.name.as_str());
    let mut picked = None;
    egui::ComboBox::from_id_salt("task_target_project")
        .selected_text(selected_name)
        .width(220.0)
        .show_ui(ui, |ui| {
            for project in store.projects() {
                let is_current = current == Some(&project.id);
                if ui.selectable_label(is_current, &project.name).clicked() && !is_current {
                    picked = Some(project.id.clone());
                }
            }
        });
    picked
}

/// Inputs for every task field. Returns the fields the user changed.
fn task_fields(ui: &mut Ui, id: &str, draft: &TaskForm) -> Vec<TaskField> {
    let mut changes = Vec::new();

    egui::Grid::new(format!("{id}_grid"))
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            widgets::field_label(ui, "タイトル");
            if let Some(title) = widgets::text_field(ui, &draft.title, "例: API エンドポイント実装", 320.0) {
                changes.push(TaskField::Title(title));
            }
            ui.end_row();

            widgets::field_label(ui, "ステータス");
            ui.horizontal(|ui| {
                if let Some(status) = widgets::choice(
                    ui,
                    &format!("{id}_status"),
                    draft.status,
                    &TaskStatus::ALL,
                    TaskStatus::label,
                ) {
                    changes.push(TaskField::Status(status));
                }
                widgets::field_label(ui, "優先度");
                if let Some(priority) = widgets::choice(
                    ui,
                    &format!("{id}_priority"),
                    draft.priority,
                    &PRIORITIES,
                    priority_label,
                ) {
                    changes.push(TaskField::Priority(priority));
                }
            });
            ui.end_row();

            widgets::field_label(ui, "期限");
            if let Some(date) = widgets::date_field(ui, &format!("{id}_due"), &draft.due_date) {
                changes.push(TaskField::DueDate(date));
            }
            ui.end_row();

            widgets::field_label(ui, "タグ");
            if let Some(tags) = widgets::text_field(ui, &draft.tags, "カンマ区切り (例: 開発, 統合)", 320.0) {
                changes.push(TaskField::Tags(tags));
            }
            ui.end_row();
        });

    changes
}

fn show_edit_row(manager: &mut TaskManager, ui: &mut Ui) -> TaskAction {
    let mut action = TaskAction::None;
    let Some(session) = manager.editing() else {
        return action;
    };
    let draft = session.draft().clone();
    let id = format!("edit_{}", session.target().task);

    widgets::card()
        .stroke(egui::Stroke::new(1.0, theme::BORDER_FOCUS))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            for field in task_fields(ui, &id, &draft) {
                manager.set_edit_field(field);
            }
            ui.add_space(4.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if widgets::primary_button(ui, "更新する") {
                    action = TaskAction::SaveEdit;
                }
                if ui.button("キャンセル").clicked() {
                    action = TaskAction::CancelEdit;
                }
            });
        });

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = TaskAction::CancelEdit;
    }
    action
}

fn show_task_row(task: &Task, ui: &mut Ui) -> TaskAction {
    let mut action = TaskAction::None;
    let color = theme::task_status_color(task.status);

    widgets::card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(theme::task_status_icon(task.status)).size(16.0).color(color));
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    let mut title = RichText::new(&task.title).font(theme::font_body()).strong();
                    if task.status == TaskStatus::Completed {
                        title = title.strikethrough().color(theme::TEXT_MUTED);
                    }
                    ui.label(title);
                    widgets::badge(ui, task.status.label(), color);
                });
                ui.horizontal_wrapped(|ui| {
                    if let Some(due) = task.due_date {
                        widgets::subtle(
                            ui,
                            format!("{} {}", egui_phosphor::regular::CALENDAR_BLANK, due.format(DATE_FORMAT)),
                        );
                    }
                    if let Some(priority) = task.priority {
                        ui.label(
                            RichText::new(format!("優先度: {}", priority.label()))
                                .font(theme::font_small())
                                .color(theme::priority_color(priority)),
                        );
                    }
                    for tag in &task.tags {
                        widgets::badge(ui, tag, theme::TEXT_MUTED);
                    }
                });
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if widgets::icon_button(ui, egui_phosphor::regular::TRASH, "削除") {
                    action = TaskAction::Delete(task.id.clone());
                }
                if widgets::icon_button(ui, egui_phosphor::regular::PENCIL_SIMPLE, "編集") {
                    action = TaskAction::StartEdit(task.id.clone());
                }
            });
        });
    });
    action
}
