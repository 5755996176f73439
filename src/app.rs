use hibi::daily::DailySummary;
use hibi::{AppConfig, EntityStore, ProjectManager, Route, TaskManager};
use tracing::{info, warn};

use crate::ui;
use crate::ui::project_manager::ProjectAction;
use crate::ui::task_manager::TaskAction;

/// Main application state.
pub struct HibiApp {
    pub config: AppConfig,
    pub store: EntityStore,
    pub route: Route,
    pub signed_in: bool,

    // Screen controllers
    pub projects: ProjectManager,
    pub tasks: TaskManager,
    pub daily: DailySummary,

    // Dialog state
    pub show_about: bool,

    // Status message
    pub status_message: String,
}

impl HibiApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        ui::theme::install_fonts(&cc.egui_ctx, &config);

        let store = if config.seed_sample_data {
            EntityStore::sample()
        } else {
            EntityStore::new()
        };
        info!(projects = store.len(), "session store ready");

        let tasks = TaskManager::all().with_status_filter(config.default_status_filter);
        Self {
            config,
            store,
            route: Route::default(),
            signed_in: false,
            projects: ProjectManager::new(),
            tasks,
            daily: DailySummary::sample(),
            show_about: false,
            status_message: "準備完了".to_string(),
        }
    }

    /// Switch screens. Task screens get a fresh controller for their scope.
    pub fn navigate(&mut self, route: Route) {
        match &route {
            Route::Tasks => {
                self.tasks = TaskManager::all().with_status_filter(self.config.default_status_filter);
            }
            Route::ProjectTasks(id) => {
                self.tasks = TaskManager::for_project(id.clone())
                    .with_status_filter(self.config.default_status_filter);
            }
            Route::Summary | Route::Projects => {}
        }
        self.route = route;
    }

    pub fn reload_sample_data(&mut self) {
        self.store = EntityStore::sample();
        self.projects = ProjectManager::new();
        self.navigate(Route::Projects);
        self.status_message = "サンプルデータを読み込みました".to_string();
    }

    pub fn clear_data(&mut self) {
        self.store = EntityStore::new();
        self.projects = ProjectManager::new();
        self.navigate(Route::Projects);
        self.status_message = "データを消去しました".to_string();
    }

    pub fn save_config(&mut self) {
        match self.config.save() {
            Ok(()) => self.status_message = "設定を保存しました".to_string(),
            Err(e) => {
                warn!(error = %e, "could not save config");
                self.status_message = format!("設定の保存に失敗しました: {e}");
            }
        }
    }

    pub fn open_config_folder(&mut self) {
        let Some(dir) = AppConfig::config_dir() else {
            self.status_message = "設定フォルダが見つかりません".to_string();
            return;
        };
        if let Err(e) = std::fs::create_dir_all(&dir).and_then(|()| open::that(&dir)) {
            warn!(error = %e, dir = %dir.display(), "could not open config folder");
            self.status_message = format!("設定フォルダを開けませんでした: {e}");
        }
    }

    pub fn sign_in(&mut self) {
        self.signed_in = true;
        info!("signed in");
    }

    /// Sign out and drop every draft and open edit, so nothing from this
    /// session reappears on the next sign-in.
    pub fn sign_out(&mut self) {
        self.signed_in = false;
        self.reset_screens();
        self.route = Route::default();
        info!("signed out");
    }

    fn reset_screens(&mut self) {
        self.projects = ProjectManager::new();
        self.tasks = TaskManager::all().with_status_filter(self.config.default_status_filter);
    }

    fn apply_project_action(&mut self, action: ProjectAction) {
        match action {
            ProjectAction::None => {}
            ProjectAction::Create => match self.projects.create(&mut self.store) {
                Ok(_) => self.status_message = "プロジェクトを追加しました".to_string(),
                Err(e) => self.status_message = e.to_string(),
            },
            ProjectAction::StartEdit(id) => {
                if let Err(e) = self.projects.start_edit(&self.store, &id) {
                    self.status_message = e.to_string();
                }
            }
            ProjectAction::SaveEdit => match self.projects.save_edit(&mut self.store) {
                Ok(Some(_)) => self.status_message = "プロジェクトを更新しました".to_string(),
                Ok(None) => {}
                Err(e) => self.status_message = e.to_string(),
            },
            ProjectAction::CancelEdit => self.projects.cancel_edit(),
            ProjectAction::Delete(id) => match self.projects.delete(&mut self.store, &id) {
                Ok(project) => self.status_message = format!("「{}」を削除しました", project.name),
                Err(e) => self.status_message = e.to_string(),
            },
            ProjectAction::Open(id) => self.navigate(Route::ProjectTasks(id)),
        }
    }

    fn apply_task_action(&mut self, action: TaskAction) {
        match action {
            TaskAction::None => {}
            TaskAction::Back => self.navigate(Route::Projects),
            TaskAction::Create => match self.tasks.create(&mut self.store) {
                Ok(_) => self.status_message = "タスクを追加しました".to_string(),
                Err(e) => self.status_message = e.to_string(),
            },
            TaskAction::StartEdit(id) => {
                if let Err(e) = self.tasks.start_edit(&self.store, &id) {
                    self.status_message = e.to_string();
                }
            }
            TaskAction::SaveEdit => match self.tasks.save_edit(&mut self.store) {
                Ok(Some(_)) => self.status_message = "タスクを更新しました".to_string(),
                Ok(None) => {}
                Err(e) => self.status_message = e.to_string(),
            },
            TaskAction::CancelEdit => self.tasks.cancel_edit(),
            TaskAction::Delete(id) => match self.tasks.delete(&mut self.store, &id) {
                Ok(task) => self.status_message = format!("「{}」を削除しました", task.title),
                Err(e) => self.status_message = e.to_string(),
            },
        }
    }
}

impl eframe::App for HibiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        if !self.signed_in {
            egui::CentralPanel::default().show(ctx, |ui| {
                if ui::dialogs::show_sign_in(ui) {
                    self.sign_in();
                }
            });
            return;
        }

        // Top panel: menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_SIDEBAR)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_small())
                            .color(ui::theme::TEXT_MUTED),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let summary = self.projects.summary(&self.store);
                        ui.label(
                            egui::RichText::new(format!(
                                "プロジェクト: {} · タスク: {}",
                                summary.total,
                                self.store.all_tasks().len()
                            ))
                            .font(ui::theme::font_small())
                            .color(ui::theme::TEXT_MUTED),
                        );
                    });
                });
            });

        // Left panel: navigation
        let mut nav = None;
        egui::SidePanel::left("sidebar")
            .exact_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_SIDEBAR)
                    .inner_margin(egui::Margin::same(10.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER)),
            )
            .show(ctx, |ui| {
                nav = ui::sidebar::show_sidebar(&self.route, ui);
            });
        if let Some(route) = nav {
            self.navigate(route);
        }

        // Central panel: current screen
        let mut project_action = ProjectAction::None;
        let mut task_action = TaskAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(ui::theme::CONTENT_MAX_WIDTH);
                    match &self.route {
                        Route::Summary => ui::daily_summary::show_daily_summary(&self.daily, ui),
                        Route::Projects => {
                            project_action = ui::project_manager::show_project_manager(
                                &self.store,
                                &mut self.projects,
                                ui,
                            );
                        }
                        Route::Tasks | Route::ProjectTasks(_) => {
                            task_action =
                                ui::task_manager::show_task_manager(&self.store, &mut self.tasks, ui);
                        }
                    }
                });
        });
        self.apply_project_action(project_action);
        self.apply_task_action(task_action);

        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
