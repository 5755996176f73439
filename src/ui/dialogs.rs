use crate::app::HibiApp;
use crate::ui::{theme, widgets};
use egui::{Context, RichText, Ui, Window};

/// Render the sign-in screen. No credentials are checked; returns true once
/// the user signs in.
pub fn show_sign_in(ui: &mut Ui) -> bool {
    let mut signed_in = false;
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        widgets::card().show(ui, |ui| {
            ui.set_width(320.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Hibi").font(theme::font_title()).strong());
                widgets::subtle(ui, "日々の作業をまとめて振り返るためのワークスペース");
                ui.add_space(14.0);
                if widgets::primary_button(ui, &format!("{} サインイン", egui_phosphor::regular::SIGN_IN)) {
                    signed_in = true;
                }
            });
        });
    });
    if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        signed_in = true;
    }
    signed_in
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut HibiApp, ctx: &Context) {
    let mut should_close = false;
    Window::new(RichText::new("Hibi について").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Hibi").size(20.0).strong());
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.add_space(6.0);
                widgets::subtle(ui, "プロジェクトとタスクを管理するパーソナルツール");
                ui.add_space(6.0);
                if let Some(dir) = hibi::AppConfig::config_dir() {
                    widgets::subtle(ui, format!("設定: {}", dir.display()));
                }
                ui.add_space(8.0);
                if ui.add_sized([80.0, 28.0], egui::Button::new("閉じる")).clicked() {
                    should_close = true;
                }
            });
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
