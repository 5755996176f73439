use crate::app::HibiApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};
use hibi::StatusFilter;

/// Render the top menu bar.
pub fn show_toolbar(app: &mut HibiApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new(" ファイル ").font(theme::font_body()), |ui| {
            if ui.button("  サンプルデータを再読み込み").clicked() {
                app.reload_sample_data();
                ui.close_menu();
            }
            if ui.button("  すべてのデータを消去").clicked() {
                app.clear_data();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  サインアウト").clicked() {
                app.sign_out();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new(" 設定 ").font(theme::font_body()), |ui| {
            let mut seed = app.config.seed_sample_data;
            if ui.checkbox(&mut seed, "サンプルデータで開始").changed() {
                app.config.seed_sample_data = seed;
                app.save_config();
            }
            ui.separator();
            ui.label(RichText::new("タスク一覧の初期タブ").small().weak());
            for tab in StatusFilter::TABS {
                if ui
                    .radio(app.config.default_status_filter == tab, tab.label())
                    .clicked()
                {
                    app.config.default_status_filter = tab;
                    app.save_config();
                    ui.close_menu();
                }
            }
            ui.separator();
            if ui.button("  設定フォルダを開く").clicked() {
                app.open_config_folder();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new(" ヘルプ ").font(theme::font_body()), |ui| {
            if ui.button("  Hibi について").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });
    });
}
