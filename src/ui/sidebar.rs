use egui::{RichText, Ui};
use hibi::Route;

use crate::ui::theme;

const FOOTER_URL: &str = "https://kohsuk.tech";

fn route_icon(route: &Route) -> &'static str {
    match route {
        Route::Summary => egui_phosphor::regular::SPARKLE,
        Route::Projects | Route::ProjectTasks(_) => egui_phosphor::regular::FOLDERS,
        Route::Tasks => egui_phosphor::regular::LIST_CHECKS,
    }
}

/// Navigation entries. Returns the route the user picked, if any.
pub fn show_sidebar(current: &Route, ui: &mut Ui) -> Option<Route> {
    let mut picked = None;

    ui.add_space(8.0);
    ui.label(RichText::new("Hibi").size(18.0).strong());
    ui.add_space(12.0);

    for route in Route::NAV {
        let active = route.is_active(current);
        let text = RichText::new(format!("{}  {}", route_icon(&route), route.label()));
        let text = if active { text.strong() } else { text.color(theme::TEXT_MUTED) };
        let response = ui.add_sized(
            [ui.available_width(), 30.0],
            egui::SelectableLabel::new(active, text),
        );
        // Re-selecting Projects from a project's task list goes back to the list.
        if response.clicked() && &route != current {
            picked = Some(route);
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Powered by").font(theme::font_small()).color(theme::TEXT_MUTED));
            ui.hyperlink_to(RichText::new("KOHSUK").font(theme::font_small()), FOOTER_URL);
        });
    });

    picked
}
