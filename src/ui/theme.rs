use egui::{Color32, FontId, Rounding, Stroke, Visuals};
use hibi::{AppConfig, ProjectStatus, TaskPriority, TaskStatus};
use std::path::PathBuf;
use tracing::{info, warn};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_APP: Color32 = Color32::from_rgb(250, 250, 250);
pub const BG_CARD: Color32 = Color32::WHITE;
pub const BG_SIDEBAR: Color32 = Color32::from_rgb(244, 244, 246);
pub const BG_MUTED: Color32 = Color32::from_rgb(241, 241, 243);
pub const BG_FIELD: Color32 = Color32::WHITE;

pub const BORDER: Color32 = Color32::from_rgb(228, 228, 231);
pub const BORDER_DASHED: Color32 = Color32::from_rgb(212, 212, 216);
pub const BORDER_FOCUS: Color32 = Color32::from_rgb(24, 24, 27);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(24, 24, 27);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(113, 113, 122);

pub const PRIMARY: Color32 = Color32::from_rgb(24, 24, 27);
pub const CHART_1: Color32 = Color32::from_rgb(233, 116, 81);
pub const CHART_2: Color32 = Color32::from_rgb(42, 157, 144);
pub const CHART_3: Color32 = Color32::from_rgb(39, 71, 84);
pub const CHART_5: Color32 = Color32::from_rgb(244, 164, 98);
pub const DESTRUCTIVE: Color32 = Color32::from_rgb(239, 68, 68);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const SIDEBAR_WIDTH: f32 = 200.0;
pub const CONTENT_MAX_WIDTH: f32 = 880.0;
pub const CARD_ROUNDING: f32 = 8.0;
pub const FIELD_HEIGHT: f32 = 26.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_title() -> FontId {
    FontId::proportional(20.0)
}

pub fn font_body() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_small() -> FontId {
    FontId::proportional(11.0)
}

// ── Status colors ────────────────────────────────────────────────────────────

pub fn project_status_color(status: ProjectStatus) -> Color32 {
    match status {
        ProjectStatus::Planning => CHART_3,
        ProjectStatus::InProgress => CHART_1,
        ProjectStatus::OnHold => TEXT_MUTED,
        ProjectStatus::Completed => CHART_2,
    }
}

pub fn task_status_color(status: TaskStatus) -> Color32 {
    match status {
        TaskStatus::NotStarted => TEXT_MUTED,
        TaskStatus::InProgress => CHART_1,
        TaskStatus::Completed => CHART_2,
        TaskStatus::Overdue => DESTRUCTIVE,
    }
}

pub fn task_status_icon(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::NotStarted => egui_phosphor::regular::CIRCLE,
        TaskStatus::InProgress => egui_phosphor::regular::CLOCK,
        TaskStatus::Completed => egui_phosphor::regular::CHECK_CIRCLE,
        TaskStatus::Overdue => egui_phosphor::regular::WARNING_CIRCLE,
    }
}

pub fn priority_color(priority: TaskPriority) -> Color32 {
    match priority {
        TaskPriority::Low => TEXT_MUTED,
        TaskPriority::Medium => CHART_3,
        TaskPriority::High => CHART_5,
    }
}

/// A 10% tint of `color` over white, used behind status badges.
pub fn tint(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 26)
}

// ── Font loading ─────────────────────────────────────────────────────────────

const CJK_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
];

fn find_cjk_font(config: &AppConfig) -> Option<(PathBuf, Vec<u8>)> {
    let configured = config.cjk_font_path.iter().cloned();
    let fallback = CJK_FONT_CANDIDATES.iter().map(PathBuf::from);
    configured.chain(fallback).find_map(|path| match std::fs::read(&path) {
        Ok(bytes) => Some((path, bytes)),
        Err(_) => None,
    })
}

/// Register Phosphor icons and, when one is available, a Japanese font as
/// fallbacks behind egui's default fonts.
pub fn install_fonts(ctx: &egui::Context, config: &AppConfig) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    match find_cjk_font(config) {
        Some((path, bytes)) => {
            fonts
                .font_data
                .insert("cjk".to_owned(), egui::FontData::from_owned(bytes));
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts.families.entry(family).or_default().push("cjk".to_owned());
            }
            info!(path = %path.display(), "loaded CJK font");
        }
        None => warn!("no CJK font found, Japanese text will not render; set cjk_font_path in config.json"),
    }

    ctx.set_fonts(fonts);
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_APP;
    visuals.window_fill = BG_CARD;
    visuals.extreme_bg_color = BG_FIELD;
    visuals.faint_bg_color = BG_MUTED;

    let rounding = Rounding::same(6.0);
    visuals.widgets.noninteractive.bg_fill = BG_CARD;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.noninteractive.rounding = rounding;

    visuals.widgets.inactive.bg_fill = BG_CARD;
    visuals.widgets.inactive.weak_bg_fill = BG_CARD;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = rounding;

    visuals.widgets.hovered.bg_fill = BG_MUTED;
    visuals.widgets.hovered.weak_bg_fill = BG_MUTED;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, BORDER_DASHED);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = rounding;

    visuals.widgets.active.bg_fill = BORDER;
    visuals.widgets.active.weak_bg_fill = BORDER;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, BORDER_FOCUS);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.rounding = rounding;

    visuals.selection.bg_fill = Color32::from_rgb(219, 234, 254);
    visuals.selection.stroke = Stroke::new(1.0, BORDER_FOCUS);

    visuals.window_rounding = Rounding::same(CARD_ROUNDING);
    visuals.window_stroke = Stroke::new(1.0, BORDER);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    ctx.set_style(style);
}
