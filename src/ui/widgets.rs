//! Small building blocks shared by the screens.

use chrono::NaiveDate;
use egui::{Color32, RichText, Ui};
use hibi::model::DATE_FORMAT;

use crate::ui::theme;

/// White card with a thin border.
pub fn card() -> egui::Frame {
    egui::Frame::none()
        .fill(theme::BG_CARD)
        .rounding(theme::CARD_ROUNDING)
        .inner_margin(egui::Margin::same(14.0))
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
}

/// Muted card used for the create forms and empty states.
pub fn dashed_card() -> egui::Frame {
    egui::Frame::none()
        .fill(theme::BG_MUTED)
        .rounding(theme::CARD_ROUNDING)
        .inner_margin(egui::Margin::same(14.0))
        .stroke(egui::Stroke::new(1.0, theme::BORDER_DASHED))
}

/// Small rounded label with a tinted background.
pub fn badge(ui: &mut Ui, text: &str, color: Color32) {
    egui::Frame::none()
        .fill(theme::tint(color))
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(11.0).color(color));
        });
}

pub fn field_label(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .font(theme::font_small())
            .color(theme::TEXT_MUTED)
            .strong(),
    );
}

/// Single-line text input. Returns the new text when the user changed it.
pub fn text_field(ui: &mut Ui, value: &str, hint: &str, width: f32) -> Option<String> {
    let mut text = value.to_owned();
    let response = ui.add_sized(
        [width, theme::FIELD_HEIGHT],
        egui::TextEdit::singleline(&mut text).hint_text(hint),
    );
    response.changed().then_some(text)
}

pub fn multiline_field(ui: &mut Ui, value: &str, hint: &str) -> Option<String> {
    let mut text = value.to_owned();
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .hint_text(hint)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(text)
}

/// Date input as text plus a calendar picker. An empty value means no date.
/// Returns the new `YYYY-MM-DD` text (or "" when cleared) on change.
pub fn date_field(ui: &mut Ui, id_salt: &str, value: &str) -> Option<String> {
    let mut changed = None;
    ui.horizontal(|ui| {
        let mut text = value.to_owned();
        let response = ui.add_sized(
            [104.0, theme::FIELD_HEIGHT],
            egui::TextEdit::singleline(&mut text).hint_text("YYYY-MM-DD"),
        );
        if response.changed() {
            changed = Some(text);
        }

        let current = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok();
        let mut picked = current.unwrap_or_else(|| chrono::Local::now().date_naive());
        let response = ui.add(
            egui_extras::DatePickerButton::new(&mut picked)
                .id_salt(id_salt)
                .show_icon(true)
                .calendar_week(false),
        );
        if changed.is_none() {
            if let Some(date) = picked_date(current, picked, response.changed()) {
                changed = Some(date.format(DATE_FORMAT).to_string());
            }
        }

        if !value.is_empty()
            && ui
                .small_button(egui_phosphor::regular::X)
                .on_hover_text("クリア")
                .clicked()
        {
            changed = Some(String::new());
        }
    });
    changed
}

/// The date to store after the picker ran. The picker marks its response
/// changed when the user confirms a date, which may equal the date it was
/// already showing (today, for an empty field).
fn picked_date(current: Option<NaiveDate>, picked: NaiveDate, confirmed: bool) -> Option<NaiveDate> {
    (confirmed || current.is_some_and(|date| date != picked)).then_some(picked)
}

/// Status / priority dropdown over a fixed set of values.
pub fn choice<T: Copy + PartialEq>(
    ui: &mut Ui,
    id_salt: &str,
    current: T,
    options: &[T],
    label: impl Fn(T) -> &'static str,
) -> Option<T> {
    let mut selected = current;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(label(current))
        .width(120.0)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(&mut selected, *option, label(*option));
            }
        });
    (selected != current).then_some(selected)
}

pub fn primary_button(ui: &mut Ui, text: &str) -> bool {
    let button = egui::Button::new(RichText::new(text).color(Color32::WHITE))
        .fill(theme::PRIMARY)
        .rounding(6.0);
    ui.add(button).clicked()
}

pub fn icon_button(ui: &mut Ui, icon: &str, hover: &str) -> bool {
    ui.add(egui::Button::new(RichText::new(icon).size(14.0)).frame(false))
        .on_hover_text(hover)
        .clicked()
}

/// A muted line of text used under headings.
pub fn subtle(ui: &mut Ui, text: impl Into<String>) {
    ui.label(
        RichText::new(text.into())
            .font(theme::font_small())
            .color(theme::TEXT_MUTED),
    );
}
