//! Chat panel — displays conversation messages and input field.

use egui::{self, Layout, RichText, ScrollArea, Vec2};
use assistant_types::config::AssistantConfig;
use assistant_types::session::ConversationState;
use crate::state::{ChatEntry, UiState};
use crate::theme::*;

/// Render the chat panel. Returns Some(message) when user submits input.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState, config: &AssistantConfig) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PAGE)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_max_width(CHAT_MAX_WIDTH);
            ui.vertical(|ui| {
                // Messages area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in &state.messages {
                            render_message(ui, entry);
                        }
                    });

                ui.add_space(8.0);

                let status_color = match state.conversation_state {
                    ConversationState::AwaitingMedicationName => ACCENT,
                    ConversationState::Idle => TEXT_MUTED,
                };
                ui.label(RichText::new(state.status_line()).color(status_color).small());

                // Input area
                ui.horizontal(|ui| {
                    let button_width = 150.0;
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text(config.input_hint.as_str())
                        .desired_width(ui.available_width() - button_width)
                        .text_color(TEXT_PRIMARY)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_btn = ui.add(
                        egui::Button::new(
                            RichText::new(&config.submit_label).color(BUTTON_TEXT),
                        )
                        .fill(ACCENT)
                        .corner_radius(BUTTON_ROUNDING)
                        .min_size(Vec2::new(button_width - 10.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if enter || send_btn.clicked() {
                        if let Some(text) = state.take_input() {
                            log::debug!("Submitting {} chars", text.len());
                            state.push_user_message(&text);
                            submitted = Some(text);
                        }
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, entry: &ChatEntry) {
    let (bg, layout) = match entry.role.as_str() {
        "user" => (USER_BUBBLE, Layout::right_to_left(egui::Align::TOP)),
        _ => (BOT_BUBBLE, Layout::left_to_right(egui::Align::TOP)),
    };
    let bubble_width = ui.available_width() * (1.0 - BUBBLE_INDENT);

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_max_width(bubble_width);
                ui.label(RichText::new(&entry.content).color(TEXT_PRIMARY));
            });
    });
}
