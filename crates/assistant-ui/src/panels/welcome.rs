//! Welcome banner — title, tagline, capability list and the user's name.

use egui::{self, RichText};
use assistant_types::config::AssistantConfig;
use crate::state::UiState;
use crate::theme::*;

pub fn welcome_panel(ui: &mut egui::Ui, config: &AssistantConfig, state: &UiState) {
    ui.vertical_centered(|ui| {
        ui.add_space(PANEL_PADDING.y);
        ui.heading(
            RichText::new(&config.title)
                .color(HEADING)
                .size(28.0)
                .strong(),
        );
        ui.add_space(6.0);
        ui.label(RichText::new(&config.tagline).color(TEXT_MUTED));
        for capability in &config.capabilities {
            ui.label(RichText::new(capability).color(TEXT_MUTED));
        }
        if let Some(line) = state.chatting_with() {
            ui.add_space(6.0);
            ui.label(RichText::new(line).color(HEADING).strong());
        }
        ui.add_space(PANEL_PADDING.y);
    });
}
