//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PAGE: Color32 = Color32::from_rgb(0xf9, 0xf9, 0xf9);
pub const BG_INPUT: Color32 = Color32::from_rgb(0xf2, 0xf2, 0xf2);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(0xe3, 0xf2, 0xfd);
pub const BOT_BUBBLE: Color32 = Color32::from_rgb(0xf5, 0xf5, 0xf5);
pub const HEADING: Color32 = Color32::from_rgb(0x2c, 0x3e, 0x50);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x21, 0x21, 0x21);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x7f, 0x8c, 0x8d);
pub const ACCENT: Color32 = Color32::from_rgb(0xc7, 0x46, 0x34);
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0xb3, 0x32, 0x20);
pub const BUTTON_TEXT: Color32 = Color32::WHITE;

pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(5);
pub const BUTTON_ROUNDING: CornerRadius = CornerRadius::same(4);
pub const PANEL_PADDING: Vec2 = Vec2::new(20.0, 20.0);
/// Width of the chat column
pub const CHAT_MAX_WIDTH: f32 = 500.0;
/// Fraction of the column a bubble leaves empty on the opposite side
pub const BUBBLE_INDENT: f32 = 0.2;

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PAGE;
    style.visuals.window_fill = BG_PAGE;
    style.visuals.extreme_bg_color = BG_INPUT;

    // Submit button hover
    style.visuals.widgets.hovered.weak_bg_fill = ACCENT_HOVER;

    style.visuals.selection.bg_fill = USER_BUBBLE;
    style.visuals.selection.stroke = Stroke::new(1.0, HEADING);

    style.spacing.item_spacing = Vec2::new(10.0, 10.0);

    ctx.set_style(style);
}
