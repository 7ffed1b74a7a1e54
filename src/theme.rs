//! Minimal paper theme: white page, grey text, no accents

use egui::Color32;

/// Greyscale palette matching the sphere's white background
pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PAGE: Color32 = Color32::from_rgb(255, 255, 255);   // #FFFFFF - canvas / panels
    pub const BG_HEADER: Color32 = Color32::from_rgb(244, 244, 244); // #F4F4F4 - header strip

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(20, 20, 20);     // #141414
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(90, 90, 90);   // #5A5A5A
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(150, 150, 150);    // #969696

    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
}

/// Light egui Visuals with flat, greyscale widgets
pub fn paper_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = BG_PAGE;
    visuals.window_fill = BG_PAGE;
    visuals.extreme_bg_color = BG_PAGE;
    visuals.faint_bg_color = BG_HEADER;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_HEADER;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
