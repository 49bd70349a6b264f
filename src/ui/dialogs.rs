use crate::types::AppState;
use crate::types::app_state::MessageLevel;
use egui::Color32;

/// Modal-style message box for errors and confirmations.
pub fn draw_message(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = &state.message else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(message.title.as_str())
        .id(egui::Id::new("message_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (icon, color) = match message.level {
                    MessageLevel::Info => ("ℹ", Color32::LIGHT_BLUE),
                    MessageLevel::Error => ("⚠", Color32::YELLOW),
                };
                ui.label(egui::RichText::new(icon).size(24.0).color(color));
                ui.label(message.text.as_str());
            });
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        state.message = None;
    }
}
