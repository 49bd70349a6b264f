use crate::types::AppState;

pub fn draw_footer(ui: &mut egui::Ui, state: &mut AppState) {
    let width = ui.available_width();

    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
        ui.label(format!("Status: {}", state.status));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some((index, len)) = state.session.history_position() {
                ui.label(format!("History {}/{}", index + 1, len));
                ui.separator();
            }

            draw_view_controls(ui, state);

            if width > 640.0 {
                ui.separator();
                ui.label("🖱 Drag to pan, scroll to zoom");
            }
        });
    });
}

fn draw_view_controls(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(state.zoom_status());
    if ui.small_button("➕").clicked() {
        state.view.zoom_in();
    }
    if ui.small_button("➖").clicked() {
        state.view.zoom_out();
    }
    if ui.button("🔄 Reset Zoom").clicked() {
        state.view.reset();
    }
}
