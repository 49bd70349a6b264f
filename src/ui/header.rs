use crate::image_io::default_output_name;
use crate::types::app_state::AppearanceMode;
use crate::types::{AppState, AppStateRequest, ExportFormat};
use rfd::FileDialog;

pub fn draw_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
            draw_file_controls(ui, state);
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::ComboBox::from_id_salt("appearance_mode")
                .selected_text(state.preferences.appearance_mode.display_name())
                .width(72.0)
                .show_ui(ui, |ui| {
                    for mode in AppearanceMode::all() {
                        ui.selectable_value(
                            &mut state.preferences.appearance_mode,
                            *mode,
                            mode.display_name(),
                        );
                    }
                });
            ui.separator();
            ui.checkbox(&mut state.preferences.show_original_image, "Original Image");
            ui.label("View:");
        });
    });
}

fn draw_file_controls(ui: &mut egui::Ui, state: &mut AppState) {
    if ui.button("📁 Open Image…").clicked() {
        open_image_dialog(state);
    }

    let has_image = state.session.has_image();
    if ui
        .add_enabled(has_image, egui::Button::new("💾 Save Image…"))
        .clicked()
    {
        save_image_dialog(state);
    }
    if ui
        .add_enabled(has_image, egui::Button::new("⟲ Reset Image"))
        .clicked()
    {
        state.request(AppStateRequest::ResetImage);
    }

    if let Some(name) = state.session.source_path().and_then(|path| path.file_name()) {
        ui.separator();
        ui.label(format!("📄 {}", name.to_string_lossy()));
    }
}

pub fn open_image_dialog(state: &mut AppState) {
    let mut dialog =
        FileDialog::new().add_filter("Image files", &["png", "jpg", "jpeg", "bmp"]);
    if let Some(dir) = &state.preferences.last_directory {
        dialog = dialog.set_directory(dir);
    }
    if let Some(path) = dialog.pick_file() {
        state.request(AppStateRequest::LoadImage { path });
    }
}

pub fn save_image_dialog(state: &mut AppState) {
    if !state.session.has_image() {
        state.show_error(&crate::error::SessionError::NoImage);
        return;
    }

    let format = state.preferences.selected_export_format;
    let mut dialog = FileDialog::new().set_file_name(default_output_name(
        state.session.source_path(),
        format,
    ));
    // The preferred format's filter comes first so it is the dialog default.
    let mut formats = vec![format];
    formats.extend(ExportFormat::all().iter().copied().filter(|f| *f != format));
    for f in formats {
        dialog = dialog.add_filter(format!("{} files", f.display_name()), f.extensions());
    }
    if let Some(dir) = state
        .preferences
        .last_directory
        .as_deref()
        .or_else(|| state.session.source_path().and_then(|path| path.parent()))
    {
        dialog = dialog.set_directory(dir);
    }

    if let Some(mut path) = dialog.save_file() {
        if path.extension().is_none() {
            path.set_extension(format.extension());
        }
        state.request(AppStateRequest::SaveImage { path });
    }
}
