use crate::types::app_state::AppearanceMode;
use crate::types::{AppState, AppStateRequest, ImageTexture};
use crate::ui::{UI, header};
use eframe::egui;
use egui::Margin;
use std::path::Path;

pub struct ColorChangerApp {
    state: AppState,
    current_texture: Option<ImageTexture>,
    original_texture: Option<ImageTexture>,
}

impl Default for ColorChangerApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
            current_texture: None,
            original_texture: None,
        }
    }
}

impl ColorChangerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        crate::ui::styles::init_styles(&cc.egui_ctx);
        Self::default()
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(dropped_file) = dropped_files.first()
            && let Some(path) = &dropped_file.path
        {
            self.state.request(AppStateRequest::LoadImage { path: path.clone() });
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, KeyboardShortcut, Modifiers};

        // Shift+Z first: the plain Ctrl+Z shortcut would also match it.
        let redo_shift = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
        let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
        let redo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
        let open = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
        let save = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);

        let (redo_pressed, undo_pressed, open_pressed, save_pressed) = ctx.input_mut(|i| {
            let redo_pressed = i.consume_shortcut(&redo_shift) || i.consume_shortcut(&redo);
            (
                redo_pressed,
                i.consume_shortcut(&undo),
                i.consume_shortcut(&open),
                i.consume_shortcut(&save),
            )
        });

        if redo_pressed {
            self.state.request(AppStateRequest::Redo);
        }
        if undo_pressed {
            self.state.request(AppStateRequest::Undo);
        }
        if open_pressed {
            header::open_image_dialog(&mut self.state);
        }
        if save_pressed {
            header::save_image_dialog(&mut self.state);
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        let visuals = match self.state.preferences.appearance_mode {
            AppearanceMode::Dark => egui::Visuals::dark(),
            AppearanceMode::Light => egui::Visuals::light(),
            AppearanceMode::System => match ctx.system_theme() {
                Some(egui::Theme::Dark) => egui::Visuals::dark(),
                Some(egui::Theme::Light) => egui::Visuals::light(),
                None => egui::Visuals::dark(),
            },
        };
        if ctx.style().visuals != visuals {
            ctx.set_visuals(visuals);
        }
    }

    /// Re-uploads textures whose session generation is stale.
    fn sync_textures(&mut self, ctx: &egui::Context) {
        let session = &self.state.session;
        let (Some(image), Some(original), Some(original_generation)) = (
            session.image(),
            session.original(),
            session.original_generation(),
        ) else {
            self.current_texture = None;
            self.original_texture = None;
            return;
        };

        let generation = session.generation();
        if self
            .current_texture
            .as_ref()
            .is_none_or(|texture| texture.generation != generation)
        {
            self.current_texture = Some(ImageTexture::upload(ctx, "current", image, generation));
        }
        if self
            .original_texture
            .as_ref()
            .is_none_or(|texture| texture.generation != original_generation)
        {
            self.original_texture = Some(ImageTexture::upload(
                ctx,
                "original",
                original,
                original_generation,
            ));
        }
    }

    fn load_image_file(&mut self, path: &Path) {
        match self.state.session.load(path) {
            Ok(_) => {
                self.state.view.reset();
                self.state.picker_armed = false;
                self.state.suggestions = None;
                self.state.status = "Image loaded".to_string();
                self.state.preferences.last_directory = path.parent().map(Path::to_path_buf);
            }
            Err(e) => {
                self.state.show_error(&e);
            }
        }
    }

    fn save_image_file(&mut self, path: &Path) {
        match self.state.session.save(path) {
            Ok(format) => {
                self.state.preferences.selected_export_format = format;
                self.state.preferences.last_directory = path.parent().map(Path::to_path_buf);
                self.state.status = format!("Saved {}", path.display());
                self.state.show_info("Image saved successfully.");
            }
            Err(e) => {
                self.state.show_error(&e);
            }
        }
    }

    fn handle_requests(&mut self) {
        let requests = std::mem::take(&mut self.state.pending_requests);
        for request in requests {
            self.handle_request(request);
        }
    }

    fn handle_request(&mut self, request: AppStateRequest) {
        let state = &mut self.state;
        match request {
            AppStateRequest::LoadImage { path } => self.load_image_file(&path),
            AppStateRequest::SaveImage { path } => self.save_image_file(&path),
            AppStateRequest::ResetImage => match state.session.reset().map(|_| ()) {
                Ok(_) => state.status = "Image reset".to_string(),
                Err(e) => state.show_error(&e),
            },
            AppStateRequest::PickPixel { x, y } => {
                state.picker_armed = false;
                match state.session.pick_color(x, y) {
                    Ok(color) => {
                        state.suggestions = None;
                        state.status = format!(
                            "Selected color {} ({} pixels)",
                            color.hex(),
                            state.session.count_matches(color)
                        );
                    }
                    Err(e) => state.show_error(&e),
                }
            }
            AppStateRequest::SetNewColor { color } => {
                state.session.set_new_color(Some(color));
                state.status = format!("New color {}", color.hex());
            }
            AppStateRequest::ClearColors => {
                state.session.set_selected_color(None);
                state.session.set_new_color(None);
                state.suggestions = None;
                state.status = "Ready".to_string();
            }
            AppStateRequest::SuggestColors => match state.session.suggestions() {
                Ok(suggestions) => state.suggestions = Some(suggestions),
                Err(e) => state.show_error(&e),
            },
            AppStateRequest::Substitute => {
                let replaced = state
                    .session
                    .selected_color()
                    .map_or(0, |color| state.session.count_matches(color));
                match state.session.substitute().map(|_| ()) {
                    Ok(_) => state.status = format!("Replaced {replaced} pixels"),
                    Err(e) => state.show_error(&e),
                }
            }
            AppStateRequest::Undo => {
                if state.session.undo() {
                    state.status = "Undo".to_string();
                }
            }
            AppStateRequest::Redo => {
                if state.session.redo() {
                    state.status = "Redo".to_string();
                }
            }
        }
    }
}

impl eframe::App for ColorChangerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // apply theme
        self.apply_theme(ctx);

        self.handle_dropped_files(ctx);
        self.handle_shortcuts(ctx);

        // Top（Menu）
        egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
            egui::Frame::NONE
                .inner_margin(Margin::symmetric(0, 4))
                .show(ui, |ui| {
                    UI::draw_header(ui, &mut self.state);
                });
        });

        // Bottom（Status）
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            egui::Frame::NONE
                .inner_margin(Margin::symmetric(0, 4))
                .show(ui, |ui| {
                    UI::draw_footer(ui, &mut self.state);
                });
        });

        // Side（Colors）
        egui::SidePanel::left("color_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    UI::draw_color_panel(ui, &mut self.state);
                });
            });

        // Main（Image）
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .inner_margin(0.0)
                    .fill(ctx.style().visuals.window_fill()),
            )
            .show(ctx, |ui| {
                if self.state.session.has_image() {
                    UI::draw_image_view(
                        ui,
                        &mut self.state,
                        self.current_texture.as_ref(),
                        self.original_texture.as_ref(),
                    );
                } else {
                    UI::draw_main_content(ui);
                }
            });

        UI::draw_message(ctx, &mut self.state);

        if !self.state.pending_requests.is_empty() {
            self.handle_requests();
            self.sync_textures(ctx);
            ctx.request_repaint();
        } else {
            self.sync_textures(ctx);
        }

        // Save preferences
        self.state.check_and_save_preferences();
    }
}
