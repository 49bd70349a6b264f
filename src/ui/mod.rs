mod color_panel;
mod dialogs;
mod footer;
pub mod header;
mod image_viewer;
pub mod styles;

use crate::types::{AppState, ImageTexture};

pub struct UI;

impl UI {
    pub fn draw_color_panel(ui: &mut egui::Ui, state: &mut AppState) {
        color_panel::draw_color_panel(ui, state)
    }

    pub fn draw_image_view(
        ui: &mut egui::Ui,
        state: &mut AppState,
        current: Option<&ImageTexture>,
        original: Option<&ImageTexture>,
    ) {
        image_viewer::draw_image_view(ui, state, current, original)
    }

    pub fn draw_main_content(ui: &mut egui::Ui) {
        image_viewer::draw_main_content(ui)
    }

    pub fn draw_header(ui: &mut egui::Ui, state: &mut AppState) {
        header::draw_header(ui, state)
    }

    pub fn draw_footer(ui: &mut egui::Ui, state: &mut AppState) {
        footer::draw_footer(ui, state)
    }

    pub fn draw_message(ctx: &egui::Context, state: &mut AppState) {
        dialogs::draw_message(ctx, state)
    }
}
