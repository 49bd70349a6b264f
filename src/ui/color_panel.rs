use super::styles::{self, UiMarginExt};
use crate::types::{AppState, AppStateRequest, Rgb8};
use egui::{Color32, Sense, Vec2};

const SWATCH_SIZE: f32 = 28.0;
const SUGGESTION_LABELS: [&str; 3] = ["Complementary", "Triadic +120°", "Triadic +240°"];

pub fn draw_color_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let has_image = state.session.has_image();

    ui.subheading_with_margin("Color Picker");
    draw_selected_color(ui, state, has_image);

    ui.separator();
    ui.subheading_with_margin("New Color");
    draw_new_color(ui, state);

    ui.separator();
    ui.subheading_with_margin("Suggestions");
    draw_suggestions(ui, state);

    ui.separator();
    ui.subheading_with_margin("Process");
    draw_process_controls(ui, state, has_image);
}

fn draw_selected_color(ui: &mut egui::Ui, state: &mut AppState, has_image: bool) {
    let label = if state.picker_armed {
        "🎯 Click on the image…"
    } else {
        "🎯 Pick Color from Image"
    };
    if ui
        .add_enabled(
            has_image,
            egui::Button::new(label).selected(state.picker_armed),
        )
        .clicked()
    {
        state.picker_armed = !state.picker_armed;
        state.status = if state.picker_armed {
            "Click on the image to pick a color.".to_string()
        } else {
            "Ready".to_string()
        };
    }

    let selected = state.session.selected_color();
    ui.horizontal(|ui| {
        color_swatch(ui, selected);
        match selected {
            Some(color) => {
                ui.vertical(|ui| {
                    ui.monospace(color.hex());
                    ui.weak(format!("{} pixels", state.session.count_matches(color)));
                });
            }
            None => {
                ui.weak("None selected");
            }
        }
    });
}

fn draw_new_color(ui: &mut egui::Ui, state: &mut AppState) {
    let current = state.session.new_color();
    ui.horizontal(|ui| {
        let mut rgb = current.map_or([255, 255, 255], Rgb8::to_array);
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            state.request(AppStateRequest::SetNewColor { color: rgb.into() });
        }
        match current {
            Some(color) => ui.monospace(color.hex()),
            None => ui.weak("Not chosen"),
        };
    });
}

fn draw_suggestions(ui: &mut egui::Ui, state: &mut AppState) {
    if ui
        .add_enabled(
            state.session.selected_color().is_some(),
            egui::Button::new("🎨 Suggest Colors"),
        )
        .on_disabled_hover_text("Pick a color from the image first")
        .clicked()
    {
        state.request(AppStateRequest::SuggestColors);
    }

    let Some(suggestions) = state.suggestions else {
        return;
    };
    ui.horizontal(|ui| {
        for (color, label) in suggestions.into_iter().zip(SUGGESTION_LABELS) {
            let response = color_swatch(ui, Some(color))
                .on_hover_text(format!("{label} {}", color.hex()));
            if response.clicked() {
                state.request(AppStateRequest::SetNewColor { color });
            }
        }
    });
    ui.weak("Click a swatch to use it as the new color");
}

fn draw_process_controls(ui: &mut egui::Ui, state: &mut AppState, has_image: bool) {
    let ready = has_image
        && state.session.selected_color().is_some()
        && state.session.new_color().is_some();

    ui.scope(|ui| {
        styles::apply_primary_button_style(ui);
        if ui
            .add_enabled(ready, egui::Button::new("✔ Process Image"))
            .on_disabled_hover_text("Load an image and select both colors")
            .clicked()
        {
            state.request(AppStateRequest::Substitute);
        }
    });

    ui.horizontal(|ui| {
        let has_colors =
            state.session.selected_color().is_some() || state.session.new_color().is_some();
        if ui
            .add_enabled(has_colors, egui::Button::new("✖ Clear Colors"))
            .clicked()
        {
            state.request(AppStateRequest::ClearColors);
        }
        if ui
            .add_enabled(state.session.can_undo(), egui::Button::new("↶ Undo"))
            .clicked()
        {
            state.request(AppStateRequest::Undo);
        }
        if ui
            .add_enabled(state.session.can_redo(), egui::Button::new("↷ Redo"))
            .clicked()
        {
            state.request(AppStateRequest::Redo);
        }
    });
}

fn color_swatch(ui: &mut egui::Ui, color: Option<Rgb8>) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::click());
    let painter = ui.painter();
    match color {
        Some(color) => {
            painter.rect_filled(rect, 2.0, color.to_color32());
        }
        None => {
            painter.rect_filled(rect, 2.0, Color32::WHITE);
            painter.line_segment(
                [rect.left_bottom(), rect.right_top()],
                (1.5, Color32::from_rgb(200, 60, 60)),
            );
        }
    }
    painter.rect_stroke(
        rect,
        2.0,
        egui::Stroke::new(1.0, styles::SWATCH_STROKE),
        egui::StrokeKind::Middle,
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_labels_are_distinct() {
        assert_ne!(SUGGESTION_LABELS[0], SUGGESTION_LABELS[1]);
        assert_ne!(SUGGESTION_LABELS[1], SUGGESTION_LABELS[2]);
        assert_ne!(SUGGESTION_LABELS[0], SUGGESTION_LABELS[2]);
    }
}
