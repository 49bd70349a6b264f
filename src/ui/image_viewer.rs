use crate::types::{AppState, AppStateRequest, ImageTexture};
use egui::{Align2, Color32, FontId, Pos2, Rect, Vec2};

const PANEL_SPACING: f32 = 4.0;

pub fn draw_image_view(
    ui: &mut egui::Ui,
    state: &mut AppState,
    current: Option<&ImageTexture>,
    original: Option<&ImageTexture>,
) {
    let available_size = ui.available_size();
    let show_original = state.preferences.show_original_image && original.is_some();

    let panel_width = if show_original {
        (available_size.x - PANEL_SPACING) / 2.0
    } else {
        available_size.x
    };
    let panel_size = Vec2::new(panel_width, available_size.y);
    let mut pan_changed = Vec2::ZERO;
    let mut clicked_pixel = None;
    let mut clicked_original = false;

    ui.horizontal(|ui| {
        ui.style_mut().spacing.item_spacing = egui::vec2(PANEL_SPACING, 0.0);
        if show_original {
            clicked_original = draw_image_panel(
                ui,
                panel_size,
                original,
                state,
                &mut pan_changed,
                "Original",
                false,
            )
            .is_some();
        }
        clicked_pixel = draw_image_panel(
            ui,
            panel_size,
            current,
            state,
            &mut pan_changed,
            "Current",
            true,
        );
    });

    if pan_changed != Vec2::ZERO {
        state.view.pan_by(pan_changed);
    }

    if let Some((x, y)) = clicked_pixel {
        state.request(AppStateRequest::PickPixel { x, y });
    } else if clicked_original {
        state.reject_original_pick();
    }

    if ui.ui_contains_pointer() {
        let scroll_delta = ui.ctx().input(|i| i.raw_scroll_delta.y);
        if scroll_delta != 0.0 {
            state.view.zoom_by_scroll(scroll_delta);
        }
    }
}

pub fn draw_main_content(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.heading("📁 Drop an image file here or use 'Open Image…'");
    });
}

/// Draws one canvas. Returns the pixel clicked while the color picker is armed;
/// the crosshair is only shown on a `pickable` canvas.
fn draw_image_panel(
    ui: &mut egui::Ui,
    size: Vec2,
    image: Option<&ImageTexture>,
    state: &AppState,
    pan_changed: &mut Vec2,
    title: &str,
    pickable: bool,
) -> Option<(u32, u32)> {
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
    let canvas = response.rect;

    let base_color = Color32::from_gray(64);
    painter.rect_filled(canvas, 0.0, base_color);
    draw_pixel_grid(&painter, canvas, base_color);

    let mut clicked_pixel = None;
    if let Some(image) = image {
        let image_rect = state.view.image_rect(canvas, image.size());
        painter.image(
            image.texture.id(),
            image_rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );

        if state.picker_armed {
            if pickable && response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
            }
            if response.clicked()
                && let Some(pos) = response.interact_pointer_pos()
            {
                clicked_pixel = state
                    .view
                    .screen_to_pixel(canvas, image.width, image.height, pos);
            }
        }
    }

    draw_title(ui, &painter, canvas, title);

    if response.dragged() {
        *pan_changed += response.drag_delta();
    }

    clicked_pixel
}

fn draw_pixel_grid(painter: &egui::Painter, canvas: Rect, base_color: Color32) {
    const MAGNIFICATION_PIXEL_SIZE: f32 = 24.0;
    let canvas_min_x = canvas.min.x % MAGNIFICATION_PIXEL_SIZE;
    let canvas_min_y = canvas.min.y % MAGNIFICATION_PIXEL_SIZE;
    let pixel_radius = 1.25;
    let pixel_color = Color32::from_rgb(
        (base_color.r() as f32 * 1.5) as u8,
        (base_color.g() as f32 * 1.5) as u8,
        (base_color.b() as f32 * 1.5) as u8,
    );
    for yi in 0.. {
        let y = (yi as f32 + 0.5) * MAGNIFICATION_PIXEL_SIZE;
        if y > canvas.height() + MAGNIFICATION_PIXEL_SIZE {
            break;
        }
        for xi in 0.. {
            let x = (xi as f32 + 0.5) * MAGNIFICATION_PIXEL_SIZE;
            if x > canvas.width() + MAGNIFICATION_PIXEL_SIZE {
                break;
            }
            painter.circle_filled(
                canvas.min + egui::vec2(x - canvas_min_x, y - canvas_min_y),
                pixel_radius,
                pixel_color,
            );
        }
    }
}

fn draw_title(ui: &egui::Ui, painter: &egui::Painter, canvas: Rect, title: &str) {
    let style = ui.ctx().style();
    let visuals = &style.visuals;
    let window_color = visuals.window_fill();
    let bg_color = Color32::from_rgba_unmultiplied(
        window_color.r(),
        window_color.g(),
        window_color.b(),
        178,
    );
    let text_color = visuals.override_text_color.unwrap_or(visuals.text_color());

    let galley = ui.fonts(|f| f.layout_no_wrap(title.to_string(), FontId::default(), text_color));

    let pos = canvas.left_bottom() + Vec2::new(4.0, -20.0);
    let rect = Align2::LEFT_TOP.align_size_within_rect(
        galley.size() + egui::vec2(4.0, 2.0),
        Rect::from_min_size(
            pos - egui::vec2(2.0, 1.0),
            galley.size() + egui::vec2(4.0, 2.0),
        ),
    );
    painter.rect_filled(rect, 0.0, bg_color);
    painter.galley(pos, galley, text_color);
}
