use egui::{Pos2, Rect, Vec2};

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 20.0;
/// Zoom factor of one zoom-in/zoom-out step.
pub const ZOOM_STEP: f32 = 1.1;

/// Zoom and pan of the canvas. Affects rendering and picking only, never the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub zoom: f32,
    pub pan: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn zoom_by_scroll(&mut self, scroll_delta: f32) {
        self.set_zoom(self.zoom * (1.0 + scroll_delta * 0.001));
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Screen rect of an image of `image_size` pixels, centred on `canvas` and offset by the pan.
    pub fn image_rect(&self, canvas: Rect, image_size: Vec2) -> Rect {
        Rect::from_center_size(canvas.center() + self.pan, image_size * self.zoom)
    }

    /// Pixel under `pos`, or `None` when `pos` is off the image.
    pub fn screen_to_pixel(&self, canvas: Rect, width: u32, height: u32, pos: Pos2) -> Option<(u32, u32)> {
        let rect = self.image_rect(canvas, Vec2::new(width as f32, height as f32));
        let local = (pos - rect.min) / self.zoom;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let (x, y) = (local.x.floor() as u32, local.y.floor() as u32);
        (x < width && y < height).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(400.0, 300.0))
    }

    #[test]
    fn test_pixel_centres_map_back_to_pixels() {
        let view = ViewTransform {
            zoom: 2.5,
            pan: Vec2::new(13.0, -7.0),
        };
        let rect = view.image_rect(canvas(), Vec2::new(10.0, 6.0));
        for (x, y) in [(0, 0), (3, 4), (9, 5)] {
            let centre = rect.min + Vec2::new(x as f32 + 0.5, y as f32 + 0.5) * view.zoom;
            assert_eq!(view.screen_to_pixel(canvas(), 10, 6, centre), Some((x, y)));
        }
    }

    #[test]
    fn test_positions_off_the_image() {
        let view = ViewTransform::default();
        let rect = view.image_rect(canvas(), Vec2::new(4.0, 4.0));
        assert_eq!(
            view.screen_to_pixel(canvas(), 4, 4, rect.min - Vec2::new(0.5, 0.0)),
            None
        );
        assert_eq!(view.screen_to_pixel(canvas(), 4, 4, rect.max), None);
        assert_eq!(view.screen_to_pixel(canvas(), 4, 4, canvas().min), None);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = ViewTransform::default();
        for _ in 0..200 {
            view.zoom_in();
        }
        assert_eq!(view.zoom, MAX_ZOOM);
        view.zoom_by_scroll(-5000.0);
        assert_eq!(view.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_reset() {
        let mut view = ViewTransform::default();
        view.zoom_out();
        view.pan_by(Vec2::new(5.0, 5.0));
        view.reset();
        assert_eq!(view, ViewTransform::default());
    }
}
