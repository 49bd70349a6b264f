use egui::{ColorImage, TextureHandle, Vec2};
use image::RgbImage;
use image::imageops::{self, FilterType};

/// GPU copy of a session image, tagged with the session generation it was built from.
///
/// `width`/`height` are the source image's dimensions; the uploaded texture may be
/// smaller when the source exceeds the backend's maximum texture side.
#[derive(Clone)]
pub struct ImageTexture {
    pub texture: TextureHandle,
    pub width: u32,
    pub height: u32,
    pub generation: u64,
}

impl ImageTexture {
    pub fn upload(ctx: &egui::Context, name: &str, image: &RgbImage, generation: u64) -> Self {
        let max_side = ctx.input(|i| i.max_texture_side);
        let (display_width, display_height) = fit_within(image.width(), image.height(), max_side);

        let color_image = if (display_width, display_height) == image.dimensions() {
            let size = [image.width() as usize, image.height() as usize];
            ColorImage::from_rgb(size, image.as_raw())
        } else {
            log::debug!(
                "Scaling {name} texture from {}x{} to {display_width}x{display_height}",
                image.width(),
                image.height()
            );
            let scaled = imageops::resize(image, display_width, display_height, FilterType::Triangle);
            ColorImage::from_rgb(
                [display_width as usize, display_height as usize],
                scaled.as_raw(),
            )
        };
        let texture = ctx.load_texture(name, color_image, egui::TextureOptions::NEAREST);

        Self {
            texture,
            width: image.width(),
            height: image.height(),
            generation,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Largest size with the same aspect ratio whose sides fit in `max_side`.
fn fit_within(width: u32, height: u32, max_side: usize) -> (u32, u32) {
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX).max(1);
    let longest = width.max(height);
    if longest <= max_side {
        return (width, height);
    }
    let scale = max_side as f64 / longest as f64;
    let scaled = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max_side);
    (scaled(width), scaled(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_within_keeps_small_images() {
        assert_eq!(fit_within(640, 480, 2048), (640, 480));
        assert_eq!(fit_within(8192, 8192, 8192), (8192, 8192));
    }

    #[test]
    fn test_fit_within_scales_longest_side() {
        assert_eq!(fit_within(8688, 10, 8192), (8192, 9));
        assert_eq!(fit_within(100, 20000, 8192), (41, 8192));
        assert_eq!(fit_within(30000, 1, 8192), (8192, 1));
    }

    #[test]
    fn test_upload_oversized_image_fits_max_texture_side() {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            max_texture_side: Some(8192),
            ..Default::default()
        };
        let image = RgbImage::new(8688, 10);

        let mut uploaded = None;
        let _ = ctx.run(input, |ctx| {
            uploaded = Some(ImageTexture::upload(ctx, "current", &image, 1));
        });

        let uploaded = uploaded.unwrap();
        assert_eq!((uploaded.width, uploaded.height), (8688, 10));
        assert_eq!(uploaded.size(), Vec2::new(8688.0, 10.0));
        let [texture_width, texture_height] = uploaded.texture.size();
        assert!(texture_width <= 8192 && texture_height <= 8192);
        assert_eq!(texture_width, 8192);
    }
}
