use crate::color_processor::ColorProcessor;
use crate::error::SessionError;
use crate::history::History;
use crate::image_io;
use crate::types::{ExportFormat, Rgb8};
use image::RgbImage;
use std::path::{Path, PathBuf};

struct LoadedImage {
    source_path: Option<PathBuf>,
    original: RgbImage,
    original_generation: u64,
    history: History<RgbImage>,
}

/// The image being recolored, its undo history and the two colors of the replacement.
#[derive(Default)]
pub struct RecolorSession {
    loaded: Option<LoadedImage>,
    selected_color: Option<Rgb8>,
    new_color: Option<Rgb8>,
    generation: u64,
}

impl RecolorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, path: &Path) -> Result<&RgbImage, SessionError> {
        let image = image_io::load_rgb_image(path)?;
        log::info!(
            "Loaded {} ({}×{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(self.load_image(image, Some(path.to_path_buf())))
    }

    pub fn load_image(&mut self, image: RgbImage, source_path: Option<PathBuf>) -> &RgbImage {
        self.generation += 1;
        let loaded = self.loaded.insert(LoadedImage {
            source_path,
            original: image.clone(),
            original_generation: self.generation,
            history: History::new(image),
        });
        loaded.history.current()
    }

    pub fn has_image(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn image(&self) -> Option<&RgbImage> {
        self.loaded.as_ref().map(|loaded| loaded.history.current())
    }

    pub fn original(&self) -> Option<&RgbImage> {
        self.loaded.as_ref().map(|loaded| &loaded.original)
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.loaded.as_ref()?.source_path.as_deref()
    }

    /// Increases whenever the current image changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Generation at which the original image was loaded.
    pub fn original_generation(&self) -> Option<u64> {
        self.loaded.as_ref().map(|loaded| loaded.original_generation)
    }

    /// `(index, len)` of the history, when an image is loaded.
    pub fn history_position(&self) -> Option<(usize, usize)> {
        self.loaded
            .as_ref()
            .map(|loaded| (loaded.history.index(), loaded.history.len()))
    }

    pub fn selected_color(&self) -> Option<Rgb8> {
        self.selected_color
    }

    pub fn set_selected_color(&mut self, color: Option<Rgb8>) {
        self.selected_color = color;
    }

    pub fn new_color(&self) -> Option<Rgb8> {
        self.new_color
    }

    pub fn set_new_color(&mut self, color: Option<Rgb8>) {
        self.new_color = color;
    }

    /// Samples the current image at `(x, y)` and makes it the selected color.
    pub fn pick_color(&mut self, x: u32, y: u32) -> Result<Rgb8, SessionError> {
        let image = self.image().ok_or(SessionError::NoImage)?;
        let (width, height) = image.dimensions();
        let pixel = image
            .get_pixel_checked(x, y)
            .ok_or(SessionError::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            })?;
        let color = Rgb8::from(*pixel);
        self.selected_color = Some(color);
        Ok(color)
    }

    /// Replaces the selected color with the new color.
    pub fn substitute(&mut self) -> Result<&RgbImage, SessionError> {
        if self.loaded.is_none() {
            return Err(SessionError::NoImage);
        }
        let selected = self.selected_color.ok_or(SessionError::NoSelectedColor)?;
        let new = self.new_color.ok_or(SessionError::NoNewColor)?;
        self.substitute_colors(selected, new)
    }

    pub fn substitute_colors(
        &mut self,
        selected: Rgb8,
        new: Rgb8,
    ) -> Result<&RgbImage, SessionError> {
        let loaded = self.loaded.as_mut().ok_or(SessionError::NoImage)?;
        let result = ColorProcessor::replace_exact(loaded.history.current(), selected, new);
        loaded.history.push(result);
        self.generation += 1;
        log::debug!(
            "Replaced {} with {}, history {}/{}",
            selected.hex(),
            new.hex(),
            loaded.history.index() + 1,
            loaded.history.len()
        );
        Ok(loaded.history.current())
    }

    pub fn can_undo(&self) -> bool {
        self.loaded
            .as_ref()
            .is_some_and(|loaded| loaded.history.can_undo())
    }

    pub fn can_redo(&self) -> bool {
        self.loaded
            .as_ref()
            .is_some_and(|loaded| loaded.history.can_redo())
    }

    /// Steps back one edit. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(loaded) = self.loaded.as_mut() else {
            return false;
        };
        if !loaded.history.undo() {
            return false;
        }
        self.generation += 1;
        log::debug!("Undo to {}/{}", loaded.history.index() + 1, loaded.history.len());
        true
    }

    /// Steps forward one edit. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(loaded) = self.loaded.as_mut() else {
            return false;
        };
        if !loaded.history.redo() {
            return false;
        }
        self.generation += 1;
        log::debug!("Redo to {}/{}", loaded.history.index() + 1, loaded.history.len());
        true
    }

    /// Restores the image as loaded and drops all history.
    pub fn reset(&mut self) -> Result<&RgbImage, SessionError> {
        let loaded = self.loaded.as_mut().ok_or(SessionError::NoImage)?;
        loaded.history.reset(loaded.original.clone());
        self.generation += 1;
        Ok(loaded.history.current())
    }

    pub fn save(&self, path: &Path) -> Result<ExportFormat, SessionError> {
        let image = self.image().ok_or(SessionError::NoImage)?;
        image_io::save_rgb_image(path, image)
    }

    /// Harmonious alternatives to the selected color.
    pub fn suggestions(&self) -> Result<[Rgb8; 3], SessionError> {
        let selected = self.selected_color.ok_or(SessionError::NoSelectedColor)?;
        Ok(ColorProcessor::suggest(selected))
    }

    /// Pixels of the current image exactly equal to `color`.
    pub fn count_matches(&self, color: Rgb8) -> usize {
        self.image()
            .map_or(0, |image| ColorProcessor::count_matches(image, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use image::Rgb;

    const RED: Rgb8 = Rgb8::new(255, 0, 0);
    const GREEN: Rgb8 = Rgb8::new(0, 255, 0);
    const BLUE: Rgb8 = Rgb8::new(0, 0, 255);
    const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    fn grid(colors: [Rgb8; 4]) -> RgbImage {
        RgbImage::from_fn(2, 2, |x, y| colors[(y * 2 + x) as usize].into())
    }

    fn session_with(image: RgbImage) -> RecolorSession {
        let mut session = RecolorSession::new();
        session.load_image(image, None);
        session
    }

    #[test]
    fn test_two_by_two_scenario() {
        let original = grid([RED, GREEN, GREEN, BLUE]);
        let mut session = session_with(original.clone());
        session.set_selected_color(Some(GREEN));
        session.set_new_color(Some(BLACK));

        let result = session.substitute().unwrap().clone();
        assert_eq!(result, grid([RED, BLACK, BLACK, BLUE]));

        assert!(session.undo());
        assert_eq!(session.image(), Some(&original));
        assert!(session.redo());
        assert_eq!(session.image(), Some(&result));
    }

    #[test]
    fn test_substitute_without_colors_leaves_history_unchanged() {
        let mut session = session_with(grid([RED, GREEN, GREEN, BLUE]));

        let err = session.substitute().unwrap_err();
        assert!(matches!(err, SessionError::NoSelectedColor));
        assert_eq!(err.kind(), ErrorKind::Precondition);

        session.set_selected_color(Some(RED));
        let err = session.substitute().unwrap_err();
        assert!(matches!(err, SessionError::NoNewColor));

        assert_eq!(session.history_position(), Some((0, 1)));
        assert!(!session.can_undo());
    }

    #[test]
    fn test_operations_without_image() {
        let mut session = RecolorSession::new();
        session.set_selected_color(Some(RED));
        session.set_new_color(Some(BLUE));

        assert!(matches!(session.substitute(), Err(SessionError::NoImage)));
        assert!(matches!(session.reset(), Err(SessionError::NoImage)));
        assert!(matches!(
            session.save(Path::new("out.png")),
            Err(SessionError::NoImage)
        ));
        assert!(matches!(session.pick_color(0, 0), Err(SessionError::NoImage)));
        assert!(!session.undo());
        assert!(!session.redo());
        assert_eq!(session.history_position(), None);
    }

    #[test]
    fn test_new_edit_discards_redo_branch() {
        let mut session = session_with(grid([RED, GREEN, GREEN, BLUE]));
        session.substitute_colors(RED, BLACK).unwrap();
        session.substitute_colors(BLUE, BLACK).unwrap();
        assert!(session.undo());
        assert!(session.can_redo());

        session.substitute_colors(GREEN, RED).unwrap();
        assert!(!session.can_redo());
        assert_eq!(session.history_position(), Some((2, 3)));
        assert_eq!(session.image(), Some(&grid([BLACK, RED, RED, BLUE])));
    }

    #[test]
    fn test_reset_restores_original_after_many_edits() {
        let original = grid([RED, GREEN, GREEN, BLUE]);
        let mut session = session_with(original.clone());
        session.substitute_colors(RED, GREEN).unwrap();
        session.substitute_colors(GREEN, BLUE).unwrap();
        session.substitute_colors(BLUE, BLACK).unwrap();
        session.undo();

        assert_eq!(session.reset().unwrap(), &original);
        assert_eq!(session.history_position(), Some((0, 1)));
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn test_pick_color_sets_selected() {
        let mut session = session_with(grid([RED, GREEN, GREEN, BLUE]));
        assert_eq!(session.pick_color(1, 1).unwrap(), BLUE);
        assert_eq!(session.selected_color(), Some(BLUE));

        let err = session.pick_color(2, 0).unwrap_err();
        assert!(matches!(err, SessionError::PixelOutOfBounds { x: 2, y: 0, .. }));
        assert_eq!(session.selected_color(), Some(BLUE));
    }

    #[test]
    fn test_generation_tracks_image_changes() {
        let mut session = session_with(grid([RED, GREEN, GREEN, BLUE]));
        let loaded = session.generation();

        session.set_selected_color(Some(RED));
        assert_eq!(session.generation(), loaded);
        assert_eq!(session.original_generation(), Some(loaded));

        session.substitute_colors(RED, BLUE).unwrap();
        assert!(session.generation() > loaded);

        let edited = session.generation();
        assert!(!session.redo());
        assert_eq!(session.generation(), edited);
        assert!(session.undo());
        assert!(session.generation() > edited);

        session.reset().unwrap();
        assert_eq!(session.original_generation(), Some(loaded));
    }

    #[test]
    fn test_load_replaces_history_but_keeps_colors() {
        let mut session = session_with(grid([RED, GREEN, GREEN, BLUE]));
        session.set_selected_color(Some(GREEN));
        session.set_new_color(Some(BLACK));
        session.substitute().unwrap();

        let next = RgbImage::from_pixel(1, 1, Rgb([9, 9, 9]));
        session.load_image(next.clone(), Some(PathBuf::from("next.png")));

        assert_eq!(session.image(), Some(&next));
        assert_eq!(session.original(), Some(&next));
        assert_eq!(session.history_position(), Some((0, 1)));
        assert_eq!(session.source_path(), Some(Path::new("next.png")));
        assert_eq!(session.selected_color(), Some(GREEN));
    }

    #[test]
    fn test_count_matches_and_suggestions() {
        let mut session = session_with(grid([RED, GREEN, GREEN, BLUE]));
        assert_eq!(session.count_matches(GREEN), 2);
        assert!(matches!(
            session.suggestions(),
            Err(SessionError::NoSelectedColor)
        ));

        session.set_selected_color(Some(Rgb8::new(200, 0, 0)));
        assert_eq!(
            session.suggestions().unwrap(),
            ColorProcessor::suggest(Rgb8::new(200, 0, 0))
        );
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edited.png");
        let mut session = session_with(grid([RED, GREEN, GREEN, BLUE]));
        session.substitute_colors(GREEN, BLACK).unwrap();
        assert_eq!(session.save(&path).unwrap(), ExportFormat::Png);

        let mut reloaded = RecolorSession::new();
        reloaded.load(&path).unwrap();
        assert_eq!(reloaded.image(), session.image());
        assert_eq!(reloaded.source_path(), Some(path.as_path()));
    }
}
