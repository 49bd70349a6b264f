use crate::error::SessionError;
use crate::types::ExportFormat;
use image::RgbImage;
use std::path::Path;

/// Decodes `path` into 8-bit RGB. Alpha, if any, is dropped.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, SessionError> {
    let img = image::open(path).map_err(|source| SessionError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgb8())
}

/// Encodes `image` with the format implied by the extension of `path`.
pub fn save_rgb_image(path: &Path, image: &RgbImage) -> Result<ExportFormat, SessionError> {
    let format = ExportFormat::from_path(path).ok_or_else(|| SessionError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    image
        .save_with_format(path, format.image_format())
        .map_err(|source| SessionError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!(
        "{} image exported successfully to: {}",
        format.display_name(),
        path.display()
    );
    Ok(format)
}

/// `<stem>_recolored.<ext>` next to `source`, or `recolored.<ext>` without one.
pub fn default_output_name(source: Option<&Path>, format: ExportFormat) -> String {
    match source.and_then(|path| path.file_stem()) {
        Some(stem) => format!("{}_recolored.{}", stem.to_string_lossy(), format.extension()),
        None => format!("recolored.{}", format.extension()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use image::Rgb;

    fn sample_image() -> RgbImage {
        RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8 * 80, y as u8 * 120, 33]))
    }

    #[test]
    fn test_png_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.png");
        let image = sample_image();

        assert_eq!(save_rgb_image(&path, &image).unwrap(), ExportFormat::Png);
        assert_eq!(load_rgb_image(&path).unwrap(), image);
    }

    #[test]
    fn test_jpeg_save_keeps_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lossy.jpg");
        save_rgb_image(&path, &sample_image()).unwrap();
        assert_eq!(load_rgb_image(&path).unwrap().dimensions(), (3, 2));
    }

    #[test]
    fn test_unsupported_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.xyz");

        let err = save_rgb_image(&path, &sample_image()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!path.exists());
    }

    #[test]
    fn test_load_garbage_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        let err = load_rgb_image(&path).unwrap_err();
        assert!(matches!(err, SessionError::Decode { .. }));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_default_output_name() {
        assert_eq!(
            default_output_name(Some(Path::new("/tmp/cat.jpeg")), ExportFormat::Png),
            "cat_recolored.png"
        );
        assert_eq!(
            default_output_name(None, ExportFormat::Jpeg),
            "recolored.jpg"
        );
    }
}
