use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Decode or encode failure.
    Io,
    /// The operation needs an image or a color that is not there yet.
    Precondition,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to open {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to save {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Unsupported file format: {} (use .png, .jpg or .bmp)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("No image loaded. Please load an image first.")]
    NoImage,
    #[error("Please select a color from the image first.")]
    NoSelectedColor,
    #[error("Please choose a new color first.")]
    NoNewColor,
    #[error("Pixel ({x}, {y}) is outside the {width}×{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Decode { .. }
            | SessionError::Encode { .. }
            | SessionError::UnsupportedFormat { .. } => ErrorKind::Io,
            SessionError::NoImage
            | SessionError::NoSelectedColor
            | SessionError::NoNewColor
            | SessionError::PixelOutOfBounds { .. } => ErrorKind::Precondition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(SessionError::NoImage.kind(), ErrorKind::Precondition);
        assert_eq!(SessionError::NoNewColor.kind(), ErrorKind::Precondition);
        assert_eq!(
            SessionError::UnsupportedFormat {
                path: PathBuf::from("out.gifx")
            }
            .kind(),
            ErrorKind::Io
        );
    }

    #[test]
    fn test_error_message_names_path() {
        let err = SessionError::UnsupportedFormat {
            path: PathBuf::from("picture.xyz"),
        };
        assert!(err.to_string().contains("picture.xyz"));
    }
}
