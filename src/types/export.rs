use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
}

impl ExportFormat {
    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Jpeg => "JPEG",
            ExportFormat::Bmp => "BMP",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Bmp => "bmp",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ExportFormat::Png => &["png"],
            ExportFormat::Jpeg => &["jpg", "jpeg"],
            ExportFormat::Bmp => &["bmp"],
        }
    }

    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            ExportFormat::Png => image::ImageFormat::Png,
            ExportFormat::Jpeg => image::ImageFormat::Jpeg,
            ExportFormat::Bmp => image::ImageFormat::Bmp,
        }
    }

    /// Format implied by the extension of `path`, case-insensitive.
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|format| format.extensions().contains(&extension.as_str()))
    }

    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Bmp]
    }
}
