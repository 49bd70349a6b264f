pub mod app_state;
pub mod color;
pub mod export;
pub mod preferences;
pub mod texture;
pub mod view;

// Re-export all public types for convenience
pub use app_state::{AppState, AppStateRequest};
pub use color::Rgb8;
pub use export::ExportFormat;
pub use texture::ImageTexture;
