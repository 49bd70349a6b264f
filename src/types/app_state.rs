use std::path::PathBuf;

use super::{color::Rgb8, preferences::UserPreferences, view::ViewTransform};
use crate::error::{ErrorKind, SessionError};
use crate::session::RecolorSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum AppearanceMode {
    #[default]
    System,
    Light,
    Dark,
}

impl AppearanceMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            AppearanceMode::System => "System",
            AppearanceMode::Light => "Light",
            AppearanceMode::Dark => "Dark",
        }
    }

    pub fn all() -> &'static [AppearanceMode] {
        &[
            AppearanceMode::System,
            AppearanceMode::Light,
            AppearanceMode::Dark,
        ]
    }
}

/// Actions posted by the UI and applied to the session by the app once per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum AppStateRequest {
    LoadImage { path: PathBuf },
    SaveImage { path: PathBuf },
    ResetImage,
    PickPixel { x: u32, y: u32 },
    SetNewColor { color: Rgb8 },
    ClearColors,
    SuggestColors,
    Substitute,
    Undo,
    Redo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub level: MessageLevel,
    pub title: String,
    pub text: String,
}

pub struct AppState {
    pub session: RecolorSession,

    // View Settings
    pub view: ViewTransform,
    pub preferences: UserPreferences,
    last_preferences: UserPreferences,

    // Color selection
    pub picker_armed: bool,
    pub suggestions: Option<[Rgb8; 3]>,

    // Feedback
    pub status: String,
    pub message: Option<Message>,

    pub pending_requests: Vec<AppStateRequest>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_preferences(UserPreferences::load())
    }
}

impl AppState {
    pub fn with_preferences(preferences: UserPreferences) -> Self {
        Self {
            session: RecolorSession::new(),

            view: ViewTransform::default(),
            preferences: preferences.clone(),
            last_preferences: preferences,

            picker_armed: false,
            suggestions: None,

            status: "Ready".to_string(),
            message: None,

            pending_requests: Vec::new(),
        }
    }

    pub fn request(&mut self, request: AppStateRequest) {
        self.pending_requests.push(request);
    }

    pub fn show_error(&mut self, error: &SessionError) {
        match error.kind() {
            ErrorKind::Io => log::error!("{error}"),
            ErrorKind::Precondition => log::warn!("{error}"),
        }
        self.message = Some(Message {
            level: MessageLevel::Error,
            title: "Error".to_string(),
            text: error.to_string(),
        });
    }

    pub fn show_info(&mut self, text: impl Into<String>) {
        self.message = Some(Message {
            level: MessageLevel::Info,
            title: "Info".to_string(),
            text: text.into(),
        });
    }

    pub fn check_and_save_preferences(&mut self) {
        if self.preferences != self.last_preferences {
            self.last_preferences = self.preferences.clone();
            if let Err(e) = self.preferences.save() {
                log::warn!("Failed to save preferences: {e}");
            }
        }
    }

    /// A click on the side-by-side original while picking: keep the picker armed.
    pub fn reject_original_pick(&mut self) {
        self.status = "Colors can only be picked from the current image.".to_string();
    }

    pub fn zoom_status(&self) -> String {
        format!("🔍 Zoom: {:.1}x", self.view.zoom)
    }
}
