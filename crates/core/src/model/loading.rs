/// Text shown once any preload item fails.
pub const LOADING_ERROR_TEXT: &str = "Error loading assets";

/// Delay between the overlay starting to fade and being removed.
pub const OVERLAY_FADE_MILLIS: u64 = 500;

/// Item-level progress reported by the asset provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded: u32,
    pub total: u32,
}

impl LoadProgress {
    #[must_use]
    pub const fn new(loaded: u32, total: u32) -> Self {
        Self { loaded, total }
    }

    /// Rounded completion percentage. An empty batch counts as complete.
    #[must_use]
    pub fn percent(self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let ratio = f64::from(self.loaded.min(self.total)) / f64::from(self.total);
        // `ratio` is clamped to [0, 1] above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (ratio * 100.0).round() as u8;
        percent
    }
}

/// State of the full-screen preload overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingOverlay {
    Loading { percent: u8 },
    /// Everything loaded; the overlay is fading out.
    FadingOut,
    Hidden,
    Failed,
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        LoadingOverlay::Loading { percent: 0 }
    }
}

impl LoadingOverlay {
    /// Applies a progress report. Ignored once the overlay has failed or finished.
    #[must_use]
    pub fn with_progress(self, progress: LoadProgress) -> Self {
        match self {
            LoadingOverlay::Loading { .. } => LoadingOverlay::Loading {
                percent: progress.percent(),
            },
            other => other,
        }
    }

    /// All items loaded: start fading. A failure stays visible.
    #[must_use]
    pub fn finish(self) -> Self {
        match self {
            LoadingOverlay::Failed => LoadingOverlay::Failed,
            _ => LoadingOverlay::FadingOut,
        }
    }

    #[must_use]
    pub fn fail(self) -> Self {
        LoadingOverlay::Failed
    }

    /// Fade finished: remove the overlay.
    #[must_use]
    pub fn hide(self) -> Self {
        match self {
            LoadingOverlay::FadingOut => LoadingOverlay::Hidden,
            other => other,
        }
    }

    #[must_use]
    pub fn text(self) -> String {
        match self {
            LoadingOverlay::Loading { percent } => format!("Loading... {percent}%"),
            LoadingOverlay::FadingOut | LoadingOverlay::Hidden => "Loading... 100%".to_string(),
            LoadingOverlay::Failed => LOADING_ERROR_TEXT.to_string(),
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, LoadingOverlay::Hidden)
    }
}
