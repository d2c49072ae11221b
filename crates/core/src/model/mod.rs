mod form;
mod ids;
mod loading;
mod message;
mod progress;
mod scene;
mod unlock;

pub use ids::{ParseIdError, PublicKey, ServiceId, TemplateId};

pub use form::{ContactField, FieldState, FormFieldSet};
pub use loading::{LOADING_ERROR_TEXT, LoadProgress, LoadingOverlay, OVERLAY_FADE_MILLIS};
pub use message::ContactMessage;
pub use progress::{
    DEFAULT_CLICKS_TO_UNLOCK, PROGRESS_MAX, ProgressAdvance, ProgressConfigError, ProgressPhase,
    ProgressTracker,
};
pub use scene::{
    AssetPath, CameraSetup, DEFAULT_CELEBRATION_MODEL, DEFAULT_IDLE_MODEL, LightSetup,
    ModelPlacement, SceneAssets, SceneSetup, Viewport,
};
pub use unlock::{UnlockBroadcast, UnlockSignal};
