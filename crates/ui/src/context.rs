use std::sync::Arc;

use services::{ContactService, SceneDirector, SceneProvider};
use showcase_core::model::SceneAssets;

pub trait UiApp: Send + Sync {
    fn clicks_to_unlock(&self) -> u32;
    fn scene_assets(&self) -> SceneAssets;

    fn contact_service(&self) -> Arc<ContactService>;

    /// Scene providers are bound to the UI thread, so one is created per call
    /// from inside the running page instead of being stored here.
    fn scene_provider(&self) -> Arc<dyn SceneProvider>;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    clicks_to_unlock: u32,
    scene_assets: SceneAssets,
    contact_service: Arc<ContactService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            clicks_to_unlock: app.clicks_to_unlock(),
            scene_assets: app.scene_assets(),
            contact_service: app.contact_service(),
        }
    }

    #[must_use]
    pub fn clicks_to_unlock(&self) -> u32 {
        self.clicks_to_unlock
    }

    #[must_use]
    pub fn scene_assets(&self) -> &SceneAssets {
        &self.scene_assets
    }

    #[must_use]
    pub fn contact_service(&self) -> Arc<ContactService> {
        Arc::clone(&self.contact_service)
    }

    /// Builds a director around a fresh provider for the current page.
    #[must_use]
    pub fn scene_director(&self) -> SceneDirector {
        SceneDirector::new(self.app.scene_provider(), self.scene_assets.clone())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
