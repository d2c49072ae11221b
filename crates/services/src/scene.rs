use std::sync::Arc;

use async_trait::async_trait;

use showcase_core::model::{
    AssetPath, LoadProgress, LoadingOverlay, SceneAssets, SceneSetup, Viewport,
};

use crate::error::AssetLoadError;

/// Contract for the external 3D scene library.
///
/// Implementations live on the UI thread, hence `?Send`. Frame rendering runs
/// inside the provider's own animation loop once the scene is mounted.
#[async_trait(?Send)]
pub trait SceneProvider {
    /// Fetch every asset up front, reporting item-level progress.
    ///
    /// # Errors
    ///
    /// Returns `AssetLoadError` for the first asset that fails.
    async fn preload(
        &self,
        assets: &[AssetPath],
        on_progress: &mut dyn FnMut(LoadProgress),
    ) -> Result<(), AssetLoadError>;

    /// Build camera, lights, compositor and show `setup.initial_model`.
    ///
    /// # Errors
    ///
    /// Returns `AssetLoadError` if the initial model cannot be shown.
    async fn mount(&self, setup: &SceneSetup) -> Result<(), AssetLoadError>;

    /// Replace the current model with `asset`.
    ///
    /// # Errors
    ///
    /// Returns `AssetLoadError` if the asset cannot be loaded.
    async fn show_asset(&self, asset: &AssetPath) -> Result<(), AssetLoadError>;

    async fn resize(&self, viewport: Viewport);

    /// Calls `on_hit` for every pointer-down that hits the scene graph.
    ///
    /// Returns when the provider shuts down.
    async fn watch_interactions(&self, on_hit: &mut dyn FnMut());
}

/// Drives the scene provider through preload, mount and the unlock swap.
#[derive(Clone)]
pub struct SceneDirector {
    scene: Arc<dyn SceneProvider>,
    assets: SceneAssets,
}

impl SceneDirector {
    #[must_use]
    pub fn new(scene: Arc<dyn SceneProvider>, assets: SceneAssets) -> Self {
        Self { scene, assets }
    }

    #[must_use]
    pub fn assets(&self) -> &SceneAssets {
        &self.assets
    }

    /// Preload every model, mirroring progress into overlay states.
    ///
    /// Ends with `LoadingOverlay::FadingOut` on success or
    /// `LoadingOverlay::Failed` on the first error. Failures are not retried.
    ///
    /// # Errors
    ///
    /// Returns the provider's `AssetLoadError` after logging it.
    pub async fn preload(
        &self,
        on_overlay: &mut dyn FnMut(LoadingOverlay),
    ) -> Result<(), AssetLoadError> {
        let list = self.assets.preload_list();
        let mut overlay = LoadingOverlay::default();
        on_overlay(overlay);

        let result = self
            .scene
            .preload(&list, &mut |progress| {
                tracing::debug!(loaded = progress.loaded, total = progress.total, "preload progress");
                overlay = overlay.with_progress(progress);
                on_overlay(overlay);
            })
            .await;

        match result {
            Ok(()) => {
                on_overlay(overlay.finish());
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "asset preload failed");
                on_overlay(overlay.fail());
                Err(err)
            }
        }
    }

    /// Build the stage with the idle model.
    ///
    /// # Errors
    ///
    /// Returns the provider's `AssetLoadError` after logging it.
    pub async fn mount(&self) -> Result<(), AssetLoadError> {
        let setup = SceneSetup::with_initial_model(self.assets.idle.clone());
        self.scene.mount(&setup).await.inspect_err(|err| {
            tracing::error!(error = %err, "scene mount failed");
        })
    }

    /// Swap in the celebration model. Failures are logged and swallowed.
    pub async fn celebrate(&self) {
        if let Err(err) = self.scene.show_asset(&self.assets.celebration).await {
            tracing::error!(error = %err, "celebration model failed to load");
        }
    }

    pub async fn resize(&self, viewport: Viewport) {
        self.scene.resize(viewport).await;
    }

    pub async fn watch_interactions(&self, on_hit: &mut dyn FnMut()) {
        self.scene.watch_interactions(on_hit).await;
    }
}
