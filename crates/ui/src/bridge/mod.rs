//! three.js scene provider running inside the page's webview.
//!
//! Every call evaluates a script in the page; long-running scripts report back
//! through the eval channel as [`BridgeEvent`] messages.

mod scripts;

use async_trait::async_trait;
use dioxus::document::eval;
use serde::Deserialize;

use services::{AssetLoadError, SceneProvider};
use showcase_core::model::{AssetPath, LoadProgress, SceneSetup, Viewport};

/// DOM id of the element the renderer canvas is attached to.
pub const SCENE_HOST_ID: &str = "scene-root";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum BridgeEvent {
    Progress { loaded: u32, total: u32 },
    Done,
    Failed { path: String, cause: String },
    Hit,
}

impl BridgeEvent {
    fn into_result(self) -> Result<(), AssetLoadError> {
        match self {
            BridgeEvent::Failed { path, cause } => Err(AssetLoadError::Fetch {
                path: AssetPath::new(path),
                cause,
            }),
            _ => Ok(()),
        }
    }
}

/// Blocking acknowledgement dialog in the page.
pub async fn show_alert(message: &str) {
    if let Err(err) = eval(&scripts::alert_script(message)).await {
        tracing::debug!(error = ?err, "alert dialog unavailable");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WebviewScene;

impl WebviewScene {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl SceneProvider for WebviewScene {
    async fn preload(
        &self,
        assets: &[AssetPath],
        on_progress: &mut dyn FnMut(LoadProgress),
    ) -> Result<(), AssetLoadError> {
        let mut channel = eval(&scripts::preload_script(assets));
        loop {
            match channel.recv::<BridgeEvent>().await {
                Ok(BridgeEvent::Progress { loaded, total }) => {
                    on_progress(LoadProgress::new(loaded, total));
                }
                Ok(BridgeEvent::Hit) => {}
                Ok(event) => return event.into_result(),
                Err(_) => return Err(AssetLoadError::BridgeClosed),
            }
        }
    }

    async fn mount(&self, setup: &SceneSetup) -> Result<(), AssetLoadError> {
        eval(&scripts::mount_script(SCENE_HOST_ID, setup))
            .join::<BridgeEvent>()
            .await
            .map_err(|_| AssetLoadError::BridgeClosed)?
            .into_result()
    }

    async fn show_asset(&self, asset: &AssetPath) -> Result<(), AssetLoadError> {
        eval(&scripts::show_asset_script(asset))
            .join::<BridgeEvent>()
            .await
            .map_err(|_| AssetLoadError::BridgeClosed)?
            .into_result()
    }

    async fn resize(&self, viewport: Viewport) {
        let _ = eval(&scripts::resize_script(viewport)).await;
    }

    async fn watch_interactions(&self, on_hit: &mut dyn FnMut()) {
        let mut channel = eval(&scripts::interaction_script());
        while let Ok(event) = channel.recv::<BridgeEvent>().await {
            if event == BridgeEvent::Hit {
                on_hit();
            }
        }
        tracing::debug!("interaction channel closed");
    }
}
