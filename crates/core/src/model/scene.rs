use std::fmt;

use serde::{Deserialize, Serialize};

/// Default path of the model shown while the bar fills.
pub const DEFAULT_IDLE_MODEL: &str = "/Models/dogidle.glb";
/// Default path of the model swapped in once the form unlocks.
pub const DEFAULT_CELEBRATION_MODEL: &str = "/Models/dogjump.glb";

/// URL or path of a loadable scene asset.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetPath(String);

impl AssetPath {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetPath({})", self.0)
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two models the page swaps between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneAssets {
    pub idle: AssetPath,
    pub celebration: AssetPath,
}

impl SceneAssets {
    #[must_use]
    pub fn new(idle: AssetPath, celebration: AssetPath) -> Self {
        Self { idle, celebration }
    }

    /// Every asset to fetch before the scene is shown, in load order.
    #[must_use]
    pub fn preload_list(&self) -> Vec<AssetPath> {
        vec![self.idle.clone(), self.celebration.clone()]
    }
}

impl Default for SceneAssets {
    fn default() -> Self {
        Self::new(
            AssetPath::new(DEFAULT_IDLE_MODEL),
            AssetPath::new(DEFAULT_CELEBRATION_MODEL),
        )
    }
}

/// Size of the render surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSetup {
    pub fov: f64,
    pub near: f64,
    pub far: f64,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSetup {
    pub ambient_color: u32,
    pub ambient_intensity: f64,
    pub sky_color: u32,
    pub ground_color: u32,
    pub hemisphere_intensity: f64,
}

/// Placement applied to every loaded model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPlacement {
    pub scale: f64,
    pub position: [f64; 3],
    pub rotation_y: f64,
}

/// Everything the scene provider needs to build the stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSetup {
    pub background: String,
    pub camera: CameraSetup,
    pub lights: LightSetup,
    pub ground_size: f64,
    pub placement: ModelPlacement,
    pub initial_model: AssetPath,
}

impl SceneSetup {
    #[must_use]
    pub fn with_initial_model(initial_model: AssetPath) -> Self {
        Self {
            background: "#F8F8F8".to_string(),
            camera: CameraSetup {
                fov: 75.0,
                near: 0.1,
                far: 1000.0,
                distance: 20.0,
            },
            lights: LightSetup {
                ambient_color: 0x0040_4040,
                ambient_intensity: 1.0,
                sky_color: 0x00ee_eeee,
                ground_color: 0x0044_4444,
                hemisphere_intensity: 9.5,
            },
            ground_size: 100.0,
            placement: ModelPlacement {
                scale: 0.21,
                position: [-13.0, -1.0, 0.0],
                rotation_y: std::f64::consts::PI / 2.25,
            },
            initial_model,
        }
    }
}
