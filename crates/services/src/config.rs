use std::env;

use showcase_core::model::{
    AssetPath, DEFAULT_CLICKS_TO_UNLOCK, ProgressTracker, PublicKey, SceneAssets, ServiceId,
    TemplateId,
};

use crate::error::ConfigError;

pub const DEFAULT_EMAILJS_BASE_URL: &str = "https://api.emailjs.com/api/v1.0";
pub const DEFAULT_SERVICE_ID: &str = "service_p9ddpnh";
pub const DEFAULT_TEMPLATE_ID: &str = "template_29u5xyj";

pub const ENV_BASE_URL: &str = "SHOWCASE_EMAILJS_BASE_URL";
pub const ENV_SERVICE_ID: &str = "SHOWCASE_EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "SHOWCASE_EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "SHOWCASE_EMAILJS_PUBLIC_KEY";
pub const ENV_IDLE_MODEL: &str = "SHOWCASE_IDLE_MODEL";
pub const ENV_CELEBRATION_MODEL: &str = "SHOWCASE_CELEBRATION_MODEL";
pub const ENV_CLICKS_TO_UNLOCK: &str = "SHOWCASE_CLICKS_TO_UNLOCK";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub base_url: String,
    pub service_id: ServiceId,
    pub template_id: TemplateId,
    /// Without a key every send fails with `DeliveryError::Disabled`.
    pub public_key: Option<PublicKey>,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EMAILJS_BASE_URL.to_string(),
            service_id: ServiceId::new(DEFAULT_SERVICE_ID),
            template_id: TemplateId::new(DEFAULT_TEMPLATE_ID),
            public_key: None,
        }
    }
}

/// Everything the page needs that can differ between deployments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowcaseConfig {
    pub email: EmailJsConfig,
    pub assets: SceneAssets,
    pub clicks_to_unlock: u32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            email: EmailJsConfig::default(),
            assets: SceneAssets::default(),
            clicks_to_unlock: DEFAULT_CLICKS_TO_UNLOCK,
        }
    }
}

impl ShowcaseConfig {
    /// Reads `SHOWCASE_*` environment variables on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ShowcaseConfig::from_env`] with an injectable lookup.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(base_url) = get(ENV_BASE_URL) {
            config.email.base_url = base_url.trim().to_string();
        }
        if let Some(raw) = get(ENV_SERVICE_ID) {
            config.email.service_id = raw.parse()?;
        }
        if let Some(raw) = get(ENV_TEMPLATE_ID) {
            config.email.template_id = raw.parse()?;
        }
        if let Some(raw) = get(ENV_PUBLIC_KEY) {
            config.email.public_key = Some(raw.parse()?);
        }
        if let Some(raw) = get(ENV_IDLE_MODEL) {
            config.assets.idle = AssetPath::new(raw.trim());
        }
        if let Some(raw) = get(ENV_CELEBRATION_MODEL) {
            config.assets.celebration = AssetPath::new(raw.trim());
        }
        if let Some(raw) = get(ENV_CLICKS_TO_UNLOCK) {
            config.set_clicks_to_unlock(&raw, ENV_CLICKS_TO_UNLOCK)?;
        }

        Ok(config)
    }

    /// Parses and validates a click count coming from `source`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidNumber` for non-numeric input and
    /// `ConfigError::Progress` for zero.
    pub fn set_clicks_to_unlock(&mut self, raw: &str, source: &'static str) -> Result<(), ConfigError> {
        let clicks: u32 = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            var: source,
            raw: raw.to_string(),
        })?;
        ProgressTracker::new(clicks)?;
        self.clicks_to_unlock = clicks;
        Ok(())
    }
}
