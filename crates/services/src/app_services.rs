use std::sync::Arc;

use showcase_core::model::SceneAssets;

use crate::config::ShowcaseConfig;
use crate::contact_service::ContactService;
use crate::email::{EmailDelivery, EmailJsClient};

/// Assembles app-facing services from configuration.
///
/// The scene provider is not part of this: it belongs to the UI thread and is
/// supplied by the UI layer.
#[derive(Clone)]
pub struct AppServices {
    contact: Arc<ContactService>,
    assets: SceneAssets,
    clicks_to_unlock: u32,
}

impl AppServices {
    /// Build services that deliver through EmailJS.
    #[must_use]
    pub fn from_config(config: &ShowcaseConfig) -> Self {
        let client = EmailJsClient::new(&config.email);
        if !client.enabled() {
            tracing::warn!("no EmailJS public key configured; contact submissions will fail");
        }
        Self::with_delivery(config, Arc::new(client))
    }

    /// Build services around any delivery implementation.
    #[must_use]
    pub fn with_delivery(config: &ShowcaseConfig, delivery: Arc<dyn EmailDelivery>) -> Self {
        let contact = Arc::new(ContactService::new(
            delivery,
            config.email.service_id.clone(),
            config.email.template_id.clone(),
        ));
        Self {
            contact,
            assets: config.assets.clone(),
            clicks_to_unlock: config.clicks_to_unlock,
        }
    }

    #[must_use]
    pub fn contact(&self) -> Arc<ContactService> {
        Arc::clone(&self.contact)
    }

    #[must_use]
    pub fn assets(&self) -> &SceneAssets {
        &self.assets
    }

    #[must_use]
    pub fn clicks_to_unlock(&self) -> u32 {
        self.clicks_to_unlock
    }
}
