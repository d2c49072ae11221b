use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use showcase_core::model::{ContactMessage, PublicKey, ServiceId, TemplateId};

use crate::config::EmailJsConfig;
use crate::error::DeliveryError;

/// What the provider said about an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub text: String,
}

/// Contract for the external email-sending provider.
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    /// Hand one message to the provider.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError` if the provider rejects the message or cannot be reached.
    async fn send(
        &self,
        service_id: &ServiceId,
        template_id: &TemplateId,
        payload: &ContactMessage,
    ) -> Result<DeliveryReceipt, DeliveryError>;
}

/// EmailJS REST client (`POST {base}/email/send`).
#[derive(Clone)]
pub struct EmailJsClient {
    client: Client,
    base_url: String,
    public_key: Option<PublicKey>,
}

impl EmailJsClient {
    #[must_use]
    pub fn new(config: &EmailJsConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            public_key: config.public_key.clone(),
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.public_key.is_some()
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/email/send", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailDelivery for EmailJsClient {
    async fn send(
        &self,
        service_id: &ServiceId,
        template_id: &TemplateId,
        payload: &ContactMessage,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let public_key = self.public_key.as_ref().ok_or(DeliveryError::Disabled)?;
        let body = SendRequest::new(service_id, template_id, public_key, payload);

        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(DeliveryError::HttpStatus { status, body: text });
        }

        Ok(DeliveryReceipt {
            status: status.as_u16(),
            text,
        })
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

impl<'a> SendRequest<'a> {
    fn new(
        service_id: &'a ServiceId,
        template_id: &'a TemplateId,
        public_key: &'a PublicKey,
        payload: &'a ContactMessage,
    ) -> Self {
        Self {
            service_id: service_id.as_str(),
            template_id: template_id.as_str(),
            user_id: public_key.as_str(),
            template_params: payload,
        }
    }
}
