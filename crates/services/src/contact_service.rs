use std::sync::Arc;

use showcase_core::model::{ContactMessage, ServiceId, TemplateId};

use crate::email::{DeliveryReceipt, EmailDelivery};
use crate::error::DeliveryError;

/// Sends contact-form submissions through the configured email provider.
///
/// One attempt per call. Retrying is left to the user.
#[derive(Clone)]
pub struct ContactService {
    delivery: Arc<dyn EmailDelivery>,
    service_id: ServiceId,
    template_id: TemplateId,
}

impl ContactService {
    #[must_use]
    pub fn new(
        delivery: Arc<dyn EmailDelivery>,
        service_id: ServiceId,
        template_id: TemplateId,
    ) -> Self {
        Self {
            delivery,
            service_id,
            template_id,
        }
    }

    /// Deliver a contact message.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError` when the provider rejects the message or is unreachable.
    pub async fn submit(&self, message: &ContactMessage) -> Result<DeliveryReceipt, DeliveryError> {
        match self
            .delivery
            .send(&self.service_id, &self.template_id, message)
            .await
        {
            Ok(receipt) => {
                tracing::info!(
                    service_id = %self.service_id,
                    template_id = %self.template_id,
                    status = receipt.status,
                    text = %receipt.text,
                    "contact message sent"
                );
                Ok(receipt)
            }
            Err(err) => {
                tracing::error!(
                    service_id = %self.service_id,
                    template_id = %self.template_id,
                    error = %err,
                    "contact message failed"
                );
                Err(err)
            }
        }
    }
}
