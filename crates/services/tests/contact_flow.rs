use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use showcase_core::model::{ContactField, ContactMessage, ServiceId, TemplateId};
use showcase_core::PageSession;
use services::{AppServices, DeliveryError, DeliveryReceipt, EmailDelivery, ShowcaseConfig};

#[derive(Default)]
struct RecordingDelivery {
    fail: bool,
    sent: Mutex<Vec<(String, String, ContactMessage)>>,
}

#[async_trait]
impl EmailDelivery for RecordingDelivery {
    async fn send(
        &self,
        service_id: &ServiceId,
        template_id: &TemplateId,
        payload: &ContactMessage,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        self.sent.lock().unwrap().push((
            service_id.to_string(),
            template_id.to_string(),
            payload.clone(),
        ));
        if self.fail {
            return Err(DeliveryError::HttpStatus {
                status: reqwest::StatusCode::BAD_REQUEST,
                body: "The user ID is invalid".to_string(),
            });
        }
        Ok(DeliveryReceipt {
            status: 200,
            text: "OK".to_string(),
        })
    }
}

fn unlocked_session() -> PageSession {
    let mut session = PageSession::default();
    for _ in 0..3 {
        session.register_interaction();
    }
    assert!(session.is_unlocked());
    session
}

#[tokio::test]
async fn submission_uses_configured_ids_and_keeps_empty_email() {
    let delivery = Arc::new(RecordingDelivery::default());
    let services = AppServices::with_delivery(&ShowcaseConfig::default(), delivery.clone());

    let mut session = unlocked_session();
    session.form_mut().set_value(ContactField::Name, "Ada");
    session.form_mut().set_value(ContactField::Message, "Hello there");

    let receipt = services
        .contact()
        .submit(&session.form().message())
        .await
        .expect("delivered");
    assert_eq!(receipt.text, "OK");

    let sent = delivery.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (service_id, template_id, payload) = &sent[0];
    assert_eq!(service_id, "service_p9ddpnh");
    assert_eq!(template_id, "template_29u5xyj");
    assert_eq!(payload, &ContactMessage::new("Ada", "", "Hello there"));
}

#[tokio::test]
async fn failed_submission_is_a_single_attempt() {
    let delivery = Arc::new(RecordingDelivery {
        fail: true,
        ..RecordingDelivery::default()
    });
    let services = AppServices::with_delivery(&ShowcaseConfig::default(), delivery.clone());

    let err = services
        .contact()
        .submit(&ContactMessage::new("Ada", "ada@example.com", "Hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, DeliveryError::HttpStatus { .. }));
    assert_eq!(delivery.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn default_services_without_key_fail_as_disabled() {
    let services = AppServices::from_config(&ShowcaseConfig::default());
    assert_eq!(services.clicks_to_unlock(), 3);

    let err = services
        .contact()
        .submit(&ContactMessage::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DeliveryError::Disabled));
}
