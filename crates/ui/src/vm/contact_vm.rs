use showcase_core::model::{ContactField, FormFieldSet};

pub const SENT_MESSAGE: &str = "Your message has been sent successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send the message. Please try again later.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFieldVm {
    pub field: ContactField,
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
    pub disabled: bool,
    pub multiline: bool,
    pub class: &'static str,
}

#[must_use]
pub fn map_contact_fields(form: &FormFieldSet) -> Vec<ContactFieldVm> {
    let hovered = form.hovered();
    ContactField::ALL
        .into_iter()
        .map(|field| ContactFieldVm {
            field,
            id: field.id(),
            label: field.label(),
            value: form.value(field).to_string(),
            disabled: !form.is_enabled(),
            multiline: field.is_multiline(),
            class: if hovered == Some(field) {
                "contact-input contact-input--hover"
            } else {
                "contact-input"
            },
        })
        .collect()
}

/// Outcome shown to the user after a submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acknowledgement {
    Sent,
    Failed,
}

impl Acknowledgement {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Acknowledgement::Sent => SENT_MESSAGE,
            Acknowledgement::Failed => FAILED_MESSAGE,
        }
    }
}

#[must_use]
pub fn submit_label(sending: bool) -> &'static str {
    if sending { "Sending..." } else { "Send" }
}
