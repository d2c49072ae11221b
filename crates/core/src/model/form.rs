use crate::model::message::ContactMessage;
use crate::model::unlock::UnlockSignal;

//
// ─── FIELDS ────────────────────────────────────────────────────────────────────
//

/// The three inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// DOM id of the input element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    /// Whether the field is rendered as a multi-line text area.
    #[must_use]
    pub fn is_multiline(self) -> bool {
        matches!(self, ContactField::Message)
    }
}

/// Enabled/disabled lifecycle shared by every field and the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Disabled,
    Enabled,
}

//
// ─── FIELD SET ─────────────────────────────────────────────────────────────────
//

/// Contact inputs gated behind the unlock signal.
///
/// Created disabled. The only way to enable it is [`FormFieldSet::receive`]
/// with an unlocked signal; there is no way back. Edits and hover are dropped
/// while disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFieldSet {
    state: FieldState,
    name: String,
    email: String,
    message: String,
    hovered: Option<ContactField>,
}

impl FormFieldSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> FieldState {
        self.state
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state == FieldState::Enabled
    }

    /// Applies an unlock signal. Returns `true` only on the transition to enabled.
    pub fn receive(&mut self, signal: UnlockSignal) -> bool {
        if !signal.unlocked || self.is_enabled() {
            return false;
        }
        self.state = FieldState::Enabled;
        true
    }

    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Stores user input. Returns `false` and keeps the old value while disabled.
    pub fn set_value(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
        true
    }

    /// Pointer-enter highlight. Only active once the form is enabled.
    pub fn hover(&mut self, field: ContactField) {
        if self.is_enabled() {
            self.hovered = Some(field);
        }
    }

    /// Pointer-leave clears the highlight for `field`.
    pub fn leave(&mut self, field: ContactField) {
        if self.hovered == Some(field) {
            self.hovered = None;
        }
    }

    #[must_use]
    pub fn hovered(&self) -> Option<ContactField> {
        self.hovered
    }

    /// Clears every value. The enabled state is kept.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|field| self.value(*field).is_empty())
    }

    /// Snapshot of the current values as a provider payload.
    #[must_use]
    pub fn message(&self) -> ContactMessage {
        ContactMessage::new(&self.name, &self.email, &self.message)
    }
}
