//! Session-scoped page state: the click counter, the gated form and the
//! unlock broadcast that connects them.

use crate::model::{
    FormFieldSet, ProgressAdvance, ProgressConfigError, ProgressTracker, UnlockBroadcast,
    UnlockSignal,
};

/// Instruction shown under the bar while it fills.
pub const INSTRUCTION_IDLE: &str = "Click Me!";
/// Instruction shown once the form is unlocked.
pub const INSTRUCTION_UNLOCKED: &str = "Contact Unlocked!";

/// Cosmetic work the scene provider should do after an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    /// Replace the idle model with the celebration model.
    ShowCelebration,
}

/// What one interaction did to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionOutcome {
    pub advance: ProgressAdvance,
    /// Progress after the interaction, in `[0, 100]`.
    pub progress: f64,
    pub scene_request: Option<SceneRequest>,
}

impl InteractionOutcome {
    #[must_use]
    pub fn unlocked_now(&self) -> bool {
        self.advance.is_saturating()
    }
}

/// One page load worth of state. Never persisted, never reset.
#[derive(Debug)]
pub struct PageSession {
    progress: ProgressTracker,
    form: FormFieldSet,
    unlock: UnlockBroadcast,
}

impl PageSession {
    /// # Errors
    ///
    /// Returns `ProgressConfigError::ZeroClicks` if `clicks_to_unlock` is zero.
    pub fn new(clicks_to_unlock: u32) -> Result<Self, ProgressConfigError> {
        Ok(Self {
            progress: ProgressTracker::new(clicks_to_unlock)?,
            form: FormFieldSet::new(),
            unlock: UnlockBroadcast::new(),
        })
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    #[must_use]
    pub fn form(&self) -> &FormFieldSet {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormFieldSet {
        &mut self.form
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.form.is_enabled()
    }

    #[must_use]
    pub fn instruction(&self) -> &'static str {
        if self.progress.is_saturated() {
            INSTRUCTION_UNLOCKED
        } else {
            INSTRUCTION_IDLE
        }
    }

    /// Registers an extra unlock listener next to the form gatekeeper.
    pub fn on_unlock(&mut self, listener: impl FnMut(UnlockSignal) + 'static) {
        self.unlock.subscribe(listener);
    }

    /// Feeds one interaction event through the progress machine.
    ///
    /// On the saturating interaction the form is unlocked directly, every
    /// subscriber is notified, and the outcome asks for the celebration model.
    pub fn register_interaction(&mut self) -> InteractionOutcome {
        let advance = self.progress.advance();
        let scene_request = if advance.is_saturating() {
            self.deliver_unlock(UnlockSignal::unlocked());
            Some(SceneRequest::ShowCelebration)
        } else {
            None
        };

        InteractionOutcome {
            advance,
            progress: self.progress.value(),
            scene_request,
        }
    }

    /// Hands an unlock signal to the gatekeeper and the subscribers.
    ///
    /// Safe to call repeatedly; only the first unlocked signal has an effect.
    pub fn deliver_unlock(&mut self, signal: UnlockSignal) {
        self.form.receive(signal);
        if signal.unlocked {
            self.unlock.publish(signal);
        }
    }
}

impl Default for PageSession {
    fn default() -> Self {
        Self {
            progress: ProgressTracker::default(),
            form: FormFieldSet::new(),
            unlock: UnlockBroadcast::new(),
        }
    }
}
