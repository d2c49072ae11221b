use std::sync::Arc;

use dioxus::prelude::*;
use services::{ContactService, SceneDirector};
use showcase_core::PageSession;
use showcase_core::model::LoadingOverlay;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::Acknowledgement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending,
    Sent,
    Error(ViewError),
}

impl SubmitState {
    #[must_use]
    pub fn is_sending(self) -> bool {
        self == SubmitState::Sending
    }

    #[must_use]
    pub fn acknowledgement(self) -> Option<Acknowledgement> {
        match self {
            SubmitState::Sent => Some(Acknowledgement::Sent),
            SubmitState::Error(ViewError::Delivery) => Some(Acknowledgement::Failed),
            SubmitState::Idle | SubmitState::Sending | SubmitState::Error(_) => None,
        }
    }

    /// Status line under the form.
    #[must_use]
    pub fn notice(self) -> Option<&'static str> {
        match self {
            SubmitState::Sent => Some(Acknowledgement::Sent.message()),
            SubmitState::Error(err) => Some(err.message()),
            SubmitState::Idle | SubmitState::Sending => None,
        }
    }
}

#[derive(Clone)]
pub struct ShowcaseServices {
    pub contact: Arc<ContactService>,
    pub director: SceneDirector,
}

impl ShowcaseServices {
    #[must_use]
    pub fn from_context(ctx: &AppContext) -> Self {
        Self {
            contact: ctx.contact_service(),
            director: ctx.scene_director(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ShowcaseState {
    pub session: Signal<PageSession>,
    pub overlay: Signal<LoadingOverlay>,
    pub submit_state: Signal<SubmitState>,
    /// Preload or mount failure of the scene.
    pub scene_error: Signal<Option<ViewError>>,
}

/// One session per page load; a zero click count falls back to the default.
pub fn use_showcase_state(clicks_to_unlock: u32) -> ShowcaseState {
    let session = use_signal(move || {
        let mut session = PageSession::new(clicks_to_unlock).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "invalid click count, using default");
            PageSession::default()
        });
        session.on_unlock(|signal| {
            tracing::info!(unlocked = signal.unlocked, "contact form unlocked");
        });
        session
    });

    ShowcaseState {
        session,
        overlay: use_signal(LoadingOverlay::default),
        submit_state: use_signal(|| SubmitState::Idle),
        scene_error: use_signal(|| None),
    }
}
