use dioxus::prelude::*;
use showcase_core::SceneRequest;
use showcase_core::model::{ContactField, Viewport};

use crate::bridge::show_alert;
use crate::views::ViewError;

use super::state::{ShowcaseServices, ShowcaseState, SubmitState};

#[derive(Clone, Debug, PartialEq)]
pub enum ShowcaseIntent {
    /// A pointer-down that hit the scene.
    Interact,
    UpdateField(ContactField, String),
    Hover(ContactField),
    Leave(ContactField),
    Submit,
    Resize(Viewport),
}

#[derive(Clone, Copy)]
pub struct ShowcaseDispatcher {
    pub dispatch: Callback<ShowcaseIntent>,
}

pub fn use_showcase_dispatcher(
    state: &ShowcaseState,
    services: &ShowcaseServices,
) -> ShowcaseDispatcher {
    let state = *state;
    let services = services.clone();

    let dispatch = use_callback(move |intent: ShowcaseIntent| {
        let mut session = state.session;
        match intent {
            ShowcaseIntent::Interact => {
                let outcome = session.write().register_interaction();
                tracing::debug!(progress = outcome.progress, "interaction registered");
                if outcome.scene_request == Some(SceneRequest::ShowCelebration) {
                    let director = services.director.clone();
                    spawn(async move {
                        director.celebrate().await;
                    });
                }
            }
            ShowcaseIntent::UpdateField(field, value) => {
                let changed = session.write().form_mut().set_value(field, value);
                let mut submit_state = state.submit_state;
                let settled =
                    matches!(*submit_state.peek(), SubmitState::Sent | SubmitState::Error(_));
                if changed && settled {
                    submit_state.set(SubmitState::Idle);
                }
            }
            ShowcaseIntent::Hover(field) => {
                session.write().form_mut().hover(field);
            }
            ShowcaseIntent::Leave(field) => {
                session.write().form_mut().leave(field);
            }
            ShowcaseIntent::Submit => submit(state, &services),
            ShowcaseIntent::Resize(viewport) => {
                let director = services.director.clone();
                spawn(async move {
                    director.resize(viewport).await;
                });
            }
        }
    });

    ShowcaseDispatcher { dispatch }
}

fn submit(state: ShowcaseState, services: &ShowcaseServices) {
    let mut session = state.session;
    let mut submit_state = state.submit_state;
    if !session.read().is_unlocked() || submit_state.peek().is_sending() {
        return;
    }

    let message = session.read().form().message();
    submit_state.set(SubmitState::Sending);
    let contact = services.contact.clone();
    spawn(async move {
        let outcome = match contact.submit(&message).await {
            Ok(_) => {
                session.write().form_mut().reset();
                SubmitState::Sent
            }
            Err(err) => SubmitState::Error(ViewError::from(&err)),
        };
        submit_state.set(outcome);
        if let Some(ack) = outcome.acknowledgement() {
            show_alert(ack.message()).await;
        }
    });
}
