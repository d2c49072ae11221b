use std::time::Duration;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use services::SceneDirector;
use showcase_core::model::{OVERLAY_FADE_MILLIS, Viewport};

use crate::bridge::SCENE_HOST_ID;
use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{map_contact_fields, map_loading_overlay, map_progress_bar};

use super::actions::{ShowcaseIntent, use_showcase_dispatcher};
use super::components::{ContactForm, LoadingOverlayView, ProgressPanel};
use super::state::{ShowcaseServices, ShowcaseState, use_showcase_state};

#[component]
pub fn ShowcaseView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = use_hook(|| ShowcaseServices::from_context(&ctx));
    let state = use_showcase_state(ctx.clicks_to_unlock());
    let dispatch = use_showcase_dispatcher(&state, &services).dispatch;

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ShowcaseTestHandles>() {
                handles.register(dispatch, state);
            }
        }
    }

    let director = services.director.clone();
    use_future(move || {
        let director = director.clone();
        async move {
            run_scene(director, state, dispatch).await;
        }
    });

    let overlay_vm = map_loading_overlay(*state.overlay.read());
    let (progress_vm, fields) = {
        let session = state.session.read();
        (map_progress_bar(&session), map_contact_fields(session.form()))
    };
    let submit_state = *state.submit_state.read();
    let scene_error = *state.scene_error.read();
    let scene_notice = if overlay_vm.visible {
        None
    } else {
        scene_error.map(ViewError::message)
    };

    rsx! {
        div { class: "showcase",
            LoadingOverlayView { vm: overlay_vm }
            div {
                id: SCENE_HOST_ID,
                class: "scene-host",
                onresize: move |evt: ResizeEvent| {
                    if let Ok(size) = evt.data().get_border_box_size() {
                        dispatch.call(ShowcaseIntent::Resize(Viewport::new(size.width, size.height)));
                    }
                },
            }
            if let Some(notice) = scene_notice {
                p { class: "scene-error", role: "alert", "{notice}" }
            }
            section { class: "contact-panel",
                ProgressPanel { vm: progress_vm }
                ContactForm {
                    fields,
                    submit_state,
                    on_intent: move |intent| dispatch.call(intent),
                }
            }
        }
    }
}

/// Preload, fade the overlay, mount the idle model, then feed scene hits
/// back as interactions until the provider shuts down.
async fn run_scene(
    director: SceneDirector,
    state: ShowcaseState,
    dispatch: Callback<ShowcaseIntent>,
) {
    let mut overlay = state.overlay;
    let mut scene_error = state.scene_error;

    if let Err(err) = director.preload(&mut |next| overlay.set(next)).await {
        scene_error.set(Some(ViewError::from(&err)));
        return;
    }

    tokio::time::sleep(Duration::from_millis(OVERLAY_FADE_MILLIS)).await;
    let current = *overlay.peek();
    overlay.set(current.hide());

    if let Err(err) = director.mount().await {
        scene_error.set(Some(ViewError::from(&err)));
        return;
    }
    director
        .watch_interactions(&mut || dispatch.call(ShowcaseIntent::Interact))
        .await;
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ShowcaseTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ShowcaseIntent>>>>,
    state: Rc<RefCell<Option<ShowcaseState>>>,
}

#[cfg(test)]
impl ShowcaseTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<ShowcaseIntent>, state: ShowcaseState) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.state.borrow_mut() = Some(state);
    }

    pub(crate) fn dispatch(&self) -> Callback<ShowcaseIntent> {
        (*self.dispatch.borrow()).expect("showcase dispatch registered")
    }

    pub(crate) fn state(&self) -> ShowcaseState {
        (*self.state.borrow()).expect("showcase state registered")
    }
}
