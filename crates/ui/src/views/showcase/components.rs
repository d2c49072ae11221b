use dioxus::prelude::*;
use showcase_core::model::ContactField;

use crate::vm::{ContactFieldVm, LoadingOverlayVm, ProgressBarVm, submit_label};

use super::actions::ShowcaseIntent;
use super::state::SubmitState;

#[component]
pub fn LoadingOverlayView(vm: LoadingOverlayVm) -> Element {
    if !vm.visible {
        return rsx! {};
    }

    rsx! {
        div { id: "loading-screen", class: "{vm.class}",
            div { class: "loading-bar",
                div { class: "loading-bar-fill", style: "{vm.bar_style}" }
            }
            p { id: "loading-text", class: "loading-text", "{vm.text}" }
        }
    }
}

#[component]
pub fn ProgressPanel(vm: ProgressBarVm) -> Element {
    let value_now = format!("{:.2}", vm.value);

    rsx! {
        div { class: "progress-panel",
            div { class: "progress-bar", role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{value_now}",
                div { id: "progress", class: "progress-fill", style: "{vm.fill_style}" }
            }
            p { id: "progress-instruction", class: "{vm.instruction_class}", "{vm.instruction}" }
        }
    }
}

#[component]
pub fn ContactForm(
    fields: Vec<ContactFieldVm>,
    submit_state: SubmitState,
    on_intent: EventHandler<ShowcaseIntent>,
) -> Element {
    let sending = submit_state.is_sending();
    let submit_disabled = sending || fields.iter().any(|field| field.disabled);
    let label = submit_label(sending);
    let notice = submit_state.notice();

    rsx! {
        form { id: "contact-form", class: "contact-form", novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_intent.call(ShowcaseIntent::Submit);
            },
            for field in fields {
                ContactInput { key: "{field.id}", vm: field.clone(), on_intent }
            }
            button { r#type: "submit", class: "contact-submit", disabled: submit_disabled,
                "{label}"
            }
            if let Some(notice) = notice {
                p { class: "contact-status", role: "status", "{notice}" }
            }
        }
    }
}

#[component]
fn ContactInput(vm: ContactFieldVm, on_intent: EventHandler<ShowcaseIntent>) -> Element {
    let field: ContactField = vm.field;
    let input_type = if field == ContactField::Email { "email" } else { "text" };

    rsx! {
        label { r#for: "{vm.id}", class: "contact-label", "{vm.label}" }
        if vm.multiline {
            textarea {
                id: "{vm.id}",
                name: "{vm.id}",
                class: "{vm.class}",
                disabled: vm.disabled,
                value: "{vm.value}",
                oninput: move |evt: FormEvent| on_intent.call(ShowcaseIntent::UpdateField(field, evt.value())),
                onmouseenter: move |_| on_intent.call(ShowcaseIntent::Hover(field)),
                onmouseleave: move |_| on_intent.call(ShowcaseIntent::Leave(field)),
            }
        } else {
            input {
                id: "{vm.id}",
                name: "{vm.id}",
                r#type: input_type,
                class: "{vm.class}",
                disabled: vm.disabled,
                value: "{vm.value}",
                oninput: move |evt: FormEvent| on_intent.call(ShowcaseIntent::UpdateField(field, evt.value())),
                onmouseenter: move |_| on_intent.call(ShowcaseIntent::Hover(field)),
                onmouseleave: move |_| on_intent.call(ShowcaseIntent::Leave(field)),
            }
        }
    }
}
