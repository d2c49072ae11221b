use showcase_core::model::ContactField;

use crate::views::test_harness::{HarnessOptions, ViewHarness, setup_view_harness};
use crate::vm::{FAILED_MESSAGE, SENT_MESSAGE};

use super::actions::ShowcaseIntent;

fn unlock(harness: &mut ViewHarness) {
    for _ in 0..3 {
        harness.dispatch(ShowcaseIntent::Interact);
    }
}

fn fill(harness: &mut ViewHarness, name: &str, message: &str) {
    harness.dispatch(ShowcaseIntent::UpdateField(ContactField::Name, name.to_string()));
    harness.dispatch(ShowcaseIntent::UpdateField(
        ContactField::Message,
        message.to_string(),
    ));
}

#[tokio::test(flavor = "current_thread")]
async fn interactions_fill_the_bar_and_unlock_on_the_third() {
    let mut harness = setup_view_harness(HarnessOptions::default());

    harness.dispatch(ShowcaseIntent::Interact);
    assert!((harness.progress() - 100.0 / 3.0).abs() < 1e-9);
    assert!(!harness.form_enabled());

    harness.dispatch(ShowcaseIntent::Interact);
    assert!(!harness.form_enabled());

    harness.dispatch(ShowcaseIntent::Interact);
    assert!((harness.progress() - 100.0).abs() < f64::EPSILON);
    assert!(harness.form_enabled());

    harness.dispatch(ShowcaseIntent::Interact);
    assert!((harness.progress() - 100.0).abs() < f64::EPSILON);
    assert!(harness.form_enabled());
}

#[tokio::test(flavor = "current_thread")]
async fn edits_and_hover_are_ignored_while_locked() {
    let mut harness = setup_view_harness(HarnessOptions::default());

    harness.dispatch(ShowcaseIntent::UpdateField(ContactField::Name, "Ada".to_string()));
    harness.dispatch(ShowcaseIntent::Hover(ContactField::Name));
    assert_eq!(harness.field(ContactField::Name), "");
    assert_eq!(harness.hovered(), None);

    unlock(&mut harness);
    harness.dispatch(ShowcaseIntent::Hover(ContactField::Name));
    assert_eq!(harness.hovered(), Some(ContactField::Name));
    assert!(harness.render().contains("contact-input--hover"));
    harness.dispatch(ShowcaseIntent::Leave(ContactField::Name));
    assert_eq!(harness.hovered(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn submit_is_ignored_until_unlocked() {
    let mut harness = setup_view_harness(HarnessOptions::default());

    harness.dispatch(ShowcaseIntent::Submit);
    harness.drive_async().await;

    assert!(harness.delivery.sent().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn successful_submit_sends_empty_email_and_resets_fields() {
    let mut harness = setup_view_harness(HarnessOptions::default());
    unlock(&mut harness);
    fill(&mut harness, "Ada", "Hello there");

    harness.dispatch(ShowcaseIntent::Submit);
    harness
        .drive_until(|h| h.render().contains(SENT_MESSAGE))
        .await;

    let sent = harness.delivery.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Ada");
    assert_eq!(sent[0].email, "");
    assert_eq!(sent[0].message, "Hello there");
    assert_eq!(harness.field(ContactField::Name), "");
    assert_eq!(harness.field(ContactField::Message), "");
    assert!(harness.form_enabled());
}

#[tokio::test(flavor = "current_thread")]
async fn failed_submit_keeps_values_and_reports_failure() {
    let mut harness = setup_view_harness(HarnessOptions {
        fail_delivery: true,
        ..HarnessOptions::default()
    });
    unlock(&mut harness);
    fill(&mut harness, "Ada", "Hello there");

    harness.dispatch(ShowcaseIntent::Submit);
    harness
        .drive_until(|h| h.render().contains(FAILED_MESSAGE))
        .await;

    assert_eq!(harness.delivery.sent().len(), 1);
    assert_eq!(harness.field(ContactField::Name), "Ada");
    assert_eq!(harness.field(ContactField::Message), "Hello there");
    assert!(harness.render().contains(FAILED_MESSAGE));
}

#[tokio::test(flavor = "current_thread")]
async fn editing_after_a_submit_clears_the_outcome_notice() {
    let mut harness = setup_view_harness(HarnessOptions {
        fail_delivery: true,
        ..HarnessOptions::default()
    });
    unlock(&mut harness);
    fill(&mut harness, "Ada", "Hello there");

    harness.dispatch(ShowcaseIntent::Submit);
    harness
        .drive_until(|h| h.render().contains(FAILED_MESSAGE))
        .await;

    harness.dispatch(ShowcaseIntent::UpdateField(
        ContactField::Message,
        "Hello again".to_string(),
    ));

    let html = harness.render();
    assert!(!html.contains(FAILED_MESSAGE), "stale notice in {html}");
    assert_eq!(harness.field(ContactField::Message), "Hello again");
}

#[tokio::test(flavor = "current_thread")]
async fn editing_after_a_sent_message_clears_the_acknowledgement() {
    let mut harness = setup_view_harness(HarnessOptions::default());
    unlock(&mut harness);
    fill(&mut harness, "Ada", "Hi");

    harness.dispatch(ShowcaseIntent::Submit);
    harness
        .drive_until(|h| h.render().contains(SENT_MESSAGE))
        .await;

    harness.dispatch(ShowcaseIntent::UpdateField(ContactField::Name, "Bo".to_string()));

    let html = harness.render();
    assert!(!html.contains(SENT_MESSAGE), "stale notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn second_submit_while_sending_is_ignored() {
    let mut harness = setup_view_harness(HarnessOptions::default());
    unlock(&mut harness);
    fill(&mut harness, "Ada", "Hi");

    harness.dispatch_batch(vec![ShowcaseIntent::Submit, ShowcaseIntent::Submit]);
    harness
        .drive_until(|h| h.render().contains(SENT_MESSAGE))
        .await;

    assert_eq!(harness.delivery.sent().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn unlock_swaps_in_the_celebration_model() {
    let mut harness = setup_view_harness(HarnessOptions::default());
    unlock(&mut harness);

    harness
        .drive_until(|h| h.scene_log().iter().any(|entry| entry.starts_with("show")))
        .await;

    assert!(
        harness
            .scene_log()
            .contains(&"show /Models/dogjump.glb".to_string())
    );
}
