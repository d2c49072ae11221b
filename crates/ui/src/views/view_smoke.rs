use super::test_harness::{HarnessOptions, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn showcase_renders_locked_page_before_any_interaction() {
    let harness = setup_view_harness(HarnessOptions::default());
    let html = harness.render();

    assert!(html.contains("loading-screen"), "missing overlay in {html}");
    assert!(html.contains("Click Me!"), "missing instruction in {html}");
    assert!(html.contains("width: 0%;"), "missing empty bar in {html}");
    assert!(html.contains(r#"id="scene-root""#), "missing scene host in {html}");
    assert!(html.contains("contact-form"), "missing form in {html}");
    assert!(html.contains("novalidate"), "form should skip native validation in {html}");
    assert!(html.contains("disabled"), "form should start disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn showcase_hides_overlay_and_mounts_idle_model_after_preload() {
    let mut harness = setup_view_harness(HarnessOptions::default());

    harness
        .drive_until(|h| h.scene_log().iter().any(|entry| entry.starts_with("mount")))
        .await;

    let log = harness.scene_log();
    assert_eq!(log, vec!["preload 2", "mount /Models/dogidle.glb"]);
    let html = harness.render();
    assert!(!html.contains("loading-screen"), "overlay still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn showcase_scene_hits_unlock_the_form_and_celebrate() {
    let mut harness = setup_view_harness(HarnessOptions {
        scene_hits: 3,
        ..HarnessOptions::default()
    });

    harness
        .drive_until(|h| h.scene_log().iter().any(|entry| entry.starts_with("show")))
        .await;
    harness.drive_async().await;

    assert!(harness.form_enabled());
    assert!(
        harness
            .scene_log()
            .contains(&"show /Models/dogjump.glb".to_string())
    );
    let html = harness.render();
    assert!(html.contains("Contact Unlocked!"), "missing unlock text in {html}");
    assert!(html.contains("width: 100%;"), "bar not full in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn showcase_keeps_error_overlay_when_preload_fails() {
    let mut harness = setup_view_harness(HarnessOptions {
        fail_preload: true,
        ..HarnessOptions::default()
    });

    harness
        .drive_until(|h| h.render().contains("Error loading assets"))
        .await;

    let html = harness.render();
    assert!(html.contains("Error loading assets"), "missing error text in {html}");
    assert!(html.contains("loading-screen"), "overlay should stay in {html}");
    assert!(harness.scene_log().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn showcase_reports_mount_failure_after_overlay_hides() {
    let mut harness = setup_view_harness(HarnessOptions {
        fail_mount: true,
        ..HarnessOptions::default()
    });

    harness.drive_until(|h| h.render().contains("scene-error")).await;

    let html = harness.render();
    assert!(html.contains("scene-error"), "missing scene notice in {html}");
    assert!(html.contains("Error loading assets"), "missing error text in {html}");
    assert!(!html.contains("loading-screen"), "overlay should be gone in {html}");
    assert_eq!(harness.scene_log(), vec!["preload 2"]);
}
