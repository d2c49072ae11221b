use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{
    AssetLoadError, ContactService, DeliveryError, DeliveryReceipt, EmailDelivery, SceneProvider,
};
use showcase_core::model::{
    AssetPath, ContactMessage, LoadProgress, SceneAssets, SceneSetup, ServiceId, TemplateId,
    Viewport,
};

use crate::context::{UiApp, build_app_context};
use crate::views::ShowcaseView;
use crate::views::showcase::{ShowcaseIntent, ShowcaseTestHandles};

pub type SceneLog = Arc<Mutex<Vec<String>>>;

#[derive(Default)]
pub struct RecordingDelivery {
    pub fail: bool,
    pub sent: Mutex<Vec<ContactMessage>>,
}

impl RecordingDelivery {
    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().expect("sent lock").clone()
    }
}

#[async_trait]
impl EmailDelivery for RecordingDelivery {
    async fn send(
        &self,
        _service_id: &ServiceId,
        _template_id: &TemplateId,
        message: &ContactMessage,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        self.sent.lock().expect("sent lock").push(message.clone());
        if self.fail {
            return Err(DeliveryError::Disabled);
        }
        Ok(DeliveryReceipt {
            status: 200,
            text: "OK".to_string(),
        })
    }
}

struct FakeScene {
    log: SceneLog,
    hits: u32,
    fail_preload: bool,
    fail_mount: bool,
}

impl FakeScene {
    fn record(&self, entry: String) {
        self.log.lock().expect("scene log").push(entry);
    }
}

#[async_trait(?Send)]
impl SceneProvider for FakeScene {
    async fn preload(
        &self,
        assets: &[AssetPath],
        on_progress: &mut dyn FnMut(LoadProgress),
    ) -> Result<(), AssetLoadError> {
        if self.fail_preload {
            return Err(AssetLoadError::Fetch {
                path: assets[0].clone(),
                cause: "404".to_string(),
            });
        }
        let total = u32::try_from(assets.len()).expect("asset count");
        for loaded in 1..=total {
            on_progress(LoadProgress::new(loaded, total));
        }
        self.record(format!("preload {total}"));
        Ok(())
    }

    async fn mount(&self, setup: &SceneSetup) -> Result<(), AssetLoadError> {
        if self.fail_mount {
            return Err(AssetLoadError::Fetch {
                path: setup.initial_model.clone(),
                cause: "decode failed".to_string(),
            });
        }
        self.record(format!("mount {}", setup.initial_model));
        Ok(())
    }

    async fn show_asset(&self, asset: &AssetPath) -> Result<(), AssetLoadError> {
        self.record(format!("show {asset}"));
        Ok(())
    }

    async fn resize(&self, viewport: Viewport) {
        self.record(format!("resize {}x{}", viewport.width, viewport.height));
    }

    async fn watch_interactions(&self, on_hit: &mut dyn FnMut()) {
        for _ in 0..self.hits {
            on_hit();
        }
    }
}

struct TestApp {
    clicks_to_unlock: u32,
    contact: Arc<ContactService>,
    scene_log: SceneLog,
    scene_hits: u32,
    fail_preload: bool,
    fail_mount: bool,
}

impl UiApp for TestApp {
    fn clicks_to_unlock(&self) -> u32 {
        self.clicks_to_unlock
    }

    fn scene_assets(&self) -> SceneAssets {
        SceneAssets::default()
    }

    fn contact_service(&self) -> Arc<ContactService> {
        Arc::clone(&self.contact)
    }

    fn scene_provider(&self) -> Arc<dyn SceneProvider> {
        Arc::new(FakeScene {
            log: Arc::clone(&self.scene_log),
            hits: self.scene_hits,
            fail_preload: self.fail_preload,
            fail_mount: self.fail_mount,
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HarnessOptions {
    pub clicks_to_unlock: u32,
    pub scene_hits: u32,
    pub fail_preload: bool,
    pub fail_mount: bool,
    pub fail_delivery: bool,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            clicks_to_unlock: 3,
            scene_hits: 0,
            fail_preload: false,
            fail_mount: false,
            fail_delivery: false,
        }
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: ShowcaseTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { ShowcaseView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub delivery: Arc<RecordingDelivery>,
    pub scene_log: SceneLog,
    handles: ShowcaseTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drives the dom until `done` holds or roughly two seconds pass.
    pub async fn drive_until(&mut self, mut done: impl FnMut(&Self) -> bool) {
        for _ in 0..40 {
            if done(self) {
                return;
            }
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: ShowcaseIntent) {
        self.dispatch_batch(vec![intent]);
    }

    /// Delivers every intent before any spawned task gets polled.
    pub fn dispatch_batch(&mut self, intents: Vec<ShowcaseIntent>) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| {
            for intent in intents {
                dispatch.call(intent);
            }
        });
        drive_dom(&mut self.dom);
    }

    pub fn progress(&self) -> f64 {
        let state = self.handles.state();
        self.dom
            .in_runtime(|| state.session.peek().progress().value())
    }

    pub fn field(&self, field: showcase_core::model::ContactField) -> String {
        let state = self.handles.state();
        self.dom
            .in_runtime(|| state.session.peek().form().value(field).to_string())
    }

    pub fn form_enabled(&self) -> bool {
        let state = self.handles.state();
        self.dom.in_runtime(|| state.session.peek().form().is_enabled())
    }

    pub fn hovered(&self) -> Option<showcase_core::model::ContactField> {
        let state = self.handles.state();
        self.dom.in_runtime(|| state.session.peek().form().hovered())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn scene_log(&self) -> Vec<String> {
        self.scene_log.lock().expect("scene log").clone()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(options: HarnessOptions) -> ViewHarness {
    let delivery = Arc::new(RecordingDelivery {
        fail: options.fail_delivery,
        ..RecordingDelivery::default()
    });
    let contact = Arc::new(ContactService::new(
        delivery.clone(),
        ServiceId::new("service_test"),
        TemplateId::new("template_test"),
    ));
    let scene_log = SceneLog::default();
    let app = Arc::new(TestApp {
        clicks_to_unlock: options.clicks_to_unlock,
        contact,
        scene_log: Arc::clone(&scene_log),
        scene_hits: options.scene_hits,
        fail_preload: options.fail_preload,
        fail_mount: options.fail_mount,
    });
    let handles = ShowcaseTestHandles::default();

    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            ViewHarnessRoot,
            ViewHarnessProps {
                app,
                handles: handles.clone(),
            },
        ),
        delivery,
        scene_log,
        handles,
    };
    harness.rebuild();
    harness
}
