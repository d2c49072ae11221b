pub mod app;
pub mod bridge;
pub mod context;
pub mod routes;
pub mod vm;
pub mod views;

pub use app::App;
pub use bridge::WebviewScene;
pub use context::{AppContext, UiApp, build_app_context};
