#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod contact_service;
pub mod email;
pub mod error;
pub mod scene;

pub use app_services::AppServices;
pub use config::{EmailJsConfig, ShowcaseConfig};
pub use contact_service::ContactService;
pub use email::{DeliveryReceipt, EmailDelivery, EmailJsClient};
pub use error::{AssetLoadError, ConfigError, DeliveryError};
pub use scene::{SceneDirector, SceneProvider};
