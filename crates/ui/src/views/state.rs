use services::{AssetLoadError, DeliveryError};
use showcase_core::model::LOADING_ERROR_TEXT;

use crate::vm::FAILED_MESSAGE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Delivery,
    AssetLoad,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Delivery => FAILED_MESSAGE,
            ViewError::AssetLoad => LOADING_ERROR_TEXT,
        }
    }
}

impl From<&DeliveryError> for ViewError {
    fn from(_: &DeliveryError) -> Self {
        ViewError::Delivery
    }
}

impl From<&AssetLoadError> for ViewError {
    fn from(_: &AssetLoadError) -> Self {
        ViewError::AssetLoad
    }
}
