mod contact_vm;
mod loading_vm;
mod progress_vm;

pub use contact_vm::{
    Acknowledgement, ContactFieldVm, FAILED_MESSAGE, SENT_MESSAGE, map_contact_fields, submit_label,
};
pub use loading_vm::{LoadingOverlayVm, map_loading_overlay};
pub use progress_vm::{ProgressBarVm, map_progress_bar};
