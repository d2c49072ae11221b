use showcase_core::model::LoadingOverlay;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingOverlayVm {
    pub visible: bool,
    pub class: &'static str,
    pub text: String,
    pub bar_style: String,
}

#[must_use]
pub fn map_loading_overlay(overlay: LoadingOverlay) -> LoadingOverlayVm {
    let class = match overlay {
        LoadingOverlay::FadingOut => "loading-screen fade-out",
        LoadingOverlay::Failed => "loading-screen loading-screen--error",
        LoadingOverlay::Loading { .. } | LoadingOverlay::Hidden => "loading-screen",
    };
    let percent = match overlay {
        LoadingOverlay::Loading { percent } => percent,
        LoadingOverlay::Failed => 0,
        LoadingOverlay::FadingOut | LoadingOverlay::Hidden => 100,
    };

    LoadingOverlayVm {
        visible: overlay.is_visible(),
        class,
        text: overlay.text(),
        bar_style: format!("width: {percent}%;"),
    }
}
