use showcase_core::PageSession;

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressBarVm {
    pub value: f64,
    pub fill_style: String,
    pub instruction: &'static str,
    pub instruction_class: &'static str,
}

#[must_use]
pub fn map_progress_bar(session: &PageSession) -> ProgressBarVm {
    let value = session.progress().value();
    let instruction_class = if session.progress().is_saturated() {
        "progress-instruction progress-instruction--unlocked"
    } else {
        "progress-instruction"
    };

    ProgressBarVm {
        value,
        fill_style: format!("width: {}%;", format_percent(value)),
        instruction: session.instruction(),
        instruction_class,
    }
}

/// Two decimals, trailing zeros dropped (`33.33`, `66.67`, `100`).
fn format_percent(value: f64) -> String {
    let formatted = format!("{value:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
