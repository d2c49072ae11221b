use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressConfigError {
    #[error("clicks to unlock must be > 0")]
    ZeroClicks,
}

//
// ─── CONSTANTS ─────────────────────────────────────────────────────────────────
//

/// Upper bound of the progress range.
pub const PROGRESS_MAX: f64 = 100.0;

/// Interactions needed to fill the bar when nothing else is configured.
pub const DEFAULT_CLICKS_TO_UNLOCK: u32 = 3;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of the progress counter.
///
/// `Saturated` is terminal: once reached, further interactions are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Accumulating,
    Saturated,
}

/// Result of feeding a single interaction into the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressAdvance {
    /// Progress moved but the bar is not full yet.
    Advanced { value: f64 },
    /// This interaction filled the bar. Emitted exactly once per tracker.
    Saturated,
    /// The tracker was already saturated; nothing changed.
    Ignored,
}

impl ProgressAdvance {
    #[must_use]
    pub fn is_saturating(self) -> bool {
        matches!(self, ProgressAdvance::Saturated)
    }
}

//
// ─── TRACKER ───────────────────────────────────────────────────────────────────
//

/// Bounded, monotonically non-decreasing click counter.
///
/// Saturation is decided on the integer click count, so the displayed value
/// lands on exactly [`PROGRESS_MAX`] no matter how the step rounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTracker {
    clicks: u32,
    clicks_to_unlock: u32,
}

impl ProgressTracker {
    /// Creates a tracker that saturates after `clicks_to_unlock` interactions.
    ///
    /// # Errors
    ///
    /// Returns `ProgressConfigError::ZeroClicks` if `clicks_to_unlock` is zero.
    pub fn new(clicks_to_unlock: u32) -> Result<Self, ProgressConfigError> {
        if clicks_to_unlock == 0 {
            return Err(ProgressConfigError::ZeroClicks);
        }
        Ok(Self {
            clicks: 0,
            clicks_to_unlock,
        })
    }

    /// Returns the number of interactions needed to saturate.
    #[must_use]
    pub fn clicks_to_unlock(&self) -> u32 {
        self.clicks_to_unlock
    }

    /// Returns the number of counted interactions (never above `clicks_to_unlock`).
    #[must_use]
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Fixed increment applied per interaction.
    #[must_use]
    pub fn step(&self) -> f64 {
        PROGRESS_MAX / f64::from(self.clicks_to_unlock)
    }

    #[must_use]
    pub fn phase(&self) -> ProgressPhase {
        if self.clicks >= self.clicks_to_unlock {
            ProgressPhase::Saturated
        } else {
            ProgressPhase::Accumulating
        }
    }

    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.phase() == ProgressPhase::Saturated
    }

    /// Current progress in `[0, 100]`.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_saturated() {
            return PROGRESS_MAX;
        }
        (f64::from(self.clicks) * self.step()).min(PROGRESS_MAX)
    }

    /// Counts one interaction.
    pub fn advance(&mut self) -> ProgressAdvance {
        if self.is_saturated() {
            return ProgressAdvance::Ignored;
        }
        self.clicks += 1;
        if self.is_saturated() {
            ProgressAdvance::Saturated
        } else {
            ProgressAdvance::Advanced {
                value: self.value(),
            }
        }
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self {
            clicks: 0,
            clicks_to_unlock: DEFAULT_CLICKS_TO_UNLOCK,
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
