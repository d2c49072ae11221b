use std::fmt;

/// Broadcast value telling listeners that the gated contact form may open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockSignal {
    pub unlocked: bool,
}

impl UnlockSignal {
    #[must_use]
    pub const fn unlocked() -> Self {
        Self { unlocked: true }
    }
}

type Listener = Box<dyn FnMut(UnlockSignal)>;

/// One-shot publish/subscribe channel for [`UnlockSignal`].
///
/// The first `publish` reaches every listener registered so far. Later
/// publishes are dropped, and listeners registered after the signal fired are
/// called immediately so they never miss it.
#[derive(Default)]
pub struct UnlockBroadcast {
    listeners: Vec<Listener>,
    fired: Option<UnlockSignal>,
}

impl UnlockBroadcast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, mut listener: impl FnMut(UnlockSignal) + 'static) {
        if let Some(signal) = self.fired {
            listener(signal);
        }
        self.listeners.push(Box::new(listener));
    }

    /// Delivers `signal` to every listener. Returns `false` if it already fired.
    pub fn publish(&mut self, signal: UnlockSignal) -> bool {
        if self.fired.is_some() {
            return false;
        }
        self.fired = Some(signal);
        for listener in &mut self.listeners {
            listener(signal);
        }
        true
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired.is_some()
    }
}

impl fmt::Debug for UnlockBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnlockBroadcast")
            .field("listeners", &self.listeners.len())
            .field("fired", &self.fired)
            .finish()
    }
}
