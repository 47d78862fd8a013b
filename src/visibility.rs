//! Session visibility signal.
//!
//! The scheduler pauses probing while the hosting session is in the
//! background. In a browser this is the Page Visibility API; here it is a
//! watch channel the hosting application flips. Headless hosts that have no
//! foreground notion simply leave it at the default (visible).

use tokio::sync::watch;

/// Handle for reporting whether the hosting session is foreground.
///
/// Cheap to share by reference; the scheduler reads the current value at
/// fire time rather than reacting to every flip with timer bookkeeping.
pub struct Visibility {
    tx: watch::Sender<bool>,
}

impl Visibility {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(true);
        Self { tx }
    }

    /// Report a visibility change. Repeated reports of the same state are
    /// harmless.
    pub fn set_visible(&self, visible: bool) {
        self.tx.send_replace(visible);
    }

    pub fn is_visible(&self) -> bool {
        *self.tx.borrow()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::new()
    }
}
