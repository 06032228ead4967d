use std::fmt::Display;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegionStatus {
    #[default]
    Live,
    Failed,
}

/// A renderable region whose failure is contained: the first error is logged
/// once, the region latches `Failed`, and the step is never run again.
/// The owner checks [`Region::status`] and shows its fallback.
#[derive(Clone, Debug)]
pub struct Region {
    name: &'static str,
    status: RegionStatus,
}

impl Region {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            status: RegionStatus::Live,
        }
    }

    #[inline]
    pub fn status(&self) -> RegionStatus {
        self.status
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.status == RegionStatus::Live
    }

    pub fn render<E, F>(&mut self, step: F) -> RegionStatus
    where
        E: Display,
        F: FnOnce() -> Result<(), E>,
    {
        if self.status == RegionStatus::Failed {
            return RegionStatus::Failed;
        }
        if let Err(e) = step() {
            self.fail(e);
        }
        self.status
    }

    /// Latch the failed state directly (e.g. setup never succeeded).
    pub fn fail<E: Display>(&mut self, err: E) {
        if self.status == RegionStatus::Failed {
            return;
        }
        log::error!("[{}] render failed, showing fallback: {}", self.name, err);
        self.status = RegionStatus::Failed;
    }
}

/// Holds the first error reported outside a render step (a GPU device
/// callback, say) until the owning region's next step picks it up.
#[derive(Clone, Debug, Default)]
pub struct ErrorSink(Arc<Mutex<Option<String>>>);

impl ErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later errors are dropped while one is waiting.
    pub fn record<E: Display>(&self, err: E) {
        if let Ok(mut slot) = self.0.lock() {
            if slot.is_none() {
                *slot = Some(err.to_string());
            }
        }
    }

    pub fn take(&self) -> Option<String> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }

    /// `Err` with the waiting message, clearing it.
    pub fn check(&self) -> Result<(), String> {
        match self.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
