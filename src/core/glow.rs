use super::constants::{GLOW_DURATION_SEC, GLOW_INITIAL_DELAY_SEC, GLOW_INTERVAL_SEC};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowTimings {
    pub initial_delay_sec: f64,
    pub interval_sec: f64,
    pub duration_sec: f64,
}

impl Default for GlowTimings {
    fn default() -> Self {
        Self {
            initial_delay_sec: GLOW_INITIAL_DELAY_SEC,
            interval_sec: GLOW_INTERVAL_SEC,
            duration_sec: GLOW_DURATION_SEC,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveGlow {
    index: usize,
    until_sec: f64,
}

/// Outcome of one scheduler tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlowTick {
    pub picked: Option<usize>,
    pub cleared: bool,
}

/// Attention-glow timer: one delayed first pick, then a fixed-interval
/// recurring pick. Each pick replaces the previous glow and expires on its own.
///
/// Driven by the frame clock, so cancelling the scheduler (or dropping it)
/// stops both tasks at once.
#[derive(Clone, Debug)]
pub struct GlowScheduler {
    timings: GlowTimings,
    next_pick_sec: Option<f64>,
    active: Option<ActiveGlow>,
    cancelled: bool,
}

impl GlowScheduler {
    pub fn new(timings: GlowTimings) -> Self {
        Self {
            timings,
            next_pick_sec: None,
            active: None,
            cancelled: false,
        }
    }

    #[inline]
    pub fn timings(&self) -> GlowTimings {
        self.timings
    }

    /// Arm the initial delayed pick relative to `now_sec` (the mount time).
    pub fn start(&mut self, now_sec: f64) {
        if self.cancelled {
            return;
        }
        self.next_pick_sec = Some(now_sec + self.timings.initial_delay_sec);
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.next_pick_sec = None;
        self.active = None;
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// `catalog_len` is read on every firing so a shrinking catalog never
    /// yields an out-of-range pick.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        now_sec: f64,
        catalog_len: usize,
        rng: &mut R,
    ) -> GlowTick {
        let mut out = GlowTick::default();
        if self.cancelled {
            return out;
        }
        if self.next_pick_sec.is_none() {
            self.start(now_sec);
        }

        if let Some(active) = self.active {
            if now_sec >= active.until_sec || active.index >= catalog_len {
                self.active = None;
                out.cleared = true;
            }
        }

        let Some(due) = self.next_pick_sec else {
            return out;
        };
        if now_sec < due {
            return out;
        }
        // One pick per tick; a long stall does not replay missed firings.
        let mut next = due + self.timings.interval_sec;
        if next <= now_sec {
            next = now_sec + self.timings.interval_sec;
        }
        self.next_pick_sec = Some(next);

        if catalog_len == 0 {
            return out;
        }
        let index = rng.gen_range(0..catalog_len);
        self.active = Some(ActiveGlow {
            index,
            until_sec: now_sec + self.timings.duration_sec,
        });
        out.picked = Some(index);
        out.cleared = false;
        out
    }

    /// Currently glowing catalog index, bounds-checked against the live length.
    pub fn glowing(&self, now_sec: f64, catalog_len: usize) -> Option<usize> {
        self.active
            .filter(|a| a.index < catalog_len && now_sec < a.until_sec)
            .map(|a| a.index)
    }
}

impl Default for GlowScheduler {
    fn default() -> Self {
        Self::new(GlowTimings::default())
    }
}
