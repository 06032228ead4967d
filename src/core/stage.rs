use super::constants::*;
use super::glow::{GlowScheduler, GlowTick, GlowTimings};
use super::pointer::PointerState;
use glam::{Vec2, Vec3};
use rand::Rng;
use smallvec::SmallVec;
use std::fmt::Write as _;

/// Design-time anchor of one grid position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSlot {
    pub x_pct: f32,
    pub y_pct: f32,
    pub z_px: f32,
    /// Idle-float phase offset (radians) and angular speed multiplier.
    pub phase: f32,
    pub speed: f32,
}

const fn slot(x_pct: f32, y_pct: f32, z_px: f32, phase: f32, speed: f32) -> CardSlot {
    CardSlot {
        x_pct,
        y_pct,
        z_px,
        phase,
        speed,
    }
}

// Two rows of four, plus two spare positions below.
pub const CARD_SLOTS: [CardSlot; 10] = [
    slot(12.5, 25.0, 15.0, 0.0, 0.62),
    slot(37.5, 25.0, 18.0, 1.7, 0.55),
    slot(62.5, 25.0, 16.0, 3.1, 0.71),
    slot(87.5, 25.0, 14.0, 4.6, 0.58),
    slot(12.5, 70.0, 17.0, 0.9, 0.66),
    slot(37.5, 70.0, 13.0, 2.4, 0.52),
    slot(62.5, 70.0, 15.0, 3.8, 0.69),
    slot(87.5, 70.0, 16.0, 5.3, 0.6),
    slot(50.0, 95.0, 10.0, 1.2, 0.57),
    slot(50.0, 95.0, 11.0, 2.9, 0.64),
];

const OVERFLOW_COLUMNS: usize = 4;
const OVERFLOW_ROW_PCT: f32 = 45.0;

impl CardSlot {
    /// Slot for grid position `index`; positions past the table continue in rows of four.
    pub fn for_index(index: usize) -> CardSlot {
        if let Some(s) = CARD_SLOTS.get(index) {
            return *s;
        }
        let extra = index - CARD_SLOTS.len();
        let col = extra % OVERFLOW_COLUMNS;
        let row = extra / OVERFLOW_COLUMNS;
        let base = CARD_SLOTS[col];
        CardSlot {
            y_pct: CARD_SLOTS[CARD_SLOTS.len() - 1].y_pct + OVERFLOW_ROW_PCT * (row as f32 + 1.0),
            phase: base.phase + index as f32 * 0.37,
            ..base
        }
    }

    #[inline]
    pub fn unit_position(&self) -> Vec2 {
        Vec2::new(self.x_pct / 100.0, self.y_pct / 100.0)
    }
}

/// Hover/selection tri-state of one card grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Hovered(String),
    Selected(String),
}

impl Selection {
    #[inline]
    pub fn selected(&self) -> Option<&str> {
        match self {
            Selection::Selected(id) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn hovered(&self) -> Option<&str> {
        match self {
            Selection::Hovered(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageInput<'a> {
    PointerEnter(&'a str),
    PointerLeave(&'a str),
    ClickCard(&'a str),
    ClickOutside,
}

/// Requests that leave the card grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageCommand {
    OpenDetail(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    #[default]
    Staged,
    Compact,
}

impl LayoutMode {
    #[inline]
    pub fn for_viewport(width_px: f64) -> Self {
        if width_px <= COMPACT_BREAKPOINT_PX {
            LayoutMode::Compact
        } else {
            LayoutMode::Staged
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Staged { x_pct: f32, y_pct: f32 },
    Stacked { order: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Springy zoom into the centre.
    Select,
    /// Short ease that follows pointer tilt.
    Follow,
    /// Plain opacity fade used by the stacked layout.
    Fade,
}

impl Transition {
    fn css(self) -> &'static str {
        match self {
            Transition::Select => {
                "transform 0.4s cubic-bezier(0.34, 1.56, 0.64, 1), opacity 0.3s ease, filter 0.3s ease"
            }
            Transition::Follow => "transform 0.15s ease-out",
            Transition::Fade => "opacity 0.3s ease",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub placement: Placement,
    /// Idle float offset in percent of the container.
    pub offset_pct: Vec2,
    pub z_px: f32,
    pub scale: f32,
    /// Rotation about x, y, z in degrees.
    pub rotate_deg: Vec3,
    pub opacity: f32,
    pub interactive: bool,
    pub z_index: i32,
    pub transition: Transition,
}

impl CardTransform {
    /// Inline style for the card element.
    pub fn to_style(&self) -> String {
        let mut s = String::with_capacity(256);
        match self.placement {
            Placement::Staged { x_pct, y_pct } => {
                _ = write!(
                    s,
                    "left:{:.3}%;top:{:.3}%;transform:translate(-50%, -50%) translateZ({:.2}px) scale({:.3}) rotateX({:.3}deg) rotateY({:.3}deg) rotateZ({:.3}deg);",
                    x_pct + self.offset_pct.x,
                    y_pct + self.offset_pct.y,
                    self.z_px,
                    self.scale,
                    self.rotate_deg.x,
                    self.rotate_deg.y,
                    self.rotate_deg.z,
                );
            }
            Placement::Stacked { .. } => {
                s.push_str("position:relative;left:50%;top:auto;transform:translateX(-50%);margin-bottom:2rem;");
            }
        }
        _ = write!(
            s,
            "opacity:{:.3};pointer-events:{};cursor:pointer;z-index:{};transition:{};",
            self.opacity,
            if self.interactive { "all" } else { "none" },
            self.z_index,
            self.transition.css(),
        );
        s
    }
}

/// Per-card output of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    pub index: usize,
    pub transform: CardTransform,
    pub hovered: bool,
    pub selected: bool,
    pub glowing: bool,
}

pub type CardFrames = SmallVec<[CardFrame; 10]>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IdleFloat {
    pub offset_pct: Vec2,
    pub rotate_deg: Vec2,
}

/// Sum-of-sinusoids drift for one slot at time `t_sec`.
pub fn idle_float(slot: &CardSlot, t_sec: f64) -> IdleFloat {
    let w = t_sec as f32 * slot.speed;
    let p = slot.phase;
    let a = FLOAT_AMPLITUDE_PCT;
    let b = FLOAT_AMPLITUDE_PCT * FLOAT_SECONDARY_RATIO;
    IdleFloat {
        offset_pct: Vec2::new(
            a * (w + p).sin() + b * (w * 1.7 + p * 2.0).sin(),
            a * (w * 0.8 + p).cos() + b * (w * 1.3 + p * 0.5).sin(),
        ),
        rotate_deg: Vec2::new(
            FLOAT_ROTATION_DEG * (w * 0.9 + p).sin(),
            FLOAT_ROTATION_DEG * (w * 1.1 + p).cos(),
        ),
    }
}

/// Pointer-relative tilt in degrees (x, y); zero whenever the pointer is not inside.
///
/// Cards farther from the pointer are amplified more than nearby ones.
pub fn pointer_tilt(slot: &CardSlot, pointer: &PointerState) -> Vec2 {
    if !pointer.inside || !pointer.unit.is_finite() {
        return Vec2::ZERO;
    }
    let u = pointer.unit;
    let base = Vec2::new((u.y - 0.5) * -TILT_GAIN_DEG, (u.x - 0.5) * TILT_GAIN_DEG);
    let distance = u.distance(slot.unit_position());
    base * (1.0 + distance * TILT_DISTANCE_GAIN)
}

#[inline]
pub fn stacking_order(index: usize) -> i32 {
    CARD_Z_INDEX_BASE + index as i32 * CARD_Z_INDEX_STEP
}

pub fn selected_transform() -> CardTransform {
    CardTransform {
        placement: Placement::Staged {
            x_pct: 50.0,
            y_pct: 50.0,
        },
        offset_pct: Vec2::ZERO,
        z_px: CARD_SELECTED_Z_PX,
        scale: CARD_SELECTED_SCALE,
        rotate_deg: Vec3::ZERO,
        opacity: 1.0,
        interactive: true,
        z_index: CARD_SELECTED_Z_INDEX,
        transition: Transition::Select,
    }
}

/// Card staging engine for one grid instance.
///
/// Owns the selection state machine and the glow scheduler; both die with it.
#[derive(Debug)]
pub struct CardStage {
    ids: Vec<String>,
    selection: Selection,
    glow: GlowScheduler,
    mode: LayoutMode,
    mode_since_sec: f64,
    // Reserved for a scroll-linked fade; this layout keeps cards visible.
    phase: f32,
}

impl CardStage {
    pub fn new(ids: Vec<String>, viewport_width_px: f64, now_sec: f64) -> Self {
        Self::with_glow_timings(ids, viewport_width_px, now_sec, GlowTimings::default())
    }

    pub fn with_glow_timings(
        ids: Vec<String>,
        viewport_width_px: f64,
        now_sec: f64,
        timings: GlowTimings,
    ) -> Self {
        let mut glow = GlowScheduler::new(timings);
        glow.start(now_sec);
        Self {
            ids,
            selection: Selection::Idle,
            glow,
            mode: LayoutMode::for_viewport(viewport_width_px),
            mode_since_sec: now_sec,
            phase: 1.0,
        }
    }

    #[inline]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[inline]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Returns true when the layout mode switched.
    pub fn set_viewport_width(&mut self, width_px: f64, now_sec: f64) -> bool {
        let mode = LayoutMode::for_viewport(width_px);
        if mode == self.mode {
            return false;
        }
        log::debug!("[stage] layout {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.mode_since_sec = now_sec;
        true
    }

    fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn handle(&mut self, input: StageInput<'_>) -> Option<StageCommand> {
        match input {
            StageInput::PointerEnter(id) => {
                if self.contains(id) && self.selection.selected().is_none() {
                    self.selection = Selection::Hovered(id.to_string());
                }
                None
            }
            StageInput::PointerLeave(id) => {
                if self.selection.hovered() == Some(id) {
                    self.selection = Selection::Idle;
                }
                None
            }
            StageInput::ClickCard(id) => {
                if !self.contains(id) {
                    return None;
                }
                if self.selection.selected() == Some(id) {
                    log::debug!("[stage] open detail {}", id);
                    return Some(StageCommand::OpenDetail(id.to_string()));
                }
                log::debug!("[stage] select {}", id);
                self.selection = Selection::Selected(id.to_string());
                None
            }
            StageInput::ClickOutside => {
                if self.selection.selected().is_some() {
                    self.selection = Selection::Idle;
                }
                None
            }
        }
    }

    pub fn tick_glow<R: Rng + ?Sized>(&mut self, now_sec: f64, rng: &mut R) -> GlowTick {
        let tick = self.glow.tick(now_sec, self.ids.len(), rng);
        if let Some(i) = tick.picked {
            log::debug!("[stage] glow {}", self.ids[i]);
        }
        tick
    }

    pub fn glowing_id(&self, now_sec: f64) -> Option<&str> {
        self.glow
            .glowing(now_sec, self.ids.len())
            .map(|i| self.ids[i].as_str())
    }

    /// Stop the glow timer; called on unmount.
    pub fn teardown(&mut self) {
        self.glow.cancel();
        self.selection = Selection::Idle;
    }

    /// Compute every card's transform from one pointer snapshot.
    pub fn layout(&self, now_sec: f64, pointer: &PointerState) -> CardFrames {
        let selected = self.selection.selected();
        let hovered = self.selection.hovered();
        let glowing = self.glow.glowing(now_sec, self.ids.len());
        let fade = match self.mode {
            LayoutMode::Compact => {
                ((now_sec - self.mode_since_sec) / COMPACT_FADE_SEC).clamp(0.0, 1.0) as f32
            }
            LayoutMode::Staged => 1.0,
        };
        let interactive = self.phase > PHASE_POINTER_MIN;

        self.ids
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let is_selected = selected == Some(id.as_str());
                let transform = if is_selected {
                    selected_transform()
                } else if self.mode == LayoutMode::Compact {
                    CardTransform {
                        placement: Placement::Stacked { order: index },
                        offset_pct: Vec2::ZERO,
                        z_px: 0.0,
                        scale: 1.0,
                        rotate_deg: Vec3::ZERO,
                        opacity: self.phase * fade,
                        interactive,
                        z_index: stacking_order(index),
                        transition: Transition::Fade,
                    }
                } else {
                    let slot = CardSlot::for_index(index);
                    let float = idle_float(&slot, now_sec);
                    let tilt = pointer_tilt(&slot, pointer);
                    CardTransform {
                        placement: Placement::Staged {
                            x_pct: slot.x_pct,
                            y_pct: slot.y_pct,
                        },
                        offset_pct: float.offset_pct,
                        z_px: slot.z_px,
                        scale: CARD_IDLE_SCALE,
                        rotate_deg: Vec3::new(
                            tilt.x + float.rotate_deg.x,
                            tilt.y + float.rotate_deg.y,
                            0.0,
                        ),
                        opacity: self.phase,
                        interactive,
                        z_index: stacking_order(index),
                        transition: Transition::Follow,
                    }
                };
                CardFrame {
                    index,
                    transform,
                    hovered: hovered == Some(id.as_str()),
                    selected: is_selected,
                    glowing: glowing == Some(index) && selected.is_none(),
                }
            })
            .collect()
    }
}
