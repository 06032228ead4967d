use super::constants::{SECTION_PROGRESS_ANCHOR, SECTION_VISIBILITY_THRESHOLD};

/// Named anchor regions of the home page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Projects,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::About,
        Section::Contact,
    ];

    #[inline]
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    #[inline]
    pub fn from_anchor_id(id: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|s| s.anchor_id() == id)
    }
}

/// Live layout geometry sampled once per recompute.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
    /// `(offset_top, height)` of the projects section when it is mounted.
    pub projects_span: Option<(f64, f64)>,
}

/// Progress of the projects section through the middle of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SectionProgress {
    #[default]
    Before,
    Within(f32),
    Passed,
}

impl SectionProgress {
    /// Value published to CSS; anything above 1 means the section is behind us.
    #[inline]
    pub fn css_value(self) -> f32 {
        match self {
            SectionProgress::Before => 0.0,
            SectionProgress::Within(p) => p,
            SectionProgress::Passed => 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub progress: f32,
    pub section: Section,
    pub projects: SectionProgress,
}

/// `clamp(scroll_y / (document_height - viewport_height), 0, 1)`, or 0 when nothing scrolls.
#[inline]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f32 {
    let scrollable = document_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0) as f32
}

pub fn section_progress(
    scroll_y: f64,
    viewport_height: f64,
    offset_top: f64,
    height: f64,
) -> SectionProgress {
    let bottom = offset_top + height;
    if scroll_y + viewport_height > offset_top && scroll_y < bottom {
        let entry = offset_top - viewport_height * SECTION_PROGRESS_ANCHOR;
        let exit = bottom - viewport_height * SECTION_PROGRESS_ANCHOR;
        let span = exit - entry;
        if span <= 0.0 {
            return SectionProgress::Within(0.0);
        }
        SectionProgress::Within(((scroll_y - entry) / span).clamp(0.0, 1.0) as f32)
    } else if scroll_y >= bottom {
        SectionProgress::Passed
    } else {
        SectionProgress::Before
    }
}

/// Fraction of a region `[top, top + height)` (viewport coordinates) that is on screen.
#[inline]
pub fn visible_ratio(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible.max(0.0) / height).clamp(0.0, 1.0)
}

/// Latches the most recent section whose visibility crossed the threshold.
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionTracker {
    active: Section,
}

impl SectionTracker {
    /// Returns true when `section` became the active one.
    pub fn observe(&mut self, section: Section, ratio: f64) -> bool {
        if ratio >= SECTION_VISIBILITY_THRESHOLD && self.active != section {
            self.active = section;
            return true;
        }
        false
    }

    #[inline]
    pub fn active(&self) -> Section {
        self.active
    }
}

/// Single writer of [`ScrollState`]; recomputes are coalesced to one per frame.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    state: ScrollState,
    sections: SectionTracker,
    pending: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called for every scroll event. Returns true only for the event that
    /// armed the pending flag; the caller schedules exactly one recompute then.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn recompute(&mut self, geometry: &ScrollGeometry) -> ScrollState {
        self.pending = false;
        self.state.progress = scroll_progress(
            geometry.scroll_y,
            geometry.document_height,
            geometry.viewport_height,
        );
        self.state.projects = match geometry.projects_span {
            Some((top, height)) => {
                section_progress(geometry.scroll_y, geometry.viewport_height, top, height)
            }
            None => SectionProgress::Before,
        };
        self.state.section = self.sections.active();
        self.state
    }

    /// Feed an intersection sample; returns true when the active section changed.
    pub fn observe_section(&mut self, section: Section, ratio: f64) -> bool {
        let changed = self.sections.observe(section, ratio);
        if changed {
            self.state.section = section;
        }
        changed
    }

    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }
}
