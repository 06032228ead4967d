use crate::core::pointer::{Bounds, PointerTracker};
use crate::core::scroll::{Section, SectionProgress};
use crate::core::stage::{CardFrame, CardStage, StageCommand, StageInput};
use crate::dom;
use crate::events::scroll::{SectionInbox, SectionObserver};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const PROGRESS_PROPERTY: &str = "--projects-progress";

/// DOM handles for one card plus what was last written to them.
struct CardView {
    el: web::HtmlElement,
    details: Option<web::Element>,
    style: String,
    flags: Option<(bool, bool, bool)>,
}

impl CardView {
    fn apply(&mut self, frame: &CardFrame) {
        let style = frame.transform.to_style();
        if style != self.style {
            _ = self.el.set_attribute("style", &style);
            self.style = style;
        }
        let flags = (frame.selected, frame.hovered, frame.glowing);
        if self.flags == Some(flags) {
            return;
        }
        self.flags = Some(flags);
        dom::set_class(&self.el, "selected", frame.selected);
        dom::set_class(&self.el, "hovered", frame.hovered);
        dom::set_class(&self.el, "glowing", frame.glowing);
        if let Some(details) = &self.details {
            dom::set_class(details, "visible", frame.selected);
        }
    }
}

/// Everything the home route owns while mounted. Dropping it stops the glow
/// schedule and disconnects the section observer.
pub struct HomeSession {
    stage: CardStage,
    cards: Vec<Option<CardView>>,
    projects: Option<web::HtmlElement>,
    grid: Option<web::HtmlElement>,
    pointer: PointerTracker,
    nav_links: Vec<(Section, web::HtmlElement)>,
    inbox: SectionInbox,
    _observer: Option<SectionObserver>,
    published: Option<SectionProgress>,
}

impl HomeSession {
    pub fn mount(root: &web::Element, ids: Vec<String>, viewport_width: f64, now_sec: f64) -> Self {
        let dom_cards: Vec<(String, web::HtmlElement)> = dom::query_all(root, ".project-card")
            .into_iter()
            .filter_map(|el| el.get_attribute("data-project-id").map(|id| (id, el)))
            .collect();
        let cards = ids
            .iter()
            .map(|id| {
                let (_, el) = dom_cards.iter().find(|(card_id, _)| card_id == id)?;
                let details = el.query_selector(".project-details-hidden").ok().flatten();
                Some(CardView {
                    el: el.clone(),
                    details,
                    style: String::new(),
                    flags: None,
                })
            })
            .collect();

        let nav_links = dom::query_all(root, ".sidebar-link")
            .into_iter()
            .filter_map(|el| {
                let section = el
                    .get_attribute("data-section")
                    .and_then(|s| Section::from_anchor_id(&s))?;
                Some((section, el))
            })
            .collect();

        let inbox: SectionInbox = Rc::new(RefCell::new(Vec::new()));
        let observer = match SectionObserver::observe(root, inbox.clone()) {
            Ok(o) => Some(o),
            Err(e) => {
                log::warn!("[home] section observer unavailable: {e}");
                None
            }
        };

        let html = |sel: &str| dom::query_all(root, sel).into_iter().next();
        log::info!("[home] mounted {} cards", ids.len());
        Self {
            stage: CardStage::new(ids, viewport_width, now_sec),
            cards,
            projects: html("#projects"),
            grid: html(".projects-grid"),
            pointer: PointerTracker::default(),
            nav_links,
            inbox,
            _observer: observer,
            published: None,
        }
    }

    #[inline]
    pub fn handle(&mut self, input: StageInput<'_>) -> Option<StageCommand> {
        self.stage.handle(input)
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        if let Some(grid) = &self.grid {
            let r = grid.get_bounding_client_rect();
            self.pointer.set_bounds(Bounds::new(
                r.left() as f32,
                r.top() as f32,
                r.width() as f32,
                r.height() as f32,
            ));
        }
        self.pointer.sample(client_x, client_y);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.leave();
    }

    pub fn set_viewport_width(&mut self, width_px: f64, now_sec: f64) {
        self.stage.set_viewport_width(width_px, now_sec);
    }

    pub fn drain_sections(&self) -> Vec<(Section, f64)> {
        self.inbox.borrow_mut().drain(..).collect()
    }

    pub fn set_active_section(&self, active: Section) {
        for (section, link) in &self.nav_links {
            dom::set_class(link, "active", *section == active);
        }
    }

    /// `(offset_top, height)` of the projects section in document coordinates.
    pub fn projects_span(&self, scroll_y: f64) -> Option<(f64, f64)> {
        let r = self.projects.as_ref()?.get_bounding_client_rect();
        Some((r.top() + scroll_y, r.height()))
    }

    pub fn publish_progress(&mut self, progress: SectionProgress) {
        if self.published == Some(progress) {
            return;
        }
        self.published = Some(progress);
        if let Some(projects) = &self.projects {
            _ = projects
                .style()
                .set_property(PROGRESS_PROPERTY, &format!("{:.4}", progress.css_value()));
            dom::set_class(projects, "passed", progress == SectionProgress::Passed);
        }
    }

    /// Per-frame card pass: glow bookkeeping, one layout from one pointer
    /// snapshot, then DOM writes.
    pub fn frame<R: Rng + ?Sized>(&mut self, now_sec: f64, rng: &mut R) {
        self.stage.tick_glow(now_sec, rng);
        let frames = self.stage.layout(now_sec, &self.pointer.state());
        for frame in &frames {
            if let Some(Some(card)) = self.cards.get_mut(frame.index) {
                card.apply(frame);
            }
        }
    }
}

impl Drop for HomeSession {
    fn drop(&mut self) {
        self.stage.teardown();
    }
}
