use crate::background::Background;
use crate::core::catalog::Catalog;
use crate::core::config::AppConfig;
use crate::core::pointer::{Bounds, PointerTracker};
use crate::core::route::{resolve, Resolution, Route};
use crate::core::scene::{scene_progress, SceneInput};
use crate::core::scroll::{ScrollGeometry, ScrollTracker, Section};
use crate::detail::DetailSession;
use crate::dom;
use crate::grid::HomeSession;
use crate::router::{self, Page};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A route change requested by an event handler, applied at the start of the next frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Navigation {
    pub route: Route,
    pub push: bool,
    pub anchor: Option<Section>,
}

pub struct FrameContext {
    pub window: web::Window,
    pub document: web::Document,
    pub root: web::Element,
    pub cfg: AppConfig,
    pub catalog: Rc<Catalog>,

    pub scroll: Rc<RefCell<ScrollTracker>>,
    pub viewport: Rc<RefCell<PointerTracker>>,
    pub background: Option<Background>,

    pub page: Page,
    pub route: Route,
    pending: Option<Navigation>,

    rng: StdRng,
    start: Instant,
    last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        window: web::Window,
        document: web::Document,
        root: web::Element,
        cfg: AppConfig,
        catalog: Rc<Catalog>,
        background: Option<Background>,
        rng: StdRng,
    ) -> Self {
        let (w, h) = dom::viewport_size(&window);
        let now = Instant::now();
        Self {
            window,
            document,
            root,
            cfg,
            catalog,
            scroll: Rc::new(RefCell::new(ScrollTracker::new())),
            viewport: Rc::new(RefCell::new(PointerTracker::new(Bounds::viewport(
                w as f32, h as f32,
            )))),
            background,
            page: Page::Blank,
            route: Route::Home,
            pending: None,
            rng,
            start: now,
            last_instant: now,
        }
    }

    #[inline]
    pub fn now_sec(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    pub fn home_mut(&mut self) -> Option<&mut HomeSession> {
        match &mut self.page {
            Page::Home(h) => Some(h),
            _ => None,
        }
    }

    pub fn detail(&mut self) -> Option<&mut DetailSession> {
        match &mut self.page {
            Page::Detail(d) => Some(d),
            _ => None,
        }
    }

    /// Last request in a frame wins.
    pub fn request_navigation(&mut self, nav: Navigation) {
        self.pending = Some(nav);
    }

    pub fn scroll_to_section(&self, section: Section) {
        if let Some(el) = self.document.get_element_by_id(section.anchor_id()) {
            dom::scroll_into_view_smooth(&el);
        }
    }

    fn geometry(&self) -> ScrollGeometry {
        let (_, viewport_height) = dom::viewport_size(&self.window);
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let document_height = self
            .document
            .document_element()
            .map(|e| e.scroll_height() as f64)
            .unwrap_or(0.0);
        let projects_span = match &self.page {
            Page::Home(h) => h.projects_span(scroll_y),
            _ => None,
        };
        ScrollGeometry {
            scroll_y,
            document_height,
            viewport_height,
            projects_span,
        }
    }

    /// Swap the mounted page. The previous session is dropped before the new
    /// markup is written, so its timers and listeners are gone first.
    pub fn navigate_now(&mut self, nav: Navigation) {
        let base = self.cfg.base_url.clone();
        let route = match resolve(nav.route, &self.catalog) {
            Resolution::Render(route) => {
                if nav.push {
                    router::push_state(&self.window, &route.path(&base));
                }
                route
            }
            Resolution::Redirect(route) => {
                router::replace_state(&self.window, &route.path(&base));
                route
            }
        };

        self.page = Page::Blank;
        let (vw, _) = dom::viewport_size(&self.window);
        let now = self.now_sec();
        match router::mount(
            &self.window,
            &self.root,
            &self.catalog,
            &base,
            &route,
            vw,
            now,
        ) {
            Ok(page) => self.page = page,
            Err(e) => log::error!("[router] mount failed: {:?}", e),
        }
        log::info!("[router] route {:?}", route);
        let is_detail = matches!(route, Route::Project(_));
        self.route = route;

        if is_detail {
            dom::scroll_to_top(&self.window, true);
        }
        if let Some(section) = nav.anchor {
            self.scroll_to_section(section);
        }

        // Fresh tracker per mount, primed synchronously so nothing starts from zero.
        let geometry = self.geometry();
        let state = {
            let mut scroll = self.scroll.borrow_mut();
            *scroll = ScrollTracker::new();
            scroll.recompute(&geometry)
        };
        if let Some(home) = self.home_mut() {
            home.publish_progress(state.projects);
        }
    }

    pub fn on_resize(&mut self) {
        let (w, h) = dom::viewport_size(&self.window);
        self.viewport
            .borrow_mut()
            .set_bounds(Bounds::viewport(w as f32, h as f32));
        if let Some(bg) = self.background.as_mut() {
            bg.on_resize();
        }
        let now = self.now_sec();
        if let Some(home) = self.home_mut() {
            home.set_viewport_width(w, now);
        }
        self.scroll.borrow_mut().request();
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if let Some(nav) = self.pending.take() {
            self.navigate_now(nav);
        }
        let t = self.now_sec();

        // Scroll and pointer are sampled before any transform is computed.
        if let Page::Home(home) = &self.page {
            let mut scroll = self.scroll.borrow_mut();
            for (section, ratio) in home.drain_sections() {
                if scroll.observe_section(section, ratio) {
                    home.set_active_section(section);
                    log::debug!("[scroll] section {:?}", section);
                }
            }
        }
        let pending = self.scroll.borrow().is_pending();
        let scroll_state = if pending {
            let geometry = self.geometry();
            self.scroll.borrow_mut().recompute(&geometry)
        } else {
            self.scroll.borrow().state()
        };
        let pointer = self.viewport.borrow().state();

        if let Page::Home(home) = &mut self.page {
            if pending {
                home.publish_progress(scroll_state.projects);
            }
            home.frame(t, &mut self.rng);
        }

        if let Some(bg) = self.background.as_mut() {
            bg.frame(SceneInput {
                now_sec: t,
                dt_sec,
                progress: scene_progress(self.route.is_home(), scroll_state.progress),
                pointer: pointer.signed,
            });
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop that can be cancelled. The tick closure holds a
/// handle to itself; [`FrameLoop::stop`] breaks that cycle.
pub struct FrameLoop {
    window: web::Window,
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
}

fn schedule(window: &web::Window, tick: &Tick) -> Option<i32> {
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

impl FrameLoop {
    pub fn start(window: web::Window, ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let tick_next = tick.clone();
        let handle_next = handle.clone();
        let window_next = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Ok(mut c) = ctx.try_borrow_mut() {
                c.frame();
            }
            handle_next.set(schedule(&window_next, &tick_next));
        }) as Box<dyn FnMut()>));
        handle.set(schedule(&window, &tick));

        Self {
            window,
            tick,
            handle,
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
