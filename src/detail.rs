use crate::core::catalog::ProjectRecord;
use crate::core::lightbox::{Lightbox, LightboxKey};
use crate::core::templates;
use crate::dom::{self, Listener};
use crate::events::keyboard;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Lightbox state plus the element it renders into.
pub struct GalleryViewer {
    lightbox: Lightbox,
    gallery: Vec<String>,
    base: String,
    root: Option<web::Element>,
}

impl GalleryViewer {
    fn new(record: &ProjectRecord, base: &str, root: Option<web::Element>) -> Self {
        // Galleries without an overview are display-only.
        let len = if record.has_overview() {
            record.gallery.len()
        } else {
            0
        };
        Self {
            lightbox: Lightbox::new(len),
            gallery: record.gallery.clone(),
            base: base.to_string(),
            root,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.lightbox.is_open()
    }

    fn sync(&self) {
        let Some(root) = &self.root else {
            return;
        };
        let html = templates::lightbox(&self.base, &self.gallery, &self.lightbox);
        root.set_inner_html(&html);
        if let Some(body) = dom::window_document().and_then(|d| d.body()) {
            dom::set_class(&body, "lightbox-open", self.lightbox.is_open());
        }
    }

    pub fn open(&mut self, index: usize) {
        if self.lightbox.open(index) {
            log::debug!("[lightbox] open {}", index);
            self.sync();
        }
    }

    pub fn key(&mut self, key: LightboxKey) {
        if self.lightbox.handle_key(key) {
            self.sync();
        }
    }

    pub fn action(&mut self, action: &str) {
        let changed = match action {
            "close" if self.lightbox.is_open() => {
                self.lightbox.close();
                true
            }
            "prev" => self.lightbox.previous(),
            "next" => self.lightbox.next(),
            _ => false,
        };
        if changed {
            self.sync();
        }
    }
}

/// Detail route session; the keyboard listener is removed on drop.
pub struct DetailSession {
    id: String,
    viewer: Rc<RefCell<GalleryViewer>>,
    _keys: Option<Listener>,
}

impl DetailSession {
    pub fn mount(window: &web::Window, root: &web::Element, record: &ProjectRecord, base: &str) -> Self {
        let lightbox_root = root.query_selector(".lightbox-root").ok().flatten();
        let viewer = Rc::new(RefCell::new(GalleryViewer::new(record, base, lightbox_root)));
        let keys = match keyboard::wire_lightbox_keys(window, viewer.clone()) {
            Ok(l) => Some(l),
            Err(e) => {
                log::warn!("[detail] keyboard listener unavailable: {e}");
                None
            }
        };
        log::info!("[detail] mounted {}", record.id);
        Self {
            id: record.id.clone(),
            viewer,
            _keys: keys,
        }
    }

    pub fn open_image(&mut self, index: usize) {
        if let Ok(mut v) = self.viewer.try_borrow_mut() {
            v.open(index);
        }
    }

    pub fn lightbox_action(&mut self, action: &str) {
        if let Ok(mut v) = self.viewer.try_borrow_mut() {
            v.action(action);
        }
    }
}

impl Drop for DetailSession {
    fn drop(&mut self) {
        log::debug!("[detail] unmount {}", self.id);
        if let Ok(mut v) = self.viewer.try_borrow_mut() {
            v.lightbox.close();
            v.sync();
        }
    }
}
