use crate::core::lightbox::LightboxKey;
use crate::detail::GalleryViewer;
use crate::dom::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Lightbox keys; only installed while a detail view is mounted.
pub fn wire_lightbox_keys(
    window: &web::Window,
    viewer: Rc<RefCell<GalleryViewer>>,
) -> anyhow::Result<Listener> {
    Listener::new(window, "keydown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        let Some(key) = LightboxKey::from_key(&ev.key()) else {
            return;
        };
        let Ok(mut viewer) = viewer.try_borrow_mut() else {
            return;
        };
        if !viewer.is_open() {
            return;
        }
        ev.prevent_default();
        viewer.key(key);
    })
}
