use super::AppHandle;
use crate::core::constants::SECTION_VISIBILITY_THRESHOLD;
use crate::core::scroll::Section;
use crate::dom::Listener;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Intersection samples waiting for the next frame.
pub type SectionInbox = Rc<RefCell<Vec<(Section, f64)>>>;

type ObserverCallback = dyn FnMut(js_sys::Array, web::IntersectionObserver);

/// Watches the home-page anchor sections; disconnects on drop.
pub struct SectionObserver {
    observer: web::IntersectionObserver,
    _closure: Closure<ObserverCallback>,
}

impl SectionObserver {
    pub fn observe(root: &web::Element, inbox: SectionInbox) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
                let Ok(mut inbox) = inbox.try_borrow_mut() else {
                    return;
                };
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if let Some(section) = Section::from_anchor_id(&entry.target().id()) {
                        inbox.push((section, entry.intersection_ratio()));
                    }
                }
            },
        ) as Box<ObserverCallback>);
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(SECTION_VISIBILITY_THRESHOLD));
        let observer =
            web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow!("{:?}", e))?;
        for section in Section::ALL {
            if let Ok(Some(el)) = root.query_selector(&format!("#{}", section.anchor_id())) {
                observer.observe(&el);
            }
        }
        Ok(Self {
            observer,
            _closure: closure,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub(super) fn wire(window: &web::Window, app: &AppHandle) -> anyhow::Result<Vec<Listener>> {
    // The tracker is shared directly so a scroll event is never lost to a busy context.
    let scroll = app.borrow().scroll.clone();
    let on_scroll = Listener::passive(window, "scroll", move |_ev| {
        scroll.borrow_mut().request();
    })?;

    let app_resize = app.clone();
    let on_resize = Listener::new(window, "resize", move |_ev| {
        if let Ok(mut ctx) = app_resize.try_borrow_mut() {
            ctx.on_resize();
        }
    })?;

    Ok(vec![on_scroll, on_resize])
}
