use crate::core::route::Route;
use crate::core::scroll::Section;
use crate::core::stage::{StageCommand, StageInput};
use crate::dom::{self, Listener};
use crate::frame::{FrameContext, Navigation};
use crate::router;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub type AppHandle = Rc<RefCell<FrameContext>>;

/// Install every app-lifetime listener. Per-route listeners live in the route sessions.
pub fn wire_global(
    window: &web::Window,
    document: &web::Document,
    app: &AppHandle,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = scroll::wire(window, app)?;
    listeners.extend(pointer::wire(window, document, app)?);

    let app_click = app.clone();
    listeners.push(Listener::new(document, "click", move |ev| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if let Ok(mut ctx) = app_click.try_borrow_mut() {
            on_click(&mut ctx, &ev, mouse);
        }
    })?);

    let app_pop = app.clone();
    listeners.push(Listener::new(window, "popstate", move |_ev| {
        if let Ok(mut ctx) = app_pop.try_borrow_mut() {
            let route = router::current_route(&ctx.window, &ctx.cfg.base_url);
            ctx.request_navigation(Navigation {
                route,
                push: false,
                anchor: None,
            });
        }
    })?);

    Ok(listeners)
}

/// Plain left clicks only; modified clicks keep the browser default.
fn is_plain_click(ev: &web::MouseEvent) -> bool {
    ev.button() == 0 && !(ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key())
}

/// Split an in-site href into a route and an optional section anchor.
/// External, mailto and new-tab links return `None`.
fn internal_target(anchor: &web::Element, base: &str) -> Option<(Route, Option<Section>)> {
    if anchor.get_attribute("target").is_some_and(|t| t == "_blank") {
        return None;
    }
    let href = anchor.get_attribute("href")?;
    if href.contains("://") || href.starts_with("mailto:") || href.starts_with("//") {
        return None;
    }
    let (path, fragment) = match href.split_once('#') {
        Some((p, f)) => (p, Some(f)),
        None => (href.as_str(), None),
    };
    let section = fragment.and_then(Section::from_anchor_id);
    if path.is_empty() {
        // Same-page fragment.
        return Some((Route::Home, section));
    }
    Some((Route::parse(path, base), section))
}

fn on_click(ctx: &mut FrameContext, ev: &web::Event, mouse: &web::MouseEvent) {
    let now = ctx.now_sec();
    if let Some(bg) = ctx.background.as_mut() {
        bg.pulse(now);
    }
    if !is_plain_click(mouse) {
        return;
    }

    if let Some(el) = dom::closest(ev, "[data-lightbox]") {
        if let (Some(action), Some(detail)) = (el.get_attribute("data-lightbox"), ctx.detail()) {
            // The backdrop shares the close action; ignore clicks that bubbled from the image.
            let direct = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) == Some(el);
            if action != "close" || direct {
                detail.lightbox_action(&action);
            }
        }
        return;
    }

    if let Some(el) = dom::closest(ev, "[data-gallery-index]") {
        let index = el
            .get_attribute("data-gallery-index")
            .and_then(|s| s.parse::<usize>().ok());
        if let (Some(index), Some(detail)) = (index, ctx.detail()) {
            detail.open_image(index);
        }
        return;
    }

    if let Some(el) = dom::closest(ev, "[data-scroll-to]") {
        if let Some(section) = el
            .get_attribute("data-scroll-to")
            .and_then(|s| Section::from_anchor_id(&s))
        {
            ev.prevent_default();
            ctx.scroll_to_section(section);
        }
        return;
    }

    if let Some(anchor) = dom::closest(ev, "a[href]") {
        if let Some((route, section)) = internal_target(&anchor, &ctx.cfg.base_url) {
            ev.prevent_default();
            if route == ctx.route && route.is_home() {
                if let Some(section) = section {
                    ctx.scroll_to_section(section);
                }
            } else {
                ctx.request_navigation(Navigation {
                    route,
                    push: true,
                    anchor: section,
                });
            }
        }
        return;
    }

    let Some(home) = ctx.home_mut() else {
        return;
    };
    let input = dom::closest(ev, ".project-card").and_then(|c| c.get_attribute("data-project-id"));
    let command = match &input {
        Some(id) => home.handle(StageInput::ClickCard(id)),
        None => home.handle(StageInput::ClickOutside),
    };
    if let Some(StageCommand::OpenDetail(id)) = command {
        ctx.request_navigation(Navigation {
            route: Route::Project(id),
            push: true,
            anchor: None,
        });
    }
}
