use super::AppHandle;
use crate::core::stage::StageInput;
use crate::dom::{self, Listener};
use wasm_bindgen::JsCast;
use web_sys as web;

const CARD_SELECTOR: &str = ".project-card";

/// Card under the event target plus its id.
fn card_of(ev: &web::Event) -> Option<(web::Element, String)> {
    let card = dom::closest(ev, CARD_SELECTOR)?;
    let id = card.get_attribute("data-project-id")?;
    Some((card, id))
}

/// True when the pointer moved between two nodes of the same card.
fn stays_inside(card: &web::Element, ev: &web::MouseEvent) -> bool {
    ev.related_target()
        .and_then(|t| t.dyn_into::<web::Node>().ok())
        .is_some_and(|node| card.contains(Some(&node)))
}

pub(super) fn wire(
    window: &web::Window,
    document: &web::Document,
    app: &AppHandle,
) -> anyhow::Result<Vec<Listener>> {
    let viewport = app.borrow().viewport.clone();
    let app_move = app.clone();
    let on_move = Listener::passive(window, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        viewport.borrow_mut().sample(x, y);
        if let Ok(mut ctx) = app_move.try_borrow_mut() {
            if let Some(home) = ctx.home_mut() {
                home.pointer_move(x, y);
            }
        }
    })?;

    let app_over = app.clone();
    let on_over = Listener::passive(document, "mouseover", move |ev| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Some((card, id)) = card_of(&ev) else {
            return;
        };
        if stays_inside(&card, mouse) {
            return;
        }
        if let Ok(mut ctx) = app_over.try_borrow_mut() {
            if let Some(home) = ctx.home_mut() {
                home.handle(StageInput::PointerEnter(&id));
            }
        }
    })?;

    let viewport_out = app.borrow().viewport.clone();
    let app_out = app.clone();
    let on_out = Listener::passive(document, "mouseout", move |ev| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Ok(mut ctx) = app_out.try_borrow_mut() else {
            return;
        };
        if mouse.related_target().is_none() {
            // Left the window entirely.
            viewport_out.borrow_mut().leave();
            if let Some(home) = ctx.home_mut() {
                home.pointer_leave();
            }
        }
        let Some((card, id)) = card_of(&ev) else {
            return;
        };
        if stays_inside(&card, mouse) {
            return;
        }
        if let Some(home) = ctx.home_mut() {
            home.handle(StageInput::PointerLeave(&id));
        }
    })?;

    Ok(vec![on_move, on_over, on_out])
}
