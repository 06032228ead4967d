use crate::core::catalog::Catalog;
use crate::core::route::Route;
use crate::core::templates::{self, Profile};
use crate::detail::DetailSession;
use crate::grid::HomeSession;
use anyhow::anyhow;
use wasm_bindgen::JsValue;
use web_sys as web;

/// What is currently mounted in `#app`.
pub enum Page {
    Blank,
    Home(HomeSession),
    AllProjects,
    Detail(DetailSession),
}

pub fn current_route(window: &web::Window, base: &str) -> Route {
    window
        .location()
        .pathname()
        .map(|p| Route::parse(&p, base))
        .unwrap_or_default()
}

pub fn push_state(window: &web::Window, path: &str) {
    if let Ok(history) = window.history() {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::warn!("[router] pushState failed: {:?}", e);
        }
    }
}

pub fn replace_state(window: &web::Window, path: &str) {
    if let Ok(history) = window.history() {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::warn!("[router] replaceState failed: {:?}", e);
        }
    }
}

/// Render `route` into `root` and attach its session. `route` must already be
/// resolved against the catalog.
pub fn mount(
    window: &web::Window,
    root: &web::Element,
    catalog: &Catalog,
    base: &str,
    route: &Route,
    viewport_width: f64,
    now_sec: f64,
) -> anyhow::Result<Page> {
    match route {
        Route::Home => {
            root.set_inner_html(&templates::home_page(catalog, base, &Profile::default()));
            Ok(Page::Home(HomeSession::mount(
                root,
                catalog.ids(),
                viewport_width,
                now_sec,
            )))
        }
        Route::AllProjects => {
            root.set_inner_html(&templates::all_projects_page(catalog, base));
            log::info!("[router] mounted all-projects");
            Ok(Page::AllProjects)
        }
        Route::Project(id) => {
            let record = catalog
                .get(id)
                .ok_or_else(|| anyhow!("project {id:?} vanished from catalog"))?;
            root.set_inner_html(&templates::detail_page(
                record,
                catalog.adjacent(id),
                base,
            ));
            Ok(Page::Detail(DetailSession::mount(window, root, record, base)))
        }
    }
}
