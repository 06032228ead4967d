#![cfg(target_arch = "wasm32")]
use crate::asset::AssetInbox;
use crate::background::{Background, GpuSlot};
use crate::core::catalog::Catalog;
use crate::core::config::{AppConfig, ConfigError};
use crate::core::constants::FOCAL_SPHERE_SEGMENTS;
use crate::core::model::MeshData;
use crate::core::scene::BackgroundScene;
use crate::dom::Listener;
use crate::frame::{FrameContext, FrameLoop, Navigation};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod asset;
mod background;
mod core;
mod detail;
mod dom;
mod events;
mod frame;
mod grid;
mod overlay;
mod render;
mod router;

/// Everything that lives for the whole page session.
struct App {
    _listeners: Vec<Listener>,
    _frame_loop: FrameLoop,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn read_config(document: &web::Document) -> Result<AppConfig, ConfigError> {
    let base = dom::body_attr(document, "data-base-url");
    let level = dom::body_attr(document, "data-log-level");
    let model = dom::body_attr(document, "data-model-path");
    AppConfig::from_attrs(base.as_deref(), level.as_deref(), model.as_deref())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let parsed = dom::window_document()
        .map(|d| read_config(&d))
        .unwrap_or_else(|| Ok(AppConfig::default()));
    let cfg = parsed.clone().unwrap_or_default();
    let level = cfg.log_level.to_level().unwrap_or(log::Level::Error);
    console_log::init_with_level(level).ok();
    log::set_max_level(cfg.log_level);
    if let Err(e) = parsed {
        log::warn!("[config] {e}, using defaults");
    }
    log::info!("portfolio-web starting (base {})", cfg.base_url);

    if let Err(e) = init(cfg) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Drop the app: cancels the frame loop and removes every listener.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|app| app.borrow_mut().take());
    log::info!("portfolio-web stopped");
}

fn build_background(
    document: &web::Document,
    cfg: &AppConfig,
    rng: &mut StdRng,
) -> anyhow::Result<Background> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("bg-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #bg-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::sync_canvas_backing_size(&canvas);
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let scene = BackgroundScene::new(rng, aspect);

    // GPU init and the asset fetch both finish in later frames; first paint never waits.
    let gpu_slot: GpuSlot = Rc::new(RefCell::new(None));
    {
        let slot = gpu_slot.clone();
        let canvas = canvas.clone();
        let stars = scene.stars.points.clone();
        let particles = scene.particles.points.clone();
        spawn_local(async move {
            let sphere = MeshData::uv_sphere(FOCAL_SPHERE_SEGMENTS);
            let gpu = render::GpuState::new(&canvas, &stars, &particles, &sphere).await;
            *slot.borrow_mut() = Some(gpu);
        });
    }
    let assets: AssetInbox = Rc::new(RefCell::new(Vec::new()));
    asset::spawn_model_load(cfg.model_url(), assets.clone());

    Ok(Background::new(
        document.clone(),
        canvas,
        scene,
        gpu_slot,
        assets,
    ))
}

fn init(cfg: AppConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id("app")
        .ok_or_else(|| anyhow::anyhow!("missing #app"))?;

    let catalog = Rc::new(Catalog::from_json(crate::core::CATALOG_JSON)?);
    log::info!("[catalog] {} projects", catalog.len());

    let mut rng = StdRng::from_entropy();
    let background = match build_background(&document, &cfg, &mut rng) {
        Ok(bg) => Some(bg),
        Err(e) => {
            log::warn!("[scene] background disabled: {:?}", e);
            None
        }
    };

    let route = router::current_route(&window, &cfg.base_url);
    let ctx = Rc::new(RefCell::new(FrameContext::new(
        window.clone(),
        document.clone(),
        root,
        cfg,
        catalog,
        background,
        rng,
    )));
    ctx.borrow_mut().navigate_now(Navigation {
        route,
        push: false,
        anchor: None,
    });

    let listeners = events::wire_global(&window, &document, &ctx)?;
    let frame_loop = FrameLoop::start(window, ctx);
    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            _listeners: listeners,
            _frame_loop: frame_loop,
        })
    });
    Ok(())
}
