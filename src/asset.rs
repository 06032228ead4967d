use crate::core::model::{parse_glb, MeshData};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Results posted by the background fetch task, drained once per frame.
#[derive(Debug)]
pub enum AssetEvent {
    Probed(bool),
    Loaded(MeshData),
    Failed(String),
}

pub type AssetInbox = Rc<RefCell<Vec<AssetEvent>>>;

async fn fetch(url: &str, method: &str) -> anyhow::Result<web::Response> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let opts = web::RequestInit::new();
    opts.set_method(method);
    let req = web::Request::new_with_str_and_init(url, &opts).map_err(|e| anyhow!("{:?}", e))?;
    let resp = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    resp.dyn_into::<web::Response>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Existence check; any network error or non-2xx status counts as absent.
pub async fn probe(url: &str) -> bool {
    match fetch(url, "HEAD").await {
        Ok(resp) => resp.ok(),
        Err(e) => {
            log::debug!("[asset] probe error: {e}");
            false
        }
    }
}

async fn load(url: &str) -> anyhow::Result<MeshData> {
    let resp = fetch(url, "GET").await?;
    if !resp.ok() {
        return Err(anyhow!("HTTP {}", resp.status()));
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    Ok(parse_glb(&bytes)?)
}

/// Fire-and-forget: probe, then fetch and parse. Never blocks the frame loop.
pub fn spawn_model_load(url: String, inbox: AssetInbox) {
    spawn_local(async move {
        let exists = probe(&url).await;
        inbox.borrow_mut().push(AssetEvent::Probed(exists));
        if !exists {
            return;
        }
        let event = match load(&url).await {
            Ok(mesh) => AssetEvent::Loaded(mesh),
            Err(e) => AssetEvent::Failed(e.to_string()),
        };
        inbox.borrow_mut().push(event);
    });
}
