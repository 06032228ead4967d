use web_sys as web;

const FALLBACK_ID: &str = "scene-fallback";
const FALLBACK_STYLE: &str = "position:fixed;top:0;left:0;width:100%;height:100%;background:linear-gradient(180deg, #0a0a1e 0%, #1a1a3e 100%);z-index:0;pointer-events:none";

/// Replace the 3D canvas with the static gradient panel. Idempotent.
pub fn show_fallback(document: &web::Document, canvas: &web::HtmlCanvasElement) {
    _ = canvas.set_attribute("style", "display:none");
    if document.get_element_by_id(FALLBACK_ID).is_some() {
        return;
    }
    let Ok(panel) = document.create_element("div") else {
        return;
    };
    panel.set_id(FALLBACK_ID);
    _ = panel.set_attribute("class", "canvas-container");
    _ = panel.set_attribute("style", FALLBACK_STYLE);
    match canvas.parent_element() {
        Some(parent) => {
            _ = parent.insert_before(&panel, Some(canvas));
        }
        None => {
            if let Some(body) = document.body() {
                _ = body.prepend_with_node_1(&panel);
            }
        }
    }
}

