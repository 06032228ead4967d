use crate::asset::{AssetEvent, AssetInbox};
use crate::core::model::MeshData;
use crate::core::region::Region;
use crate::core::scene::{BackgroundScene, SceneInput};
use crate::dom;
use crate::overlay;
use crate::render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Filled by the async GPU initialisation task.
pub type GpuSlot = Rc<RefCell<Option<anyhow::Result<GpuState>>>>;

/// The decorative 3D layer behind every route.
///
/// All drawing goes through a [`Region`]; once it fails the canvas is
/// swapped for the gradient panel and nothing here runs again.
pub struct Background {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    pub scene: BackgroundScene,
    gpu: Option<GpuState>,
    gpu_slot: GpuSlot,
    assets: AssetInbox,
    pending_mesh: Option<MeshData>,
    region: Region,
}

impl Background {
    pub fn new(
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        scene: BackgroundScene,
        gpu_slot: GpuSlot,
        assets: AssetInbox,
    ) -> Self {
        Self {
            document,
            canvas,
            scene,
            gpu: None,
            gpu_slot,
            assets,
            pending_mesh: None,
            region: Region::new("scene"),
        }
    }

    pub fn pulse(&mut self, now_sec: f64) {
        self.scene.focal.pulse(now_sec);
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.scene.rig.set_aspect(aspect);
        }
    }

    fn collect_gpu(&mut self) {
        let Some(result) = self.gpu_slot.borrow_mut().take() else {
            return;
        };
        match result {
            Ok(mut gpu) => {
                log::info!("[scene] WebGPU ready");
                if let Some(mesh) = self.pending_mesh.take() {
                    gpu.set_model(&mesh);
                    self.scene.source = self.scene.source.load_resolved(true);
                }
                self.gpu = Some(gpu);
            }
            Err(e) => self.region.fail(format!("WebGPU init: {e:?}")),
        }
    }

    fn drain_assets(&mut self) {
        let events: Vec<AssetEvent> = self.assets.borrow_mut().drain(..).collect();
        for ev in events {
            match ev {
                AssetEvent::Probed(true) => {
                    log::info!("[scene] model found, loading");
                    self.scene.source = self.scene.source.probe_resolved(true);
                }
                AssetEvent::Probed(false) => {
                    log::warn!("[scene] model missing, using procedural body");
                    self.scene.source = self.scene.source.probe_resolved(false);
                }
                AssetEvent::Loaded(mesh) => {
                    log::info!("[scene] model parsed ({} triangles)", mesh.triangle_count());
                    match self.gpu.as_mut() {
                        Some(gpu) => {
                            gpu.set_model(&mesh);
                            self.scene.source = self.scene.source.load_resolved(true);
                        }
                        None => self.pending_mesh = Some(mesh),
                    }
                }
                AssetEvent::Failed(e) => {
                    log::warn!("[scene] model load failed, using procedural body: {e}");
                    self.scene.source = self.scene.source.load_resolved(false);
                }
            }
        }
    }

    pub fn frame(&mut self, input: SceneInput) {
        if !self.region.is_live() {
            return;
        }
        self.collect_gpu();
        self.drain_assets();
        if !self.region.is_live() {
            overlay::show_fallback(&self.document, &self.canvas);
            return;
        }

        let frame = self.scene.tick(input);
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let width = self.canvas.width();
        let height = self.canvas.height();
        let particles = &self.scene.particles.points;
        self.region.render(|| {
            // Device errors raised since the last frame (model upload included).
            gpu.device_errors().check()?;
            gpu.resize_if_needed(width, height);
            if frame.particles_dirty {
                gpu.upload_particles(particles);
            }
            match gpu.render(&frame) {
                Ok(()) | Err(wgpu::SurfaceError::Timeout) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(e) => return Err(e.to_string()),
            }
            gpu.device_errors().check()
        });
        if !self.region.is_live() {
            self.gpu = None;
            overlay::show_fallback(&self.document, &self.canvas);
        }
    }

    pub fn on_resize(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if h > 0 {
            self.set_aspect(w as f32 / h as f32);
        }
    }
}
