use crate::core::constants::{CAMERA_FOVY_DEG, SCENE_CLEAR_RGB};
use crate::core::model::MeshData;
use crate::core::region::ErrorSink;
use crate::core::scene::{PointVertex, SceneFrame};
use glam::Mat4;
use web_sys as web;

mod body;
mod helpers;
mod points;

use body::{create_body_pipelines, BodyPipelines, GpuMesh};
use points::{create_points_pipeline, PointLayer, PointsPipeline};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    eye_time: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LayerUniforms {
    model: [[f32; 4]; 4],
    tint: [f32; 4],
}

impl LayerUniforms {
    fn new(model: Mat4, opacity: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            tint: [1.0, 1.0, 1.0, opacity],
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    frame_buffer: wgpu::Buffer,
    frame_bg: wgpu::BindGroup,

    points: PointsPipeline,
    stars: PointLayer,
    particles: PointLayer,

    body: BodyPipelines,
    body_buffer: wgpu::Buffer,
    body_bg: wgpu::BindGroup,
    sphere: GpuMesh,
    model: Option<GpuMesh>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    device_errors: ErrorSink,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        stars: &[PointVertex],
        particles: &[PointVertex],
        sphere: &MeshData,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        // Validation and out-of-memory errors would otherwise hit wgpu's panicking default handler.
        let device_errors = ErrorSink::new();
        {
            let sink = device_errors.clone();
            device.on_uncaptured_error(Box::new(move |e: wgpu::Error| sink.record(e)));
        }
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let frame_bgl = helpers::uniform_layout(&device, "frame_bgl");
        let layer_bgl = helpers::uniform_layout(&device, "layer_bgl");
        let (frame_buffer, frame_bg) =
            helpers::uniform_binding::<FrameUniforms>(&device, &frame_bgl, "frame_uniforms");

        let points = create_points_pipeline(&device, &frame_bgl, &layer_bgl, format);
        let stars = PointLayer::new(&device, &layer_bgl, "stars", stars);
        let particles = PointLayer::new(&device, &layer_bgl, "particles", particles);

        let body = create_body_pipelines(&device, &frame_bgl, &layer_bgl, format);
        let (body_buffer, body_bg) =
            helpers::uniform_binding::<LayerUniforms>(&device, &layer_bgl, "body_uniforms");
        let sphere = GpuMesh::new(&device, "sphere", sphere);

        let [r, g, b] = SCENE_CLEAR_RGB;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_tex,
            depth_view,
            frame_buffer,
            frame_bg,
            points,
            stars,
            particles,
            body,
            body_buffer,
            body_bg,
            sphere,
            model: None,
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
            device_errors,
        })
    }

    #[inline]
    pub fn device_errors(&self) -> &ErrorSink {
        &self.device_errors
    }

    pub fn set_model(&mut self, mesh: &MeshData) {
        self.model = Some(GpuMesh::new(&self.device, "model", mesh));
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            (self.depth_tex, self.depth_view) =
                helpers::create_depth_texture(&self.device, width, height);
        }
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn upload_particles(&self, points: &[PointVertex]) {
        self.particles.upload(&self.queue, points);
    }

    pub fn render(&mut self, f: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        let point_scale = 0.5 * (CAMERA_FOVY_DEG.to_radians() * 0.5).tan();
        let fu = FrameUniforms {
            view: f.view.to_cols_array_2d(),
            proj: f.proj.to_cols_array_2d(),
            eye_time: [f.eye.x, f.eye.y, f.eye.z, f.time_sec],
            params: [point_scale, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&fu));
        self.queue.write_buffer(
            &self.stars.uniform_buffer,
            0,
            bytemuck::bytes_of(&LayerUniforms::new(f.star_model, 1.0)),
        );
        self.queue.write_buffer(
            &self.particles.uniform_buffer,
            0,
            bytemuck::bytes_of(&LayerUniforms::new(f.particle_model, f.particle_opacity)),
        );
        self.queue.write_buffer(
            &self.body_buffer,
            0,
            bytemuck::bytes_of(&LayerUniforms::new(f.focal.model, f.focal.opacity)),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Opaque-ish body first so sprites depth-test against it.
            if f.focal.opacity > 0.001 {
                let (pipeline, mesh) = match (&self.model, f.use_asset) {
                    (Some(m), true) => (&self.body.model, m),
                    _ => (&self.body.moon, &self.sphere),
                };
                rpass.set_pipeline(pipeline);
                rpass.set_bind_group(0, &self.frame_bg, &[]);
                rpass.set_bind_group(1, &self.body_bg, &[]);
                rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
                rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.points.pipeline);
            rpass.set_bind_group(0, &self.frame_bg, &[]);
            rpass.set_vertex_buffer(0, self.points.quad_vb.slice(..));
            for layer in [&self.stars, &self.particles] {
                rpass.set_bind_group(1, &layer.bind_group, &[]);
                rpass.set_vertex_buffer(1, layer.instances.slice(..));
                rpass.draw(0..6, 0..layer.count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
