use egui::{Context as EguiContext, viewport::ViewportId};
use egui_wgpu::{
    Renderer as EguiWgpuRenderer, ScreenDescriptor,
    wgpu::{
        Color, CommandEncoderDescriptor, CompositeAlphaMode, CreateSurfaceError, Device,
        DeviceDescriptor, Features, Instance, InstanceDescriptor, Limits, LoadOp, MemoryHints,
        Operations, PowerPreference, PresentMode, Queue, RenderPassColorAttachment,
        RenderPassDescriptor, RequestAdapterError, RequestAdapterOptions, RequestDeviceError,
        StoreOp, Surface, SurfaceConfiguration, SurfaceError, SurfaceTexture, TextureUsages,
        TextureViewDescriptor, Trace,
    },
};
use egui_winit::State as EguiWinitState;
use std::fmt;
use std::sync::Arc;
use winit::{dpi::PhysicalSize, event::WindowEvent, window::Window};

pub mod clock;
pub mod glyph_metrics;
pub mod input;
pub mod paint;
pub mod theme;
pub mod widget;

pub use clock::EguiClock;
pub use glyph_metrics::EguiGlyphMetrics;
pub use input::{edit_key_for, pointer_sample, route_frame_input};
pub use paint::{InputPaintCtx, paint_input_box};
pub use theme::InputTheme;
pub use widget::{add_input_box, field_rect, input_box, input_box_with_theme};

/// The controller type the egui widgets drive.
pub type EguiEditController = input_core::EditController<EguiGlyphMetrics, EguiClock>;

const LOG_TARGET: &str = "gfx";

/// GPU setup failures. None of these are recoverable for the window that
/// hit them.
#[derive(Debug)]
pub enum RendererError {
    CreateSurface(CreateSurfaceError),
    RequestAdapter(RequestAdapterError),
    RequestDevice(RequestDeviceError),
    NoSurfaceFormat,
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererError::CreateSurface(e) => write!(f, "failed to create surface: {e}"),
            RendererError::RequestAdapter(e) => write!(f, "no suitable adapter: {e}"),
            RendererError::RequestDevice(e) => write!(f, "failed to request device: {e}"),
            RendererError::NoSurfaceFormat => f.write_str("surface reports no texture formats"),
        }
    }
}

impl std::error::Error for RendererError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RendererError::CreateSurface(e) => Some(e),
            RendererError::RequestAdapter(e) => Some(e),
            RendererError::RequestDevice(e) => Some(e),
            RendererError::NoSurfaceFormat => None,
        }
    }
}

/// egui on top of a wgpu surface for one window.
pub struct Renderer {
    ctx: EguiContext,
    winit_state: EguiWinitState,
    painter: EguiWgpuRenderer,
    gpu: Gpu,
}

struct Gpu {
    surface: Surface<'static>,
    device: Device,
    queue: Queue,
    config: SurfaceConfiguration,
}

impl Gpu {
    fn new(window: Arc<Window>) -> Result<Self, RendererError> {
        let size = window.inner_size();
        let instance = Instance::new(&InstanceDescriptor::default());
        let surface = instance
            .create_surface(window)
            .map_err(RendererError::CreateSurface)?;

        let adapter = pollster::block_on(instance.request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::default(),
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .map_err(RendererError::RequestAdapter)?;
        let (device, queue) = pollster::block_on(adapter.request_device(&DeviceDescriptor {
            label: Some("tinyedit device"),
            required_features: Features::empty(),
            required_limits: Limits::default(),
            memory_hints: MemoryHints::default(),
            trace: Trace::default(),
        }))
        .map_err(RendererError::RequestDevice)?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(RendererError::NoSurfaceFormat)?;

        let config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: PresentMode::AutoVsync,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(CompositeAlphaMode::Auto),
            view_formats: Vec::new(),
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::debug!(
            target: LOG_TARGET,
            "surface {}x{} {format:?}",
            config.width,
            config.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Next swapchain texture, or `None` when this frame should be skipped.
    fn acquire(&mut self) -> Option<SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Some(frame),
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                self.reconfigure();
                None
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "skipping frame: {e}");
                None
            }
        }
    }
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, RendererError> {
        let ctx = EguiContext::default();
        let winit_state = EguiWinitState::new(
            ctx.clone(),
            ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let gpu = Gpu::new(window)?;
        let painter = EguiWgpuRenderer::new(&gpu.device, gpu.config.format, None, 1, true);

        Ok(Self {
            ctx,
            winit_state,
            painter,
            gpu,
        })
    }

    pub fn context(&self) -> &EguiContext {
        &self.ctx
    }

    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let _ = self.winit_state.on_window_event(window, event);
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.gpu.config.width = size.width.max(1);
        self.gpu.config.height = size.height.max(1);
        self.gpu.reconfigure();
    }

    /// Run one egui pass with `build_ui` and present it.
    pub fn render(&mut self, window: &Window, build_ui: impl FnMut(&EguiContext)) {
        let Some(frame) = self.gpu.acquire() else {
            return;
        };

        let input = self.winit_state.take_egui_input(window);
        let output = self.ctx.run(input, build_ui);
        self.winit_state
            .handle_platform_output(window, output.platform_output);

        let ppp = output.pixels_per_point;
        let jobs = self.ctx.tessellate(output.shapes, ppp);
        let screen = ScreenDescriptor {
            size_in_pixels: [self.gpu.config.width, self.gpu.config.height],
            pixels_per_point: ppp,
        };
        let Gpu { device, queue, .. } = &self.gpu;

        for (id, delta) in &output.textures_delta.set {
            self.painter.update_texture(device, queue, *id, delta);
        }
        let mut encoder = device.create_command_encoder(&CommandEncoderDescriptor {
            label: Some("tinyedit frame"),
        });
        let mut commands = self
            .painter
            .update_buffers(device, queue, &mut encoder, &jobs, &screen);

        let view = frame.texture.create_view(&TextureViewDescriptor::default());
        {
            let pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("egui"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(Color::BLACK),
                        store: StoreOp::Store,
                    },
                })],
                ..Default::default()
            });
            self.painter
                .render(&mut pass.forget_lifetime(), &jobs, &screen);
        }
        commands.push(encoder.finish());
        queue.submit(commands);

        for id in &output.textures_delta.free {
            self.painter.free_texture(id);
        }
        frame.present();
    }
}
