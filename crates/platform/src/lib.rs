use std::sync::Arc;
use std::{thread, time::Duration};

use egui::{Align2, CentralPanel, Color32, Context as EguiContext, FontId, Pos2, Rect, Vec2};
use gfx::{EguiClock, EguiEditController, EguiGlyphMetrics, Renderer};
use input_core::{EditConfig, EditController, FieldId};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    error::EventLoopError,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

const LOG_TARGET: &str = "platform";

const TEXT_FIELD: FieldId = FieldId::from_raw(1);
const NOTE_FIELD: FieldId = FieldId::from_raw(2);

enum UserEvent {
    Tick,
}

pub fn run() -> Result<(), EventLoopError> {
    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;

    let proxy = event_loop.create_proxy();

    let mut app = PlatformApp {
        window: None,
        renderer: None,
        proxy: Some(proxy),
        ticker_started: false,
        demo: None,
    };
    event_loop.run_app(&mut app)
}

struct PlatformApp {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    proxy: Option<EventLoopProxy<UserEvent>>,
    ticker_started: bool,
    demo: Option<DemoScreen>,
}

/// A label and two input boxes at fixed positions.
struct DemoScreen {
    controller: EguiEditController,
}

impl DemoScreen {
    fn new(ctx: &EguiContext) -> Self {
        let config = EditConfig::default();
        let metrics = EguiGlyphMetrics::monospace(ctx, config.text_scale);
        let controller = EditController::with_clock(config, metrics, EguiClock::new(ctx));
        Self { controller }
    }

    fn show(&mut self, ctx: &EguiContext) {
        gfx::route_frame_input(ctx, &mut self.controller);

        CentralPanel::default().show(ctx, |ui| {
            ui.painter().text(
                Pos2::new(100.0, 50.0),
                Align2::LEFT_TOP,
                "Type below:",
                FontId::monospace(24.0),
                Color32::WHITE,
            );

            gfx::input_box(
                ui,
                &mut self.controller,
                TEXT_FIELD,
                Rect::from_min_size(Pos2::new(100.0, 200.0), Vec2::new(300.0, 30.0)),
                "Enter text here...",
            );
            gfx::input_box(
                ui,
                &mut self.controller,
                NOTE_FIELD,
                Rect::from_min_size(Pos2::new(100.0, 250.0), Vec2::new(300.0, 30.0)),
                "",
            );
        });
    }
}

impl ApplicationHandler<UserEvent> for PlatformApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = Window::default_attributes()
                .with_title("tinyedit")
                .with_inner_size(LogicalSize::new(800.0, 600.0));
            match event_loop.create_window(attributes) {
                Ok(window) => self.window = Some(Arc::new(window)),
                Err(err) => {
                    log::error!(target: LOG_TARGET, "failed to create window: {err}");
                    event_loop.exit();
                    return;
                }
            }
        }

        if !self.ticker_started {
            self.ticker_started = true;

            if let Some(proxy) = self.proxy.clone() {
                thread::spawn(move || {
                    let frame = Duration::from_millis(16); // ~60Hz
                    loop {
                        if proxy.send_event(UserEvent::Tick).is_err() {
                            break;
                        }
                        thread::sleep(frame);
                    }
                });
            }
        }

        if self.renderer.is_some() {
            return;
        }
        let Some(window) = self.window.as_ref() else {
            return;
        };
        match Renderer::new(Arc::clone(window)) {
            Ok(renderer) => {
                self.demo = Some(DemoScreen::new(renderer.context()));
                self.renderer = Some(renderer);
            }
            Err(err) => {
                log::error!(target: LOG_TARGET, "renderer setup failed: {err}");
                event_loop.exit();
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) else {
            return;
        };
        renderer.on_window_event(window, &event);

        match event {
            WindowEvent::CloseRequested => {
                log::debug!(target: LOG_TARGET, "close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                renderer.resize(new_size);
            }
            WindowEvent::RedrawRequested => {
                let Some(demo) = self.demo.as_mut() else {
                    return;
                };
                renderer.render(window, |ctx| demo.show(ctx));
            }
            _ => {}
        }
    }
}
