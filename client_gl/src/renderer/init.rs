//! Window and OpenGL 3.3 core context creation

use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use game_core::Config;
use glow::HasContext;
use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

/// The window plus the GL surface and context bound to it
pub struct WindowContext {
    pub window: Window,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
}

impl WindowContext {
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }

    pub fn resize(&self, size: PhysicalSize<u32>) {
        if let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        {
            self.surface.resize(&self.context, width, height);
        }
    }

    pub fn framebuffer_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }
}

/// Open the fixed-size game window and make a GL context current on it
pub fn init_gl(event_loop: &ActiveEventLoop, config: &Config) -> Result<(WindowContext, glow::Context)> {
    let window_attributes = Window::default_attributes()
        .with_title(config.window_title.as_str())
        .with_inner_size(PhysicalSize::new(config.window_width, config.window_height))
        .with_resizable(false);

    let (window, gl_config) = DisplayBuilder::new()
        .with_window_attributes(Some(window_attributes))
        .build(event_loop, ConfigTemplateBuilder::new(), |configs| {
            configs
                .reduce(|best, next| {
                    if next.num_samples() > best.num_samples() {
                        next
                    } else {
                        best
                    }
                })
                .expect("display offered no GL configs")
        })
        .map_err(|e| anyhow!("failed to create window: {e}"))?;
    let window = window.context("display builder returned no window")?;

    let raw_window_handle = window.window_handle().ok().map(|handle| handle.as_raw());
    let display = gl_config.display();
    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .with_profile(GlProfile::Core)
        .build(raw_window_handle);

    let not_current = unsafe { display.create_context(&gl_config, &context_attributes) }
        .context("failed to create OpenGL 3.3 core context")?;

    let surface_attributes = window
        .build_surface_attributes(Default::default())
        .context("failed to describe window surface")?;
    let surface = unsafe { display.create_window_surface(&gl_config, &surface_attributes) }
        .context("failed to create window surface")?;

    let context = not_current
        .make_current(&surface)
        .context("failed to make GL context current")?;

    if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
        log::warn!("vsync unavailable: {e}");
    }

    let gl = unsafe {
        glow::Context::from_loader_function_cstr(|symbol| display.get_proc_address(symbol))
    };
    log::info!("OpenGL {}", unsafe { gl.get_parameter_string(glow::VERSION) });
    log::debug!("GL config: {} samples", gl_config.num_samples());

    Ok((
        WindowContext {
            window,
            surface,
            context,
        },
        gl,
    ))
}
