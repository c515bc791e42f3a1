//! winit application driving one frame per redraw

use anyhow::{Context, Result};
use game_core::{Config, Game, SystemClock};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::input;
use crate::renderer::init::{init_gl, WindowContext};
use crate::renderer::Renderer;

/// Everything one running game owns, simulation and GPU side
pub struct GameContext {
    game: Game,
    renderer: Renderer<glow::Context>,
    window: WindowContext,
    clock: SystemClock,
}

impl GameContext {
    pub fn new(event_loop: &ActiveEventLoop, config: Config) -> Result<Self> {
        let (window, gl) = init_gl(event_loop, &config)?;

        let mut game = Game::new(config);
        let renderer = Renderer::new(gl, &game).context("failed to set up renderer")?;

        let size = window.framebuffer_size();
        renderer.resize(size.width, size.height);

        let clock = SystemClock::new();
        game.start(&clock);

        Ok(Self {
            game,
            renderer,
            window,
            clock,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Simulate, draw and present one frame
    pub fn frame(&mut self) -> Result<()> {
        self.game.step(&mut self.clock);
        self.renderer.draw(&self.game)?;
        self.window.swap_buffers()
    }
}

pub struct App {
    config: Config,
    context: Option<GameContext>,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            context: None,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.context.is_some() {
            return;
        }

        match GameContext::new(event_loop, self.config.clone()) {
            Ok(context) => {
                log::info!("game started");
                context.window.window.request_redraw();
                self.context = Some(context);
            }
            Err(e) => self.fail(event_loop, e.context("failed to start game")),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(context) = self.context.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if input::is_escape(&event) {
                    log::info!("escape pressed, closing");
                    event_loop.exit();
                } else if let Some((key, action)) = input::translate(&event) {
                    context.game.handle_key(key, action);
                }
            }

            WindowEvent::Resized(size) => {
                context.window.resize(size);
                context.renderer.resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                let result = context.frame();
                if let Err(e) = result {
                    self.fail(event_loop, e);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(context) = &self.context {
            context.window.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(context) = &self.context {
            let score = context.game().score;
            log::info!("final score {} - {}", score.left, score.right);
        }
    }
}
