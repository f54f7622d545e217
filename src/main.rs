mod assets;
mod game;
mod input;
mod player;
mod render;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use assets::AssetConfig;
use game::{CANVAS_H, CANVAS_W, Game};
use input::InputState;
use player::FRAME_COUNT;
use render::Renderer;

const WALK_ASSET: &str = "assets/walk.png";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new().context("create event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Strider")
            .with_inner_size(LogicalSize::new(CANVAS_W as f64, CANVAS_H as f64))
            .build(&event_loop)
            .context("create window")?,
    );
    let window_for_loop = window.clone();
    let window_for_pixels = window.clone();
    let window_size = window.inner_size();
    let surface_texture =
        SurfaceTexture::new(window_size.width, window_size.height, &window_for_pixels);
    // The backbuffer stays at canvas resolution; only the surface follows
    // window resizes.
    let mut pixels = Pixels::new(CANVAS_W as u32, CANVAS_H as u32, surface_texture)
        .context("create pixel surface")?;

    let renderer = Renderer::new(CANVAS_W as u32, CANVAS_H as u32);

    // Every animation frame decodes before the first tick. A failure swaps
    // the demo for a visible error screen instead of a silent hang.
    let mut game = match assets::load_frames(&AssetConfig::uniform(WALK_ASSET, FRAME_COUNT)) {
        Ok(frames) => Ok(Game::new(frames, Instant::now())),
        Err(err) => {
            log::error!("{err:#}");
            Err(format!("{err:#}"))
        }
    };

    let mut input = InputState::default();
    let tick_dt = Duration::from_micros(16_667); // one tick per 60 Hz display frame
    let mut next_tick = Instant::now() + tick_dt;

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => elwt.exit(),

                    WindowEvent::Resized(size) => {
                        let _ = pixels.resize_surface(size.width, size.height);
                    }

                    WindowEvent::RedrawRequested => {
                        match &game {
                            Ok(game) => renderer.draw(pixels.frame_mut(), game),
                            Err(detail) => renderer.draw_load_error(pixels.frame_mut(), detail),
                        }
                        if let Err(err) = pixels.render() {
                            log::error!("surface present failed: {err}");
                            elwt.exit();
                        }
                    }

                    WindowEvent::KeyboardInput { event, .. } => {
                        let down = event.state == ElementState::Pressed;

                        match event.physical_key {
                            PhysicalKey::Code(KeyCode::ArrowLeft) => input.move_left = down,
                            PhysicalKey::Code(KeyCode::ArrowRight) => input.move_right = down,
                            // Key auto-repeat refires this; the player itself
                            // suppresses jumps while airborne.
                            PhysicalKey::Code(KeyCode::ArrowUp) if down => input.jump = true,
                            _ => {}
                        }
                    }

                    _ => {}
                },

                Event::AboutToWait => {
                    let now = Instant::now();
                    if now >= next_tick {
                        if let Ok(game) = &mut game {
                            game.tick(input, now);
                        }
                        window_for_loop.request_redraw();

                        input.clear_one_shots();
                        next_tick += tick_dt;
                    }
                }

                _ => {}
            }
        })
        .context("run event loop")?;

    Ok(())
}
