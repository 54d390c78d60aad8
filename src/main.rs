mod error;
mod renderer;

use eggcken::constants::{FIXED_TIMESTEP, FPS_UPDATE_INTERVAL_SECS, WINDOW_HEIGHT, WINDOW_WIDTH};
use eggcken::{InputSource, PointerInput, SimulationConfig, SimulationState};
use error::AppError;
use renderer::Renderer;
use std::{sync::Arc, time::Instant};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

// --- Main Function ---
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let event_loop = EventLoop::new().map_err(AppError::from)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Eggcken")
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .build(&event_loop)
            .map_err(AppError::from)?,
    );
    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;

    let simulation_config = SimulationConfig::new()
        .with_arena(renderer.size.width as f32, renderer.size.height as f32);
    let mut simulation_state = SimulationState::new(simulation_config);
    let mut pointer = PointerInput::new();

    let mut last_sim_update_time = Instant::now();
    let mut time_accumulator = 0.0_f32;
    let mut last_fps_update_time = Instant::now();
    let mut frames_since_last_fps_update = 0;
    let mut current_fps = 0.0;

    event_loop
        .run(move |event, elwt: &EventLoopWindowTarget<()>| {
            elwt.set_control_flow(ControlFlow::Poll);
            match event {
                Event::AboutToWait => {
                    if !simulation_state.is_paused() {
                        let now = Instant::now();
                        time_accumulator += now.duration_since(last_sim_update_time).as_secs_f32();
                        last_sim_update_time = now;
                        if time_accumulator >= FIXED_TIMESTEP {
                            // A press is injected by the first step only
                            let mut sample = pointer.poll();
                            while time_accumulator >= FIXED_TIMESTEP {
                                simulation_state.update(FIXED_TIMESTEP, &sample);
                                sample.pressed = false;
                                time_accumulator -= FIXED_TIMESTEP;
                            }
                        }
                    } else {
                        last_sim_update_time = Instant::now();
                        time_accumulator = 0.0;
                    }
                    window.request_redraw();
                }
                Event::WindowEvent { window_id, event } if window_id == window.id() => {
                    if pointer.handle_window_event(&event) {
                        return;
                    }
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(physical_size) => {
                            renderer.resize(physical_size);
                            simulation_state
                                .set_arena(physical_size.width as f32, physical_size.height as f32);
                        }
                        WindowEvent::ScaleFactorChanged { .. } => {
                            let new_inner_size = window.inner_size();
                            renderer.resize(new_inner_size);
                            simulation_state.set_arena(
                                new_inner_size.width as f32,
                                new_inner_size.height as f32,
                            );
                        }
                        WindowEvent::KeyboardInput {
                            event: key_event, ..
                        } => {
                            if key_event.state == ElementState::Pressed && !key_event.repeat {
                                match key_event.physical_key {
                                    PhysicalKey::Code(KeyCode::Space) => {
                                        simulation_state.toggle_pause()
                                    }
                                    PhysicalKey::Code(KeyCode::KeyR) => simulation_state.restart(),
                                    PhysicalKey::Code(KeyCode::KeyD) => {
                                        simulation_state.log_unit_info()
                                    }
                                    PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                                    _ => {}
                                }
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            frames_since_last_fps_update += 1;
                            let now = Instant::now();
                            let elapsed_secs =
                                now.duration_since(last_fps_update_time).as_secs_f64();
                            if elapsed_secs >= FPS_UPDATE_INTERVAL_SECS {
                                current_fps = frames_since_last_fps_update as f64 / elapsed_secs;
                                last_fps_update_time = now;
                                frames_since_last_fps_update = 0;
                            }

                            let units = simulation_state.render_units();
                            let interaction = simulation_state.interaction_view();
                            match renderer.render(&units, &interaction) {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    renderer.reconfigure()
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    log::error!("WGPU Error: OutOfMemory");
                                    elwt.exit();
                                }
                                Err(e) => log::error!("WGPU Error: {:?}", e),
                            }

                            let counts = simulation_state.stage_counts();
                            let paused_text = if simulation_state.is_paused() {
                                " [PAUSED]"
                            } else {
                                ""
                            };
                            window.set_title(&format!(
                                "Eggcken - Eggs: {}, Juveniles: {}, Adults: {} - FPS: {:.1}{}",
                                counts.eggs,
                                counts.juveniles,
                                counts.adults,
                                current_fps,
                                paused_text
                            ));
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        })
        .map_err(AppError::from)?;
    Ok(())
}
