/*
 * Application Module
 *
 * This module defines the main application model and the per-frame update.
 * nannou calls `update` once per frame and `view` right after it, so the
 * simulation is ticked exactly once before every render and the two never
 * overlap.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::debug::DebugInfo;
use crate::input;
use crate::params::SimulationParams;
use crate::renderer;
use crate::simulation::Simulation;
use crate::ui;

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    /// Pointer in canvas space; `None` while the cursor is outside the window.
    pub pointer: Option<Point2>,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // 80% of the primary monitor, or a plain 720p window when there is none
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => (1280.0, 720.0),
    };

    let window_id = app
        .new_window()
        .title("Analog Root")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_exited(input::mouse_exited)
        .key_pressed(input::key_pressed)
        .resized(input::resized)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap_or_else(|err| fatal("failed to create window", format!("{:?}", err)));

    let window = match app.window(window_id) {
        Some(window) => window,
        None => fatal("window closed during start-up", "no window"),
    };

    let egui = Egui::from_window(&window);
    let canvas = window.rect();

    let params = SimulationParams::default();
    let simulation = Simulation::new(&params, canvas.w(), canvas.h(), StdRng::from_entropy())
        .unwrap_or_else(|err| fatal("invalid simulation parameters", err));

    log::info!(
        "starting with {} particles on a {:.0}x{:.0} canvas ({} collisions)",
        params.num_particles,
        canvas.w(),
        canvas.h(),
        params.collision_policy.label()
    );

    Model {
        simulation,
        params,
        egui,
        debug_info: DebugInfo::default(),
        pointer: None,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let (should_reset, ui_changed) = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &model.debug_info,
        model.simulation.particles().len(),
    );

    if ui_changed {
        log::debug!(
            "parameters changed: attraction {:.2}, repulsion radius {:.0}, collision radius {:.0}, {} collisions",
            model.params.mouse_attraction,
            model.params.mouse_repulsion_radius,
            model.params.collision_radius,
            model.params.collision_policy.label()
        );
    }

    if should_reset {
        model.simulation.reset(&model.params);
    }

    if !model.params.pause_simulation {
        let stats = model.simulation.tick(&model.params, model.pointer);
        model.debug_info.record_tick(stats);
    }
}

fn fatal(context: &str, err: impl std::fmt::Display) -> ! {
    log::error!("{}: {}", context, err);
    std::process::exit(1)
}
