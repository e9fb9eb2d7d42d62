/*
 * Input Module
 *
 * This module handles window events: the pointer that drives the particle
 * orbit, canvas resizes, and the keyboard shortcuts.
 *
 * Keys:
 * - H: show/hide the control panel
 * - D: toggle the debug overlay
 * - Space: pause/resume
 * - R: respawn all particles
 * - C: switch collision policy
 * - S: save the current frame as a PNG
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::coords::window_to_canvas;

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    model.pointer = Some(window_to_canvas(pos, app.window_rect()));
}

// The pointer stops interacting as soon as it leaves the window
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.pointer = None;
}

pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.simulation.resize(size.x, size.y);
    log::debug!("canvas resized to {:.0}x{:.0}", size.x, size.y);
}

pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    // Leave keys to egui while a widget has keyboard focus
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::H => model.params.show_ui = !model.params.show_ui,
        Key::D => model.params.show_debug = !model.params.show_debug,
        Key::Space => model.params.pause_simulation = !model.params.pause_simulation,
        Key::R => model.simulation.reset(&model.params),
        Key::C => {
            model.params.collision_policy = model.params.collision_policy.next();
            log::debug!("collision policy: {}", model.params.collision_policy.label());
        }
        Key::S => save_screenshot(app, model),
        _ => {}
    }
}

fn save_screenshot(app: &App, model: &Model) {
    let path = format!("analog_root_{:06}.png", model.simulation.frame_count());
    app.main_window().capture_frame(&path);
    log::info!("saving frame to {}", path);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
