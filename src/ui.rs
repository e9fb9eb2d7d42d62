/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It exposes the interaction settings that are safe to
 * change while the animation runs, plus live collision metrics.
 */

use nannou_egui::{egui, Egui};

use crate::collision::CollisionPolicy;
use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether particles should be respawned and whether any setting changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    particle_count: usize,
) -> (bool, bool) {
    let mut should_reset = false;

    let before = params.snapshot();

    let ctx = egui.begin_frame();

    if params.show_ui {
        egui::Window::new("Simulation Controls")
            .default_pos([10.0, 10.0])
            .show(&ctx, |ui| {
                ui.collapsing("Particles", |ui| {
                    ui.label(format!("Particles: {}", particle_count));
                    if ui.button("Reset Particles").clicked() {
                        should_reset = true;
                    }
                });

                ui.collapsing("Pointer", |ui| {
                    ui.add(
                        egui::Slider::new(
                            &mut params.mouse_attraction,
                            SimulationParams::get_attraction_range(),
                        )
                        .text("Attraction"),
                    );
                    ui.add(
                        egui::Slider::new(
                            &mut params.mouse_repulsion_radius,
                            SimulationParams::get_repulsion_radius_range(),
                        )
                        .text("Orbit Radius"),
                    );
                });

                ui.collapsing("Collisions", |ui| {
                    ui.add(
                        egui::Slider::new(
                            &mut params.collision_radius,
                            SimulationParams::get_collision_radius_range(),
                        )
                        .text("Collision Radius"),
                    );
                    let policy = &mut params.collision_policy;
                    ui.radio_value(policy, CollisionPolicy::Immediate, "Rebirth immediately");
                    ui.radio_value(policy, CollisionPolicy::Snapshot, "Detect, then rebirth");
                });

                ui.collapsing("Effects", |ui| {
                    ui.checkbox(&mut params.show_scanlines, "Scanlines");
                    ui.checkbox(&mut params.enable_glitch, "Glitch Frames");
                });

                ui.collapsing("Performance", |ui| {
                    ui.label(format!("FPS: {:.1}", debug_info.fps));
                    let frame_ms = debug_info.frame_time.as_secs_f64() * 1000.0;
                    ui.label(format!("Frame time: {:.2} ms", frame_ms));
                    ui.label(format!("Frame: {}", debug_info.last_tick.frame));
                    let collisions = debug_info.last_tick.collisions;
                    ui.label(format!("Collisions (last tick): {}", collisions));
                    ui.label(format!("Rebirths (total): {}", debug_info.total_rebirths));
                });

                ui.checkbox(&mut params.show_debug, "Show Debug Info");
                ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
            });
    }

    let ui_changed = params.changed_since(&before);

    (should_reset, ui_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    particle_count: usize,
    policy: CollisionPolicy,
) {
    // Background panel in the top-right corner, clear of the controls window
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 240.0;
    let panel_height = line_height * 6.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    let last = debug_info.last_tick;
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Particles: {}", particle_count),
        format!("Collisions: {} ({} total)", last.collisions, debug_info.total_collisions),
        format!("Rebirths: {} ({} total)", last.rebirths, debug_info.total_rebirths),
        format!("Policy: {}", policy.label()),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 90.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
