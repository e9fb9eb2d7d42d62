/*
 * Renderer Module
 *
 * This module draws the simulation. The frame is never fully cleared:
 * a translucent black layer fades the previous frames into trails. On top
 * of that come the particles as filled squares, a green scanline overlay,
 * and every now and then a glitch frame with posterized colors.
 */

use nannou::color::Srgb;
use nannou::prelude::*;
use rand::Rng;

use crate::app::Model;
use crate::color;
use crate::coords::canvas_to_window;
use crate::params::SimulationParams;
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    if frame.nth() == 0 {
        draw.background().color(BLACK);
    }

    // Fade what is already there instead of clearing
    draw.rect()
        .xy(window_rect.xy())
        .wh(window_rect.wh())
        .color(rgba(0.0, 0.0, 0.0, model.params.trail_alpha));

    let posterize_levels = glitch_levels(&model.params);
    for (index, particle) in model.simulation.particles().iter().enumerate() {
        let hue = model.simulation.hue_of(index).unwrap_or(particle.base_hue);
        let mut fill = Srgb::from(color::particle_color(hue));
        if let Some(levels) = posterize_levels {
            fill = color::posterize(fill, levels);
        }

        // Particles are anchored at their top-left corner
        let half = particle.size / 2.0;
        let centre = canvas_to_window(particle.position + vec2(half, half), window_rect);

        draw.rect()
            .xy(centre)
            .w_h(particle.size, particle.size)
            .color(fill);
    }

    if model.params.show_scanlines {
        draw_scanlines(&draw, window_rect, model.params.scanline_spacing);
    }

    if model.params.show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            window_rect,
            model.simulation.particles().len(),
            model.params.collision_policy,
        );
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame {}: {:?}", frame.nth(), err);
    }

    if model.params.show_ui {
        if let Err(err) = model.egui.draw_to_frame(&frame) {
            log::error!("failed to draw controls: {:?}", err);
        }
    }
}

// Decide whether this frame glitches, and how hard
fn glitch_levels(params: &SimulationParams) -> Option<u8> {
    if !params.enable_glitch {
        return None;
    }
    let mut rng = rand::thread_rng();
    if rng.gen_bool(params.glitch_probability.clamp(0.0, 1.0)) {
        Some(2 + rng.gen_range(0..3))
    } else {
        None
    }
}

fn draw_scanlines(draw: &Draw, window_rect: Rect, spacing: f32) {
    let spacing = spacing.max(1.0);
    let line_color = rgba(0.0, 1.0, 0.0, 120.0 / 255.0);

    let mut y = 0.0;
    while y < window_rect.h() {
        let start = canvas_to_window(pt2(0.0, y), window_rect);
        let end = canvas_to_window(pt2(window_rect.w(), y), window_rect);
        draw.line().start(start).end(end).weight(1.0).color(line_color);
        y += spacing;
    }
}
