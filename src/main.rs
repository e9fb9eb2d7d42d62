/*
 * Analog Root
 *
 * A glitchy particle animation. A fixed population of small squares drifts
 * across a wrap-around canvas, orbits the mouse pointer, and is reborn
 * somewhere else whenever two particles collide. Every particle cycles
 * through the color wheel at its own pace while green scanlines sit on top.
 *
 * Set RUST_LOG=analog_root=debug to see parameter and canvas changes.
 */

use analog_root::app::{model, update};

fn main() {
    env_logger::init();

    nannou::app(model).update(update).run();
}
