/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that holds every constant
 * the simulation and the renderer read. The physics constants are fixed at
 * start-up; a handful of interaction settings can be tuned from the UI while
 * the animation runs. It also provides validation and change detection.
 */

use crate::collision::CollisionPolicy;
use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct SimulationParams {
    pub num_particles: usize,
    pub speed_limit: f32,
    pub collision_radius: f32,
    pub collision_policy: CollisionPolicy,
    pub mouse_attraction: f32,
    pub mouse_repulsion_radius: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub hue_speed_min: f32,
    pub hue_speed_max: f32,

    // Presentation settings
    pub show_scanlines: bool,
    pub scanline_spacing: f32,
    pub enable_glitch: bool,
    pub glitch_probability: f64,
    pub trail_alpha: f32,
    pub show_debug: bool,
    pub show_ui: bool,
    pub pause_simulation: bool,
}

// A copy of the settings the UI is allowed to touch, used for change detection
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSnapshot {
    collision_radius: f32,
    collision_policy: CollisionPolicy,
    mouse_attraction: f32,
    mouse_repulsion_radius: f32,
    show_scanlines: bool,
    enable_glitch: bool,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_particles: 150,
            speed_limit: 4.0,
            collision_radius: 8.0,
            collision_policy: CollisionPolicy::Immediate,
            mouse_attraction: 0.1,
            mouse_repulsion_radius: 30.0,
            size_min: 3.0,
            size_max: 7.0,
            hue_speed_min: 0.5,
            hue_speed_max: 1.0,
            show_scanlines: true,
            scanline_spacing: 8.0,
            enable_glitch: true,
            glitch_probability: 0.005,
            trail_alpha: 50.0 / 255.0,
            show_debug: false,
            show_ui: true,
            pause_simulation: false,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_particles == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        // Also rejects NaN
        if !(self.speed_limit >= 1.0) {
            return Err(ConfigError::SpeedLimitTooLow(self.speed_limit));
        }
        check_range("particle size", self.size_min, self.size_max)?;
        check_range("hue speed", self.hue_speed_min, self.hue_speed_max)?;
        check_non_negative("collision radius", self.collision_radius)?;
        check_non_negative("mouse repulsion radius", self.mouse_repulsion_radius)?;
        check_non_negative("mouse attraction", self.mouse_attraction)?;
        Ok(())
    }

    /// True when a tunable value differs from `previous`.
    pub fn changed_since(&self, previous: &ParamSnapshot) -> bool {
        *previous != self.snapshot()
    }

    // Take a snapshot of the tunable values
    pub fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            collision_radius: self.collision_radius,
            collision_policy: self.collision_policy,
            mouse_attraction: self.mouse_attraction,
            mouse_repulsion_radius: self.mouse_repulsion_radius,
            show_scanlines: self.show_scanlines,
            enable_glitch: self.enable_glitch,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_attraction_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn get_repulsion_radius_range() -> std::ops::RangeInclusive<f32> {
        0.0..=150.0
    }

    pub fn get_collision_radius_range() -> std::ops::RangeInclusive<f32> {
        0.0..=40.0
    }
}

fn check_range(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min >= 0.0 && min < max {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { name, min, max })
    }
}

fn check_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
