/*
 * Error Module
 *
 * The simulation itself never fails; the only thing that can be wrong is
 * the configuration or canvas it is started with.
 */

use std::fmt;

/// Reasons a `SimulationParams` value cannot start a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The population must hold at least one particle.
    EmptyPopulation,
    /// Reborn particles get a speed in `[1, speed_limit]`, so the limit cannot be below 1.
    SpeedLimitTooLow(f32),
    /// A `[min, max)` range that is empty or reaches below zero.
    InvalidRange { name: &'static str, min: f32, max: f32 },
    /// A radius or strength that must not be negative.
    Negative { name: &'static str, value: f32 },
    /// The starting canvas has no area to spawn particles in.
    EmptyCanvas { width: f32, height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPopulation => write!(f, "the simulation needs at least one particle"),
            ConfigError::SpeedLimitTooLow(limit) => {
                write!(f, "speed limit {} is below the minimum spawn speed of 1", limit)
            }
            ConfigError::InvalidRange { name, min, max } => {
                write!(f, "{} range [{}, {}) is empty or negative", name, min, max)
            }
            ConfigError::Negative { name, value } => {
                write!(f, "{} must not be negative (got {})", name, value)
            }
            ConfigError::EmptyCanvas { width, height } => {
                write!(f, "cannot spawn particles on a {}x{} canvas", width, height)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
