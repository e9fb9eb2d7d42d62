/*
 * Analog Root - Module Definitions
 *
 * This file defines the module structure for the particle animation.
 * The simulation core (particles, forces, collisions, colors) does not
 * touch the window; the app, input, renderer and ui modules drive it
 * through nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use bounds::Bounds;
pub use collision::{CollisionPolicy, CollisionReport};
pub use debug::DebugInfo;
pub use error::ConfigError;
pub use force::Pointer;
pub use params::SimulationParams;
pub use particle::Particle;
pub use simulation::{Simulation, TickStats};
pub use vector::VectorExt;

// Define modules
pub mod app;
pub mod bounds;
pub mod collision;
pub mod color;
pub mod coords;
pub mod debug;
pub mod error;
pub mod force;
pub mod input;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod simulation;
pub mod ui;
pub mod vector;
