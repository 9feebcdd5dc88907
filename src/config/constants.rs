// Default simulation constants
use std::time::Duration;

use bevy::prelude::*;

// Simulation area (also the window size, in pixels)
pub const AREA_WIDTH: u32 = 1280;
pub const AREA_HEIGHT: u32 = 720;
pub const BUCKET_SIZE: u32 = 64;

// Particles
pub const PARTICLE_START_COUNT: usize = 5000;
pub const PARTICLE_RADIUS: f32 = 4.0;

// Force law
pub const GRAVITY_CONSTANT: f32 = 10.0;
pub const MAX_FORCE: f32 = 3.0;
pub const IGNORE_RADIUS: f32 = 10.0;

// Per-tick velocity multiplier (drag)
pub const VELOCITY_DAMPING: f32 = 0.99;

pub const TICK_PERIOD: Duration = Duration::from_millis(6);

// View
pub const BACKGROUND_COLOR: Color = Color::srgb(10.0 / 255.0, 10.0 / 255.0, 10.0 / 255.0);
pub const GRID_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 5.0 / 255.0);
