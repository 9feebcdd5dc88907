//! Configuration and parameters
//!
//! Default constants and the startup parameter set.

pub mod constants;
pub mod sim_params;

pub use constants::*;
pub use sim_params::*;
