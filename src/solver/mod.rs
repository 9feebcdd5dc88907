// src/solver/mod.rs
pub mod forces;
pub mod integrate;
pub mod step;

pub use forces::*;
pub use integrate::*;
pub use step::*;
