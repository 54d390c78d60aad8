//! Egg/juvenile/adult particle population: elastic circle collisions,
//! collision-driven reproduction, probabilistic hatching and a pointer
//! interaction that scatters nearby units. Rendering and windowing live in
//! the binary.

pub mod config;
pub mod constants;
pub mod input;
pub mod simulation;
pub mod utils;

pub use config::SimulationConfig;
pub use input::{InputSample, InputSource, PointerInput};
pub use simulation::{LifeStage, SimulationState};
