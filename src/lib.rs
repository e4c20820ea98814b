//! Wave simulation engine for an Alien Invasion style shooter.
//!
//! The library holds the whole simulation: formation layout, fleet and
//! arsenal management, collision resolution and the game state machine.
//! Terminal rendering and input handling live in the binary.

pub mod arsenal;
pub mod collision;
pub mod compute;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod layout;
pub mod motion;
pub mod scores;
pub mod settings;
pub mod ship;
pub mod stats;
