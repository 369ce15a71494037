pub mod components;
pub mod config;
pub mod fruits;
pub mod playfield;
pub mod system;
