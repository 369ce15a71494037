pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::{ConfigLoadReport, GamePlugin};
pub use crate::core::components::Fruit;
pub use crate::core::config::{GameConfig, WindowConfig};
pub use crate::core::fruits::{Rank, FRUITS};
pub use gameplay::state::GameState;
pub use gameplay::GameplayPlugin;
