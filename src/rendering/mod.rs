pub mod camera;
pub mod fruits;
pub mod hud;
pub mod materials;
