pub mod spawn;

pub use spawn::{despawn_fruit, spawn_fruit};
