pub mod container;
pub mod rapier;
