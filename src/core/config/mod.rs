pub mod config;

pub use config::{
    GameConfig, PhysicsConfig, PlayfieldConfig, PresentationConfig, TimingConfig, WindowConfig,
};
