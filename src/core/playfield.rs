//! Mapping between the logical playfield and bevy world space.
//!
//! Logical space: origin at the container's top-left corner, y grows
//! downward, `0..width` x `0..height`. World space: y-up, container centered
//! on the origin.

use bevy::prelude::*;

use crate::core::config::PlayfieldConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    pub danger_line: f32,
    pub drop_height: f32,
    pub drop_margin: f32,
}

impl From<&PlayfieldConfig> for Playfield {
    fn from(cfg: &PlayfieldConfig) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            danger_line: cfg.danger_line,
            drop_height: cfg.drop_height,
            drop_margin: cfg.drop_margin,
        }
    }
}

impl Playfield {
    #[inline]
    pub fn to_world(&self, logical: Vec2) -> Vec2 {
        Vec2::new(logical.x - self.width * 0.5, self.height * 0.5 - logical.y)
    }

    #[inline]
    pub fn to_logical(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x + self.width * 0.5, self.height * 0.5 - world.y)
    }

    pub fn contains_logical(&self, logical: Vec2) -> bool {
        (0.0..=self.width).contains(&logical.x) && (0.0..=self.height).contains(&logical.y)
    }

    /// Clamp a logical x to the allowed drop range.
    pub fn clamp_drop_x(&self, x: f32) -> f32 {
        let lo = self.drop_margin;
        let hi = (self.width - self.drop_margin).max(lo);
        x.clamp(lo, hi)
    }

    /// World position a fruit dropped at logical `x` spawns at.
    pub fn drop_point(&self, x: f32) -> Vec2 {
        self.to_world(Vec2::new(self.clamp_drop_x(x), self.drop_height))
    }

    /// True when a circle at `world` with `radius` pokes above the danger line.
    pub fn above_danger_line(&self, world: Vec2, radius: f32) -> bool {
        self.to_logical(world).y - radius < self.danger_line
    }

    /// World-space y of the danger line.
    pub fn danger_line_world_y(&self) -> f32 {
        self.height * 0.5 - self.danger_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield::from(&PlayfieldConfig::default())
    }

    #[test]
    fn logical_world_roundtrip_corners() {
        let pf = field();
        assert_eq!(pf.to_world(Vec2::ZERO), Vec2::new(-200.0, 300.0));
        assert_eq!(pf.to_world(Vec2::new(400.0, 600.0)), Vec2::new(200.0, -300.0));
        assert_eq!(pf.to_logical(Vec2::new(-200.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn drop_x_clamped_to_margin() {
        let pf = field();
        assert_eq!(pf.clamp_drop_x(-50.0), 30.0);
        assert_eq!(pf.clamp_drop_x(1000.0), 370.0);
        assert_eq!(pf.clamp_drop_x(200.0), 200.0);
        assert_eq!(pf.drop_point(0.0), Vec2::new(-170.0, 250.0));
    }

    #[test]
    fn danger_uses_top_edge() {
        let pf = field();
        // Center at logical y=140, radius 30: top edge 110 is above the line at 120.
        let world = pf.to_world(Vec2::new(200.0, 140.0));
        assert!(pf.above_danger_line(world, 30.0));
        // Same center, radius 10: top edge 130 sits below the line.
        assert!(!pf.above_danger_line(world, 10.0));
        assert_eq!(pf.danger_line_world_y(), 180.0);
    }
}
