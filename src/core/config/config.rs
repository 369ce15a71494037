use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 720.0,
            title: "Fruit Merge".into(),
            auto_close: 0.0,
        }
    }
}

/// Logical container dimensions. Logical space is y-down with the origin at
/// the container's top-left corner.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayfieldConfig {
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
    /// Logical y of the danger line; a fruit whose top edge is above it is in danger.
    pub danger_line: f32,
    /// Logical y at which dropped fruits appear.
    pub drop_height: f32,
    /// Horizontal clamp margin applied to pointer drops.
    pub drop_margin: f32,
}
impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
            wall_thickness: 10.0,
            danger_line: 120.0,
            drop_height: 50.0,
            drop_margin: 30.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub pixels_per_meter: f32,
    /// Downward acceleration in px/s² (positive = down).
    pub gravity: f32,
    pub restitution: f32,
    pub friction: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 50.0,
            gravity: 800.0,
            restitution: 0.3,
            friction: 0.3,
            linear_damping: 0.6,
            angular_damping: 0.6,
        }
    }
}

/// Gameplay timings in milliseconds.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub drop_cooldown_ms: u64,
    pub merge_delay_ms: u64,
    pub danger_poll_ms: u64,
    pub danger_threshold_ms: u64,
}
impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            drop_cooldown_ms: 500,
            merge_delay_ms: 50,
            danger_poll_ms: 100,
            danger_threshold_ms: 3000,
        }
    }
}
impl TimingConfig {
    pub fn drop_cooldown(&self) -> Duration {
        Duration::from_millis(self.drop_cooldown_ms)
    }
    pub fn merge_delay(&self) -> Duration {
        Duration::from_millis(self.merge_delay_ms)
    }
    pub fn danger_poll(&self) -> Duration {
        // A zero-length repeating timer would fire every frame forever.
        Duration::from_millis(self.danger_poll_ms.max(1))
    }
    pub fn danger_threshold(&self) -> Duration {
        Duration::from_millis(self.danger_threshold_ms)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PresentationConfig {
    /// Font asset used for fruit glyphs (an emoji-capable font); bevy's
    /// default font is used when unset.
    pub glyph_font: Option<String>,
    /// Glyph font size as a multiple of the fruit radius.
    pub glyph_scale: f32,
    pub draw_danger_line: bool,
}
impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            glyph_font: None,
            glyph_scale: 1.5,
            draw_danger_line: true,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub playfield: PlayfieldConfig,
    pub physics: PhysicsConfig,
    pub timing: TimingConfig,
    pub presentation: PresentationConfig,
    pub rapier_debug: bool,
    /// Fixed RNG seed for the next-fruit roll; entropy when unset.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Merge RON files in order (later keys override earlier ones) and
    /// deserialize the result. Returns the config, the paths that were
    /// applied, and any read/parse errors. Never fails: missing or broken
    /// layers are skipped and defaults fill the gaps.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        let pf = &self.playfield;
        if pf.width <= 0.0 || pf.height <= 0.0 {
            w.push(format!(
                "playfield {}x{} must have positive dimensions",
                pf.width, pf.height
            ));
        }
        if pf.width > self.window.width || pf.height > self.window.height {
            w.push(format!(
                "playfield {}x{} larger than window {}x{}; container will be clipped",
                pf.width, pf.height, self.window.width, self.window.height
            ));
        }
        if pf.wall_thickness <= 0.0 {
            w.push("playfield.wall_thickness must be > 0".into());
        }
        if !(0.0..=pf.height).contains(&pf.danger_line) {
            w.push(format!(
                "playfield.danger_line {} outside 0..{}",
                pf.danger_line, pf.height
            ));
        }
        if pf.drop_height < 0.0 || pf.drop_height >= pf.height {
            w.push(format!(
                "playfield.drop_height {} outside container",
                pf.drop_height
            ));
        }
        if pf.drop_margin * 2.0 >= pf.width {
            w.push(format!(
                "playfield.drop_margin {} leaves no horizontal drop range",
                pf.drop_margin
            ));
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }
        if self.physics.gravity <= 0.0 {
            w.push(format!(
                "physics.gravity {} not positive; fruits will not fall",
                self.physics.gravity
            ));
        }
        if !(0.0..=1.0).contains(&self.physics.restitution) {
            w.push(format!(
                "physics.restitution {} outside 0..1",
                self.physics.restitution
            ));
        }
        if self.physics.friction < 0.0 {
            w.push("physics.friction negative".into());
        }
        let t = &self.timing;
        if t.drop_cooldown_ms == 0 {
            w.push("timing.drop_cooldown_ms is 0; drops are unthrottled".into());
        }
        if t.danger_poll_ms == 0 {
            w.push("timing.danger_poll_ms is 0 -> clamped to 1ms".into());
        }
        if t.danger_threshold_ms < t.danger_poll_ms {
            w.push(format!(
                "timing.danger_threshold_ms {} shorter than poll interval {}",
                t.danger_threshold_ms, t.danger_poll_ms
            ));
        }
        if self.presentation.glyph_scale <= 0.0 {
            w.push("presentation.glyph_scale must be > 0".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_cleanly() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
        assert_eq!(cfg.timing.drop_cooldown(), Duration::from_millis(500));
        assert_eq!(cfg.timing.danger_threshold(), Duration::from_millis(3000));
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let cfg: GameConfig = ron::from_str("(timing: (merge_delay_ms: 80))").unwrap();
        assert_eq!(cfg.timing.merge_delay_ms, 80);
        assert_eq!(cfg.timing.drop_cooldown_ms, 500);
        assert_eq!(cfg.playfield, PlayfieldConfig::default());
    }

    #[test]
    fn danger_line_outside_container_warns() {
        let mut cfg = GameConfig::default();
        cfg.playfield.danger_line = 900.0;
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("danger_line")));
    }

    #[test]
    fn zero_poll_interval_is_clamped() {
        let mut cfg = GameConfig::default();
        cfg.timing.danger_poll_ms = 0;
        assert_eq!(cfg.timing.danger_poll(), Duration::from_millis(1));
    }
}
