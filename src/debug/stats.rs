use crate::core::components::Fruit;
use crate::core::fruits::FRUITS;
use bevy::prelude::*;

#[derive(Resource, Debug)]
pub struct DebugState {
    pub frame_counter: u64,
    pub time_accum: f32,
    /// Seconds between summary log lines.
    pub log_interval: f32,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            frame_counter: 0,
            time_accum: 0.0,
            log_interval: 5.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct DebugStats {
    pub fps: f32,
    pub fruit_count: usize,
    /// Live fruits per rank.
    pub per_rank: [usize; FRUITS.len()],
    /// Fruits currently holding a danger timestamp.
    pub in_danger: usize,
    pub merges: u64,
    pub drops: u64,
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    fruits: Query<&Fruit>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    stats.fps = if stats.fps == 0.0 {
        inst_fps
    } else {
        stats.fps * 0.9 + inst_fps * 0.1
    };
    let mut per_rank = [0usize; FRUITS.len()];
    let mut in_danger = 0;
    for fruit in &fruits {
        per_rank[fruit.rank.index()] += 1;
        if fruit.danger_since.is_some() {
            in_danger += 1;
        }
    }
    stats.fruit_count = per_rank.iter().sum();
    stats.per_rank = per_rank;
    stats.in_danger = in_danger;
}
