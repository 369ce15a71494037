use super::stats::{DebugState, DebugStats};
use crate::gameplay::events::{FruitDropped, FruitsMerged, GameOver, RestartRequested};
use crate::gameplay::state::GameState;
use bevy::prelude::*;

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    stats: Res<DebugStats>,
    session: Res<GameState>,
) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(target: "debug", "SIM frame={} t={:.3}s fps={:.1} fruits={} ranks={:?} danger={} drops={} merges={} score={} next={} over={}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.fruit_count,
            stats.per_rank,
            stats.in_danger,
            stats.drops,
            stats.merges,
            session.score,
            session.next_rank,
            session.game_over);
    }
}

pub fn debug_event_log_system(
    mut stats: ResMut<DebugStats>,
    mut dropped: EventReader<FruitDropped>,
    mut merged: EventReader<FruitsMerged>,
    mut over: EventReader<GameOver>,
    mut restarts: EventReader<RestartRequested>,
) {
    for ev in dropped.read() {
        stats.drops += 1;
        debug!(target: "debug", "drop {} -> {:?} at {:?}", ev.rank, ev.entity, ev.position);
    }
    for ev in merged.read() {
        stats.merges += 1;
        info!(target: "debug", "merge {:?} -> {} (+{}) at {:?}", ev.consumed, ev.rank, ev.points, ev.position);
    }
    for ev in over.read() {
        info!(target: "debug", "game over, final score {}", ev.final_score);
    }
    for ev in restarts.read() {
        info!(target: "debug", "restart requested via {:?}", ev.source);
    }
}
