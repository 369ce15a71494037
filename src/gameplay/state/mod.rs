use std::time::Duration;

use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::components::Fruit;
use crate::core::config::GameConfig;
use crate::core::fruits::Rank;
use crate::gameplay::danger::DangerMonitor;
use crate::gameplay::events::RestartRequested;
use crate::gameplay::merge::PendingMerges;
use crate::gameplay::spawn::spawn::despawn_fruit;

/// Random source for the next-fruit roll.
#[derive(Resource, Deref, DerefMut)]
pub struct FruitRng(pub StdRng);

impl FruitRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self(StdRng::seed_from_u64(s)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// Per-session state owned by the gameplay systems.
#[derive(Resource, Debug)]
pub struct GameState {
    pub score: u32,
    pub next_rank: Rank,
    pub game_over: bool,
    drop_cooldown: Option<Timer>,
}

impl FromWorld for GameState {
    fn from_world(world: &mut World) -> Self {
        match world.get_resource_mut::<FruitRng>() {
            Some(mut rng) => Self::new(Rank::random_starter(&mut rng.0)),
            None => Self::new(Rank::SMALLEST),
        }
    }
}

impl GameState {
    pub fn new(next_rank: Rank) -> Self {
        Self {
            score: 0,
            next_rank,
            game_over: false,
            drop_cooldown: None,
        }
    }

    /// Back to a fresh session with a newly rolled next fruit.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        *self = Self::new(Rank::random_starter(rng));
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn cooldown_active(&self) -> bool {
        self.drop_cooldown.is_some()
    }

    pub fn can_drop(&self) -> bool {
        !self.game_over && !self.cooldown_active()
    }

    /// Accept a drop if allowed: hands out the current next rank, starts the
    /// cooldown and rerolls. `None` means the request is ignored.
    pub fn take_drop(&mut self, cooldown: Duration, rng: &mut impl Rng) -> Option<Rank> {
        if !self.can_drop() {
            return None;
        }
        let rank = self.next_rank;
        if !cooldown.is_zero() {
            self.drop_cooldown = Some(Timer::new(cooldown, TimerMode::Once));
        }
        self.next_rank = Rank::random_starter(rng);
        Some(rank)
    }

    pub fn tick_cooldown(&mut self, delta: Duration) {
        let done = match self.drop_cooldown.as_mut() {
            Some(timer) => timer.tick(delta).finished(),
            None => return,
        };
        if done {
            self.drop_cooldown = None;
        }
    }

    /// One-way transition to game over. Returns true only on the transition.
    pub fn end_game(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.game_over = true;
        true
    }
}

/// Installs the session resources and the restart flow.
pub struct GameStatePlugin;

impl Plugin for GameStatePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<FruitRng>() {
            let seed = app.world().get_resource::<GameConfig>().and_then(|c| c.seed);
            app.insert_resource(FruitRng::new(seed));
        }
        app.init_resource::<GameState>();
    }
}

/// Clears every fruit and pending merge and starts a new session.
pub fn apply_restart_requests(
    mut commands: Commands,
    mut requests: EventReader<RestartRequested>,
    fruits: Query<Entity, With<Fruit>>,
    mut state: ResMut<GameState>,
    mut rng: ResMut<FruitRng>,
    mut pending: ResMut<PendingMerges>,
    mut monitor: ResMut<DangerMonitor>,
) {
    // Several controls in one frame still mean one reset.
    let Some(request) = requests.read().last() else {
        return;
    };
    let mut cleared = 0usize;
    for entity in &fruits {
        despawn_fruit(&mut commands, entity);
        cleared += 1;
    }
    pending.clear();
    monitor.restart();
    state.reset(&mut rng.0);
    info!(
        target: "session",
        "Restart via {:?}: cleared {} fruits, next={}",
        request.source, cleared, state.next_rank
    );
}
