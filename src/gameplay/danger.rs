use std::time::Duration;

use bevy::prelude::*;

use crate::core::components::Fruit;
use crate::core::config::GameConfig;
use crate::core::playfield::Playfield;
use crate::gameplay::events::GameOver;
use crate::gameplay::state::GameState;

/// Polling clock for the danger check; runs independently of the physics rate.
#[derive(Resource, Debug)]
pub struct DangerMonitor {
    timer: Timer,
}

impl DangerMonitor {
    pub fn new(interval: Duration) -> Self {
        Self {
            timer: Timer::new(interval, TimerMode::Repeating),
        }
    }

    pub fn restart(&mut self) {
        self.timer.reset();
    }
}

impl FromWorld for DangerMonitor {
    fn from_world(world: &mut World) -> Self {
        let interval = world
            .get_resource::<GameConfig>()
            .map(|c| c.timing.danger_poll())
            .unwrap_or(Duration::from_millis(100));
        Self::new(interval)
    }
}

/// Update one fruit's danger timestamp. Returns true once the fruit has been
/// continuously above the line for at least `threshold`.
pub fn observe_danger(fruit: &mut Fruit, above_line: bool, now: Duration, threshold: Duration) -> bool {
    if !above_line {
        fruit.danger_since = None;
        return false;
    }
    match fruit.danger_since {
        None => {
            fruit.danger_since = Some(now);
            false
        }
        Some(since) => now.saturating_sub(since) >= threshold,
    }
}

pub fn poll_danger(
    time: Res<Time>,
    mut monitor: ResMut<DangerMonitor>,
    cfg: Res<GameConfig>,
    mut state: ResMut<GameState>,
    mut fruits: Query<(Entity, &mut Fruit, &Transform)>,
    mut game_over: EventWriter<GameOver>,
) {
    if state.game_over {
        return;
    }
    if !monitor.timer.tick(time.delta()).just_finished() {
        return;
    }
    let now = time.elapsed();
    let threshold = cfg.timing.danger_threshold();
    let playfield = Playfield::from(&cfg.playfield);
    let mut expired = None;
    for (entity, mut fruit, tf) in &mut fruits {
        let above = playfield.above_danger_line(tf.translation.truncate(), fruit.radius());
        if observe_danger(&mut fruit, above, now, threshold) && expired.is_none() {
            expired = Some(entity);
        }
    }
    let Some(culprit) = expired else {
        return;
    };
    if state.end_game() {
        warn!(
            target: "danger",
            "Game over: {:?} stayed above the danger line; final score {}",
            culprit, state.score
        );
        game_over.write(GameOver {
            final_score: state.score,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fruits::Rank;

    const THRESHOLD: Duration = Duration::from_millis(3000);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_crossing_records_timestamp() {
        let mut f = Fruit::new(Rank::SMALLEST);
        assert!(!observe_danger(&mut f, true, ms(1000), THRESHOLD));
        assert_eq!(f.danger_since, Some(ms(1000)));
        // Later observations keep the original start.
        assert!(!observe_danger(&mut f, true, ms(2000), THRESHOLD));
        assert_eq!(f.danger_since, Some(ms(1000)));
    }

    #[test]
    fn sustained_danger_expires_at_threshold() {
        let mut f = Fruit::new(Rank::SMALLEST);
        observe_danger(&mut f, true, ms(0), THRESHOLD);
        assert!(!observe_danger(&mut f, true, ms(2900), THRESHOLD));
        assert!(observe_danger(&mut f, true, ms(3000), THRESHOLD));
    }

    #[test]
    fn leaving_the_zone_clears_timer() {
        let mut f = Fruit::new(Rank::SMALLEST);
        observe_danger(&mut f, true, ms(0), THRESHOLD);
        assert!(!observe_danger(&mut f, false, ms(2500), THRESHOLD));
        assert_eq!(f.danger_since, None);
        // Re-entering starts a fresh window.
        assert!(!observe_danger(&mut f, true, ms(2600), THRESHOLD));
        assert!(!observe_danger(&mut f, true, ms(4000), THRESHOLD));
        assert!(observe_danger(&mut f, true, ms(5600), THRESHOLD));
    }
}
