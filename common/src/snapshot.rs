use glam::Vec2;

use crate::{engine::Phase, rect::Rect};

/// Everything a host needs to draw one frame. Borrowed from the engine, so
/// it lives only until the next tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<'a> {
    pub walls: &'a [Rect],
    pub coins: &'a [Vec2],
    pub coin_size: f32,
    pub player: Rect,
    pub finish: Rect,
    pub finish_enabled: bool,
    pub score: u32,
    pub time_left: u32, // Whole seconds, never negative.
    pub phase: Phase,
}

impl Snapshot<'_> {
    pub fn coin_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.coins
            .iter()
            .map(|&coin| Rect::square(coin, self.coin_size))
    }

    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn time_label(&self) -> String {
        format!("Time: {}", self.time_left)
    }

    /// Banner for a finished session, if there is one.
    pub fn banner(&self) -> Option<String> {
        match self.phase {
            Phase::Won => Some(format!("You win! Final Score: {}", self.score)),
            Phase::GameOver => Some("Time's up! Game Over.".to_string()),
            Phase::Instructions | Phase::Playing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;

    use super::*;

    fn snapshot_in(phase: Phase, coins: &[Vec2]) -> Snapshot<'_> {
        Snapshot {
            walls: &[],
            coins,
            coin_size: 20.0,
            player: Rect::new(20.0, 60.0, 20.0, 20.0),
            finish: Rect::new(580.0, 620.0, 20.0, 20.0),
            finish_enabled: false,
            score: 7,
            time_left: 42,
            phase,
        }
    }

    #[test]
    fn labels_show_score_and_time() {
        let snapshot = snapshot_in(Phase::Playing, &[]);
        assert_eq!(snapshot.score_label(), "Score: 7");
        assert_eq!(snapshot.time_label(), "Time: 42");
        assert_eq!(snapshot.banner(), None);
    }

    #[test]
    fn banners_for_terminal_phases() {
        assert_eq!(
            snapshot_in(Phase::Won, &[]).banner().as_deref(),
            Some("You win! Final Score: 7")
        );
        assert_eq!(
            snapshot_in(Phase::GameOver, &[]).banner().as_deref(),
            Some("Time's up! Game Over.")
        );
    }

    #[test]
    fn coin_rects_use_coin_size() {
        let coins = [vec2(40.0, 60.0)];
        let snapshot = snapshot_in(Phase::Playing, &coins);
        let rects: Vec<Rect> = snapshot.coin_rects().collect();
        assert_eq!(rects, vec![Rect::new(40.0, 60.0, 20.0, 20.0)]);
    }
}
