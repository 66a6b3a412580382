//! Session state and the per-tick update.
//!
//! A session moves `Instructions -> Playing -> Won | GameOver`. The two end
//! phases are terminal: nothing changes after them and a new session needs a
//! new engine.

use glam::{Vec2, vec2};
use log::{debug, info};
use strum::{Display, EnumIs};

use crate::{
    coins,
    config::GameConfig,
    error::{ConfigurationError, GameError, InvariantViolation},
    maze::{Maze, START_CELL, WallSet},
    player::{Player, PlayerInput},
    rect::Rect,
    snapshot::Snapshot,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIs)]
pub enum Phase {
    Instructions,
    Playing,
    Won,
    #[strum(to_string = "Game Over")]
    GameOver,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::GameOver)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinishLine {
    pub rect: Rect,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionClock {
    remaining: f32, // Seconds.
}

impl SessionClock {
    pub fn new(secs: f32) -> Self {
        Self { remaining: secs }
    }

    /// Runs the clock down by `dt` and reports whether it has run out. Once
    /// out, the remaining time is clamped to zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            true
        } else {
            false
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn display_secs(&self) -> u32 {
        self.remaining.max(0.0) as u32
    }
}

#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    walls: WallSet,
    coins: Vec<Vec2>,
    initial_coin_count: usize,
    player: Player,
    finish: FinishLine,
    clock: SessionClock,
    score: u32,
    phase: Phase,
}

impl GameEngine {
    /// Generates a maze and coins from `config` and builds a session around
    /// them. Uses `config.seed` when set.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = crate::rng_from_seed(config.seed);
        let maze = Maze::generate(config.cols, config.rows, &mut rng)?;
        let coins = coins::place(&maze, &config, &mut rng)?;

        Self::with_layout(config, &maze, coins)
    }

    /// Builds a session around a given maze and coin list, validating both.
    pub fn with_layout(
        config: GameConfig,
        maze: &Maze,
        coins: Vec<Vec2>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if maze.cols() != config.cols || maze.rows() != config.rows {
            return Err(ConfigurationError::InvalidSetting(
                "maze size does not match the configured grid",
            )
            .into());
        }

        let walls = maze.walls(config.tile_size, config.origin());

        let start = config.start_position();
        let start_rect = Rect::square(start, config.tile_size);
        if start_rect.intersects_any(&walls) {
            return Err(InvariantViolation::StartOverlapsWall {
                x: start.x,
                y: start.y,
            }
            .into());
        }

        let finish_rect = config.finish_rect();
        if finish_rect.intersects_any(&walls) {
            return Err(InvariantViolation::FinishOverlapsWall {
                x: finish_rect.x,
                y: finish_rect.y,
            }
            .into());
        }

        let finish_cell = config.finish_cell();
        if !maze.is_reachable(START_CELL, finish_cell) {
            return Err(ConfigurationError::UnreachableFinish {
                start: START_CELL,
                finish: finish_cell,
            }
            .into());
        }

        let coins = coins::validate(&coins, &walls, start_rect, &config)?;
        let initial_coin_count = coins.len();
        debug!(
            "session ready: {} walls, {} coins, finish at {:?}",
            walls.len(),
            initial_coin_count,
            finish_cell
        );

        Ok(Self {
            player: Player::new(start, config.tile_size, config.player_speed),
            clock: SessionClock::new(config.timer_secs),
            finish: FinishLine {
                rect: finish_rect,
                enabled: false,
            },
            config,
            walls,
            coins,
            initial_coin_count,
            score: 0,
            phase: Phase::Instructions,
        })
    }

    /// Leaves the instructions screen. Ignored in any other phase. Returns
    /// whether the session started.
    pub fn acknowledge(&mut self) -> bool {
        if self.phase != Phase::Instructions {
            return false;
        }

        self.score = 0;
        self.player.position = self.config.start_position();
        self.clock = SessionClock::new(self.config.timer_secs);
        self.transition(Phase::Playing);
        true
    }

    /// Advances the session by `dt` seconds with the given keys held.
    pub fn tick(&mut self, dt: f32, input: PlayerInput) -> Snapshot<'_> {
        if self.phase == Phase::Playing {
            self.update(dt, input.intent());
        }
        self.snapshot()
    }

    fn update(&mut self, dt: f32, intent: Vec2) {
        if self.clock.tick(dt) {
            self.player.freeze();
            self.transition(Phase::GameOver);
            return;
        }

        let size = self.player.size;
        let min = vec2(0.0, self.config.header_height);
        let max = vec2(self.config.width() - size, self.config.height() - size);
        let intended = self.player.intended_position(intent, min, max);

        // The whole move is rejected on contact: no sliding along walls.
        if !Rect::square(intended, size).intersects_any(&self.walls) {
            self.player.position = intended;
        }

        self.collect_coins();

        if !self.finish.enabled && self.score >= self.config.win_threshold {
            self.finish.enabled = true;
            info!("all coins collected: finish line enabled");
        }

        if self.finish.enabled && self.player.rect().intersects(&self.finish.rect) {
            self.player.freeze();
            self.transition(Phase::Won);
        }
    }

    fn collect_coins(&mut self) {
        let player_rect = self.player.rect();
        let coin_size = self.config.tile_size;
        let before = self.coins.len();

        self.coins
            .retain(|&coin| !Rect::square(coin, coin_size).intersects(&player_rect));

        let collected = before - self.coins.len();
        if collected > 0 {
            self.score += collected as u32;
            debug!(
                "collected {} coin(s), score {}/{}",
                collected, self.score, self.config.win_threshold
            );
        }
    }

    fn transition(&mut self, phase: Phase) {
        info!("phase {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            walls: &self.walls,
            coins: &self.coins,
            coin_size: self.config.tile_size,
            player: self.player.rect(),
            finish: self.finish.rect,
            finish_enabled: self.finish.enabled,
            score: self.score,
            time_left: self.clock.display_secs(),
            phase: self.phase,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn coins(&self) -> &[Vec2] {
        &self.coins
    }

    pub fn initial_coin_count(&self) -> usize {
        self.initial_coin_count
    }

    pub fn finish(&self) -> &FinishLine {
        &self.finish
    }

    pub fn time_remaining(&self) -> f32 {
        self.clock.remaining()
    }
}
