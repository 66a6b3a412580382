use std::{env, str::FromStr};

use glam::{Vec2, vec2};

use crate::{
    constants::{
        COIN_COUNT, COLS, HEADER_HEIGHT, PLAYER_SPEED, ROWS, TILE_SIZE, TIMER_SECS,
        WIN_THRESHOLD,
    },
    error::ConfigurationError,
    maze::{self, Maze, START_CELL},
    rect::Rect,
};

/// Construction-time settings for one session. `Default` reproduces the
/// classic 600x640 game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub cols: usize,
    pub rows: usize,
    pub tile_size: f32,
    pub header_height: f32,
    pub coin_count: usize,
    pub win_threshold: u32,
    pub timer_secs: f32,
    pub player_speed: f32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: COLS,
            rows: ROWS,
            tile_size: TILE_SIZE,
            header_height: HEADER_HEIGHT,
            coin_count: COIN_COUNT,
            win_threshold: WIN_THRESHOLD,
            timer_secs: TIMER_SECS,
            player_speed: PLAYER_SPEED,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `MAZE_*` variables from the environment or a
    /// `.env` file in the working directory.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigurationError> {
        let mut config = Self::default();

        override_from(&lookup, "MAZE_COLS", &mut config.cols)?;
        override_from(&lookup, "MAZE_ROWS", &mut config.rows)?;
        override_from(&lookup, "MAZE_TILE_SIZE", &mut config.tile_size)?;
        override_from(&lookup, "MAZE_COIN_COUNT", &mut config.coin_count)?;
        override_from(&lookup, "MAZE_TIMER_SECS", &mut config.timer_secs)?;
        override_from(&lookup, "MAZE_PLAYER_SPEED", &mut config.player_speed)?;

        let mut seed = 0;
        if override_from(&lookup, "MAZE_SEED", &mut seed)? {
            config.seed = Some(seed);
        }

        // Every coin is needed to open the exit.
        config.win_threshold =
            u32::try_from(config.coin_count).map_err(|_| ConfigurationError::InvalidValue {
                key: "MAZE_COIN_COUNT",
                value: config.coin_count.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let (start_x, start_y) = START_CELL;
        if self.cols <= start_x || self.rows <= start_y {
            return Err(ConfigurationError::InvalidGridSize {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if !(self.tile_size > 0.0) {
            return Err(ConfigurationError::InvalidSetting(
                "tile size must be positive",
            ));
        }
        if self.header_height < 0.0 {
            return Err(ConfigurationError::InvalidSetting(
                "header height cannot be negative",
            ));
        }
        if self.coin_count == 0 {
            return Err(ConfigurationError::InvalidSetting(
                "there must be at least one coin",
            ));
        }
        if self.win_threshold == 0 {
            return Err(ConfigurationError::InvalidSetting(
                "win threshold must be at least one coin",
            ));
        }
        if self.win_threshold as usize > self.coin_count {
            return Err(ConfigurationError::InvalidSetting(
                "win threshold cannot exceed the number of coins",
            ));
        }
        if !(self.timer_secs > 0.0) {
            return Err(ConfigurationError::InvalidSetting(
                "timer must start above zero",
            ));
        }
        if !(self.player_speed > 0.0) {
            return Err(ConfigurationError::InvalidSetting(
                "player speed must be positive",
            ));
        }

        Ok(())
    }

    pub fn width(&self) -> f32 {
        self.cols as f32 * self.tile_size
    }

    pub fn height(&self) -> f32 {
        self.header_height + self.rows as f32 * self.tile_size
    }

    /// Top-left pixel of the maze, just below the header.
    pub fn origin(&self) -> Vec2 {
        vec2(0.0, self.header_height)
    }

    pub fn cell_position(&self, x: usize, y: usize) -> Vec2 {
        Maze::cell_position(x, y, self.tile_size, self.origin())
    }

    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        Maze::cell_rect(x, y, self.tile_size, self.origin())
    }

    pub fn start_position(&self) -> Vec2 {
        let (x, y) = START_CELL;
        self.cell_position(x, y)
    }

    pub fn finish_cell(&self) -> (usize, usize) {
        (maze::last_room(self.cols), maze::last_room(self.rows))
    }

    pub fn finish_rect(&self) -> Rect {
        let (x, y) = self.finish_cell();
        self.cell_rect(x, y)
    }
}

// Returns whether the variable was present.
fn override_from<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    target: &mut T,
) -> Result<bool, ConfigurationError> {
    let Some(raw) = lookup(key) else {
        return Ok(false);
    };

    let value = raw.trim();
    if value.is_empty() {
        return Ok(false);
    }

    *target = value
        .parse()
        .map_err(|_| ConfigurationError::InvalidValue {
            key,
            value: value.to_string(),
        })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn default_geometry_matches_the_classic_screen() {
        let config = GameConfig::default();
        assert_eq!(config.width(), 600.0);
        assert_eq!(config.height(), 640.0);
        assert_eq!(config.start_position(), vec2(20.0, 60.0));
        assert_eq!(config.finish_rect(), Rect::new(580.0, 620.0, 20.0, 20.0));
    }

    #[test]
    fn no_variables_gives_defaults() {
        let config = GameConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("MAZE_COLS", "21"),
            ("MAZE_ROWS", " 15 "),
            ("MAZE_COIN_COUNT", "5"),
            ("MAZE_TIMER_SECS", "30.5"),
            ("MAZE_SEED", "77"),
        ]))
        .unwrap();

        assert_eq!(config.cols, 21);
        assert_eq!(config.rows, 15);
        assert_eq!(config.coin_count, 5);
        assert_eq!(config.win_threshold, 5);
        assert_eq!(config.timer_secs, 30.5);
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.finish_cell(), (19, 13));
    }

    #[test]
    fn empty_variable_is_ignored() {
        let config = GameConfig::from_lookup(lookup_from(&[("MAZE_SEED", "")])).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn unparsable_variable_is_rejected() {
        let result = GameConfig::from_lookup(lookup_from(&[("MAZE_COLS", "wide")]));
        assert_eq!(
            result,
            Err(ConfigurationError::InvalidValue {
                key: "MAZE_COLS",
                value: "wide".to_string()
            })
        );
    }

    #[test]
    fn tiny_grid_is_rejected() {
        let result = GameConfig::from_lookup(lookup_from(&[("MAZE_ROWS", "1")]));
        assert_eq!(
            result,
            Err(ConfigurationError::InvalidGridSize { cols: 30, rows: 1 })
        );
    }

    #[test]
    fn validate_rejects_non_positive_settings() {
        let zero_speed = GameConfig {
            player_speed: 0.0,
            ..GameConfig::default()
        };
        assert!(zero_speed.validate().is_err());

        let no_coins = GameConfig {
            coin_count: 0,
            win_threshold: 0,
            ..GameConfig::default()
        };
        assert!(no_coins.validate().is_err());

        let nan_timer = GameConfig {
            timer_secs: f32::NAN,
            ..GameConfig::default()
        };
        assert!(nan_timer.validate().is_err());
    }

    #[test]
    fn validate_rejects_a_zero_win_threshold() {
        let open_exit = GameConfig {
            win_threshold: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            open_exit.validate(),
            Err(ConfigurationError::InvalidSetting(
                "win threshold must be at least one coin"
            ))
        );
    }
}
