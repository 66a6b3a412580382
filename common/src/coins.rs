use glam::Vec2;
use log::debug;
use rand::{Rng, seq::IndexedRandom};

use crate::{
    config::GameConfig,
    error::{ConfigurationError, GameError, InvariantViolation},
    maze::{Maze, START_CELL, WallSet},
    rect::Rect,
};

/// Picks `config.coin_count` distinct open cells, never the start cell, and
/// returns their top-left pixel positions.
pub fn place<R: Rng>(
    maze: &Maze,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec<Vec2>, ConfigurationError> {
    let candidates: Vec<(usize, usize)> = maze
        .spaces
        .iter()
        .copied()
        .filter(|&cell| cell != START_CELL)
        .collect();

    if candidates.len() < config.coin_count {
        return Err(ConfigurationError::NotEnoughCoinSpots {
            required: config.coin_count,
            available: candidates.len(),
        });
    }

    let coins: Vec<Vec2> = candidates
        .choose_multiple(rng, config.coin_count)
        .map(|&(x, y)| config.cell_position(x, y))
        .collect();
    debug!("placed {} coins at {:?}", coins.len(), coins);

    Ok(coins)
}

/// Checks caller-supplied coins against the layout. A coin off the play
/// field or off the tile grid is a configuration error and a coin inside a
/// wall is fatal. Coins under the start rectangle or overlapping a coin
/// already accepted are dropped, and what remains must still cover
/// `config.coin_count`.
pub fn validate(
    coins: &[Vec2],
    walls: &WallSet,
    start: Rect,
    config: &GameConfig,
) -> Result<Vec<Vec2>, GameError> {
    let size = config.tile_size;
    let origin = config.origin();
    let field = Rect::new(
        origin.x,
        origin.y,
        config.width(),
        config.height() - config.header_height,
    );
    let mut valid: Vec<Vec2> = Vec::with_capacity(coins.len());

    for &coin in coins {
        let rect = Rect::square(coin, size);
        if !field.encloses(&rect) {
            return Err(ConfigurationError::CoinOutsidePlayField {
                x: coin.x,
                y: coin.y,
            }
            .into());
        }
        let offset = coin - origin;
        if offset.x % size != 0.0 || offset.y % size != 0.0 {
            return Err(ConfigurationError::CoinNotTileAligned {
                x: coin.x,
                y: coin.y,
            }
            .into());
        }
        if rect.intersects_any(walls) {
            return Err(InvariantViolation::CoinOverlapsWall {
                x: coin.x,
                y: coin.y,
            }
            .into());
        }

        let overlaps_accepted = valid
            .iter()
            .any(|&other| Rect::square(other, size).intersects(&rect));
        if rect.intersects(&start) || overlaps_accepted {
            continue;
        }
        valid.push(coin);
    }

    if valid.len() < config.coin_count {
        return Err(ConfigurationError::NotEnoughCoinSpots {
            required: config.coin_count,
            available: valid.len(),
        }
        .into());
    }

    Ok(valid)
}
