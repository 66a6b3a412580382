use std::{error::Error, fmt};

/// Problems with the requested setup. Fatal to session startup.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    InvalidGridSize { cols: usize, rows: usize },
    NotEnoughCoinSpots { required: usize, available: usize },
    UnreachableFinish { start: (usize, usize), finish: (usize, usize) },
    CoinOutsidePlayField { x: f32, y: f32 },
    CoinNotTileAligned { x: f32, y: f32 },
    InvalidValue { key: &'static str, value: String },
    InvalidSetting(&'static str),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::InvalidGridSize { cols, rows } => {
                write!(
                    f,
                    "grid of {}x{} cells is too small to hold the start cell",
                    cols, rows
                )
            }
            ConfigurationError::NotEnoughCoinSpots {
                required,
                available,
            } => write!(
                f,
                "need {} coin positions but only {} are available",
                required, available
            ),
            ConfigurationError::UnreachableFinish { start, finish } => write!(
                f,
                "finish cell {:?} cannot be reached from start cell {:?}",
                finish, start
            ),
            ConfigurationError::CoinOutsidePlayField { x, y } => {
                write!(f, "coin at ({}, {}) lies outside the play field", x, y)
            }
            ConfigurationError::CoinNotTileAligned { x, y } => {
                write!(f, "coin at ({}, {}) is not aligned to the tile grid", x, y)
            }
            ConfigurationError::InvalidValue { key, value } => {
                write!(f, "invalid value '{}' for {}", value, key)
            }
            ConfigurationError::InvalidSetting(reason) => write!(f, "{}", reason),
        }
    }
}

impl Error for ConfigurationError {}

/// A layout that passed placement but still overlaps a wall. Should be
/// unreachable when the maze and coins come from this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    CoinOverlapsWall { x: f32, y: f32 },
    FinishOverlapsWall { x: f32, y: f32 },
    StartOverlapsWall { x: f32, y: f32 },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::CoinOverlapsWall { x, y } => {
                write!(f, "coin at ({}, {}) overlaps a wall", x, y)
            }
            InvariantViolation::FinishOverlapsWall { x, y } => {
                write!(f, "finish line at ({}, {}) overlaps a wall", x, y)
            }
            InvariantViolation::StartOverlapsWall { x, y } => {
                write!(f, "player start at ({}, {}) overlaps a wall", x, y)
            }
        }
    }
}

impl Error for InvariantViolation {}

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    Configuration(ConfigurationError),
    InvariantViolation(InvariantViolation),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Configuration(e) => write!(f, "configuration error: {}", e),
            GameError::InvariantViolation(e) => write!(f, "invariant violation: {}", e),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::Configuration(e) => Some(e),
            GameError::InvariantViolation(e) => Some(e),
        }
    }
}

impl From<ConfigurationError> for GameError {
    fn from(e: ConfigurationError) -> Self {
        GameError::Configuration(e)
    }
}

impl From<InvariantViolation> for GameError {
    fn from(e: InvariantViolation) -> Self {
        GameError::InvariantViolation(e)
    }
}
