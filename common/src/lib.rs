pub mod coins;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod maze;
pub mod player;
pub mod rect;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod test_helpers;

use rand::{SeedableRng, rngs::StdRng};

pub use config::GameConfig;
pub use engine::{GameEngine, Phase};
pub use error::{ConfigurationError, GameError, InvariantViolation};
pub use player::PlayerInput;
pub use snapshot::Snapshot;

/// Seeded generator for reproducible sessions, or one seeded from the OS
/// when no seed is given.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
