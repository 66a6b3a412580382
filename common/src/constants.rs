// Grid:
pub const COLS: usize = 30;
pub const ROWS: usize = 30;
pub const TILE_SIZE: f32 = 20.0; // Pixels per side.
pub const HEADER_HEIGHT: f32 = 40.0; // Band above the maze reserved for score and timer.

// Session:
pub const COIN_COUNT: usize = 10;
pub const WIN_THRESHOLD: u32 = COIN_COUNT as u32;
pub const TIMER_SECS: f32 = 90.0;
pub const PLAYER_SPEED: f32 = 10.0; // Pixels per tick.

// Host:
pub const TICK_RATE: f32 = 30.0;
pub const TICK_SECS: f32 = 1.0 / TICK_RATE;
pub const MAX_FRAME_SECS: f32 = 0.25; // Clamp to avoid a burst of catch-up ticks after a stall.
