use common::constants::{MAX_FRAME_SECS, TICK_SECS};

/// Turns variable frame times into a whole number of fixed simulation ticks.
#[derive(Debug, Default)]
pub struct TickClock {
    pub accumulated_time: f32,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one frame's worth of time and returns how many ticks are due.
    /// Leftover time carries over to the next frame.
    pub fn advance(&mut self, frame_secs: f32) -> u32 {
        // Clamp to avoid a burst of catch-up ticks if a frame stalls.
        self.accumulated_time += frame_secs.clamp(0.0, MAX_FRAME_SECS);

        let mut ticks = 0;
        while self.accumulated_time >= TICK_SECS {
            self.accumulated_time -= TICK_SECS;
            ticks += 1;
        }
        ticks
    }
}
