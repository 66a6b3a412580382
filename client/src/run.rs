use log::info;
use macroquad::prelude::*;

use crate::{
    draw,
    input::{InputSource, MacroquadInput, acknowledged},
    instructions::InstructionsLayout,
    time::TickClock,
};
use common::{GameEngine, Phase, constants::TICK_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

pub struct ClientRunner {
    pub engine: GameEngine,
    pub clock: TickClock,
    instructions: InstructionsLayout,
}

impl ClientRunner {
    pub fn new(engine: GameEngine) -> Self {
        let instructions = InstructionsLayout::new(engine.config());
        Self {
            engine,
            clock: TickClock::new(),
            instructions,
        }
    }

    /// Applies one frame of input and runs whatever ticks the frame time
    /// pays for.
    pub fn update(&mut self, input: &dyn InputSource, frame_secs: f32) -> LoopControl {
        if input.quit_requested() {
            return LoopControl::Quit;
        }

        if self.engine.phase() == Phase::Instructions {
            if acknowledged(input, &self.instructions.button) {
                self.engine.acknowledge();
                // Time spent reading does not count.
                self.clock = TickClock::new();
            }
            return LoopControl::Continue;
        }

        let keys = input.player_input();
        for _ in 0..self.clock.advance(frame_secs) {
            self.engine.tick(TICK_SECS, keys);
        }

        LoopControl::Continue
    }

    pub fn draw(&self) {
        match self.engine.phase() {
            Phase::Instructions => self.instructions.draw(self.engine.config().width()),
            Phase::Playing | Phase::Won | Phase::GameOver => {
                draw::draw_play_field(&self.engine.snapshot(), self.engine.config());
            }
        }
    }
}

pub async fn run_client_loop(engine: GameEngine) {
    prevent_quit();

    let mut runner = ClientRunner::new(engine);
    let input = MacroquadInput;

    loop {
        if runner.update(&input, get_frame_time()) == LoopControl::Quit {
            break;
        }
        runner.draw();

        next_frame().await;
    }

    info!(
        "leaving in phase {} with score {}",
        runner.engine.phase(),
        runner.engine.score()
    );
}
