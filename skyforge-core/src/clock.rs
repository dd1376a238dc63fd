pub const MAX_STEPS_PER_FRAME: u32 = 5;

/// Turns variable display frame times into a whole number of fixed simulation
/// steps.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step_seconds: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(step_seconds: f32) -> Self {
        Self {
            step_seconds,
            accumulator: 0.0,
        }
    }

    pub fn step_seconds(&self) -> f32 {
        self.step_seconds
    }

    /// Adds `elapsed` seconds and returns how many steps are due. Backlog past
    /// `MAX_STEPS_PER_FRAME` is dropped.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.accumulator += elapsed;
        }

        let mut steps = 0;
        while self.accumulator >= self.step_seconds && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step_seconds;
            steps += 1;
        }

        if steps == MAX_STEPS_PER_FRAME {
            self.accumulator = self.accumulator.min(self.step_seconds);
        }
        steps
    }
}
