//! Fixed-timestep accumulator.
//!
//! Hosts hand in however much time passed since the last call; `FixedStep`
//! turns that into a whole number of equal steps and keeps the remainder for
//! next time. Each step carries the host timestamp it represents.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedStep {
    step_ms: u64,
    accumulator_ms: u64,
    /// Host time covered by the steps emitted so far.
    now_ms: u64,
}

impl FixedStep {
    /// `step_ms` is clamped to at least 1ms.
    pub fn new(step_ms: u64) -> Self {
        Self {
            step_ms: step_ms.max(1),
            accumulator_ms: 0,
            now_ms: 0,
        }
    }

    pub fn step_ms(&self) -> u64 {
        self.step_ms
    }

    /// Timestamp of the last emitted step.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Time banked but not yet emitted as a step.
    pub fn pending_ms(&self) -> u64 {
        self.accumulator_ms
    }

    /// Add `delta_ms` and return the timestamps of every step now due.
    pub fn advance(&mut self, delta_ms: u64) -> impl Iterator<Item = u64> + '_ {
        self.accumulator_ms = self.accumulator_ms.saturating_add(delta_ms);
        std::iter::from_fn(move || {
            if self.accumulator_ms < self.step_ms {
                return None;
            }
            self.accumulator_ms -= self.step_ms;
            self.now_ms += self.step_ms;
            Some(self.now_ms)
        })
    }
}
