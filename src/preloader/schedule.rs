use thiserror::Error;

use super::Millis;

const DEFAULT_START_DELAY_MS: Millis = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressStep {
    pub target: f64,
    /// How long the simulator waits after publishing `target`.
    pub hold_ms: Millis,
}

impl ProgressStep {
    pub const fn new(target: f64, hold_ms: Millis) -> Self {
        Self { target, hold_ms }
    }
}

const DEFAULT_STEPS: [ProgressStep; 6] = [
    ProgressStep::new(0.15, 200),
    ProgressStep::new(0.35, 400),
    ProgressStep::new(0.55, 600),
    ProgressStep::new(0.75, 500),
    ProgressStep::new(0.90, 400),
    ProgressStep::new(1.00, 400),
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("progress schedule has no steps")]
    Empty,
    #[error("step {index} target {target} is outside 0..=1")]
    OutOfRange { index: usize, target: f64 },
    #[error("step {index} target {target} is below the previous target {previous}")]
    Decreasing {
        index: usize,
        target: f64,
        previous: f64,
    },
    #[error("last step ends at {last} instead of 1.0")]
    Unfinished { last: f64 },
}

/// Fixed, fake loading schedule. Targets only ever go up and the last one is
/// exactly 1.0, so the ramp time is known up front.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSchedule {
    start_delay_ms: Millis,
    steps: Vec<ProgressStep>,
}

impl Default for ProgressSchedule {
    fn default() -> Self {
        Self {
            start_delay_ms: DEFAULT_START_DELAY_MS,
            steps: DEFAULT_STEPS.to_vec(),
        }
    }
}

impl ProgressSchedule {
    pub fn new(start_delay_ms: Millis, steps: Vec<ProgressStep>) -> Result<Self, ScheduleError> {
        let last = steps.last().ok_or(ScheduleError::Empty)?.target;
        let mut previous = 0.0;
        for (index, step) in steps.iter().enumerate() {
            if !(0.0..=1.0).contains(&step.target) {
                return Err(ScheduleError::OutOfRange {
                    index,
                    target: step.target,
                });
            }
            if step.target < previous {
                return Err(ScheduleError::Decreasing {
                    index,
                    target: step.target,
                    previous,
                });
            }
            previous = step.target;
        }
        if last != 1.0 {
            return Err(ScheduleError::Unfinished { last });
        }
        Ok(Self {
            start_delay_ms,
            steps,
        })
    }

    /// A schedule that jumps straight to 1.0 with no delay.
    pub fn instant() -> Self {
        Self {
            start_delay_ms: 0,
            steps: vec![ProgressStep::new(1.0, 0)],
        }
    }

    pub fn start_delay_ms(&self) -> Millis {
        self.start_delay_ms
    }

    pub fn steps(&self) -> &[ProgressStep] {
        &self.steps
    }

    /// Offsets (from mount) at which each target is published.
    pub fn emissions(&self) -> impl Iterator<Item = (Millis, f64)> + '_ {
        self.steps
            .iter()
            .scan(self.start_delay_ms, |at, step| {
                let emitted = (*at, step.target);
                *at += step.hold_ms;
                Some(emitted)
            })
    }

    /// Time from mount until the 1.0 target is published.
    pub fn ramp_ms(&self) -> Millis {
        self.emissions()
            .last()
            .map(|(at, _)| at)
            .unwrap_or(self.start_delay_ms)
    }
}

/// Walks a schedule one step at a time.
#[derive(Debug, Clone)]
pub struct ProgressSimulator {
    schedule: ProgressSchedule,
    next: usize,
    target: f64,
}

impl ProgressSimulator {
    pub fn new(schedule: ProgressSchedule) -> Self {
        Self {
            schedule,
            next: 0,
            target: 0.0,
        }
    }

    pub fn start_delay_ms(&self) -> Millis {
        self.schedule.start_delay_ms
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.schedule.steps.len()
    }

    /// Publishes the next target. Returns the new target and the delay before
    /// the following step, or `None` for the delay once the schedule is spent.
    pub fn advance(&mut self) -> Option<(f64, Option<Millis>)> {
        let step = *self.schedule.steps.get(self.next)?;
        self.next += 1;
        self.target = self.target.max(step.target);
        let delay = (!self.is_finished()).then_some(step.hold_ms);
        Some((self.target, delay))
    }
}
