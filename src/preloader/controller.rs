use log::{debug, warn};

use super::{
    config::PreloaderConfig,
    schedule::{ProgressSchedule, ProgressSimulator},
    smoother::Smoother,
    timers::{TimerId, TimerQueue},
    Millis,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Entering,
    Showing,
    Exiting,
    Done,
}

impl Phase {
    fn next(self) -> Self {
        match self {
            Self::Entering => Self::Showing,
            Self::Showing => Self::Exiting,
            Self::Exiting | Self::Done => Self::Done,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entering => "enter",
            Self::Showing => "show",
            Self::Exiting => "exit",
            Self::Done => "done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Completed,
    TimedOut,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Running,
    Completed,
    /// Torn down before reaching `Done`.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wake {
    Progress,
    Timeout,
    Hold,
    ExitFinished,
}

/// What the host needs to draw the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreloaderView {
    pub phase: Phase,
    pub progress: f64,
}

/// Phase state machine for one preloader run.
///
/// The controller never reads a clock. The host passes the current time into
/// [`on_frame`](Self::on_frame) once per display refresh and into
/// [`advance`](Self::advance) whenever [`next_deadline`](Self::next_deadline)
/// passes. Every call returns the phases entered, in order; `Phase::Done`
/// shows up in those lists at most once per run.
#[derive(Debug, Clone)]
pub struct PreloaderController {
    config: PreloaderConfig,
    smoother: Smoother,
    simulator: ProgressSimulator,
    timers: TimerQueue<Wake>,
    phase: Phase,
    displayed: f64,
    started_at: Millis,
    reached_full_at: Option<Millis>,
    hold_timer: Option<TimerId>,
    exit_reason: Option<ExitReason>,
    outcome: Outcome,
}

impl PreloaderController {
    pub fn new(config: PreloaderConfig, schedule: ProgressSchedule, smoother: Smoother, now: Millis) -> Self {
        let simulator = ProgressSimulator::new(schedule);
        let mut timers = TimerQueue::new();
        timers.schedule(now.saturating_add(simulator.start_delay_ms()), Wake::Progress);
        timers.schedule(now.saturating_add(config.timeout_ms), Wake::Timeout);
        debug!(
            "preloader mounted at {now}ms (min hold {}ms, timeout {}ms)",
            config.min_duration_ms, config.timeout_ms
        );
        Self {
            config,
            smoother,
            simulator,
            timers,
            phase: Phase::Entering,
            displayed: 0.0,
            started_at: now,
            reached_full_at: None,
            hold_timer: None,
            exit_reason: None,
            outcome: Outcome::Running,
        }
    }

    pub fn mount(config: PreloaderConfig, now: Millis) -> Self {
        Self::new(config, ProgressSchedule::default(), Smoother::default(), now)
    }

    pub fn config(&self) -> &PreloaderConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn target(&self) -> f64 {
        self.simulator.target()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn exit_reason(&self) -> Option<ExitReason> {
        self.exit_reason
    }

    pub fn started_at(&self) -> Millis {
        self.started_at
    }

    pub fn min_hold_until(&self) -> Millis {
        self.started_at.saturating_add(self.config.min_duration_ms)
    }

    pub fn timeout_at(&self) -> Millis {
        self.started_at.saturating_add(self.config.timeout_ms)
    }

    pub fn reached_full_at(&self) -> Option<Millis> {
        self.reached_full_at
    }

    pub fn is_running(&self) -> bool {
        self.outcome == Outcome::Running
    }

    pub fn view(&self) -> PreloaderView {
        PreloaderView {
            phase: self.phase,
            progress: self.displayed,
        }
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        if self.is_running() {
            self.timers.next_deadline()
        } else {
            None
        }
    }

    /// Per-frame tick: fires due timers, leaves `Entering`, and eases the
    /// displayed progress while `Showing`.
    pub fn on_frame(&mut self, now: Millis) -> Vec<Phase> {
        let mut entered = self.advance(now);
        if !self.is_running() {
            return entered;
        }
        if self.phase == Phase::Entering {
            self.enter(Phase::Showing, &mut entered);
        }
        if self.phase == Phase::Showing {
            self.displayed = self.smoother.step(self.displayed, self.simulator.target());
            if self.displayed >= 1.0 && self.reached_full_at.is_none() {
                self.reached_full_at = Some(now);
                let at = now.max(self.min_hold_until()).saturating_add(self.config.extra_hold_ms);
                debug!("preloader reached 100% at {now}ms, exiting at {at}ms");
                self.hold_timer = Some(self.timers.schedule(at, Wake::Hold));
            }
        }
        entered
    }

    /// Fires every timer due at `now`.
    pub fn advance(&mut self, now: Millis) -> Vec<Phase> {
        let mut entered = vec![];
        while self.is_running() {
            let Some((at, wake)) = self.timers.pop_due(now) else {
                break;
            };
            match wake {
                Wake::Progress => {
                    if let Some((target, delay)) = self.simulator.advance() {
                        debug!("preloader target {target:.2} at {at}ms");
                        if let Some(delay) = delay {
                            self.timers.schedule(at.saturating_add(delay), Wake::Progress);
                        }
                    }
                }
                Wake::Timeout => {
                    warn!(
                        "preloader timed out after {}ms at {:.0}%",
                        self.config.timeout_ms,
                        self.displayed * 100.0
                    );
                    self.begin_exit(ExitReason::TimedOut, at, &mut entered);
                }
                Wake::Hold => {
                    self.hold_timer = None;
                    self.begin_exit(ExitReason::Completed, at, &mut entered);
                }
                Wake::ExitFinished => {
                    self.enter(Phase::Done, &mut entered);
                    self.outcome = Outcome::Completed;
                    self.timers.cancel_all();
                }
            }
        }
        entered
    }

    /// User-requested exit. Shares the one-shot guard with the natural and
    /// timeout paths; later calls do nothing.
    pub fn skip(&mut self, now: Millis) -> Vec<Phase> {
        let mut entered = vec![];
        if self.is_running() {
            self.begin_exit(ExitReason::Skipped, now, &mut entered);
            entered.extend(self.advance(now));
        }
        entered
    }

    /// Tears the run down. Pending timers are dropped and `Done` will never be
    /// reported.
    pub fn unmount(&mut self) {
        if self.is_running() {
            debug!("preloader unmounted during {:?}", self.phase);
            self.outcome = Outcome::Cancelled;
        }
        self.timers.cancel_all();
        self.hold_timer = None;
    }

    fn begin_exit(&mut self, reason: ExitReason, at: Millis, entered: &mut Vec<Phase>) {
        if self.exit_reason.is_some() || !self.is_running() {
            return;
        }
        self.exit_reason = Some(reason);
        self.timers.cancel_all();
        self.hold_timer = None;
        self.timers.schedule(at.saturating_add(self.config.exit_ms), Wake::ExitFinished);
        debug!("preloader exiting ({reason:?}) at {at}ms");
        self.enter(Phase::Exiting, entered);
    }

    // walks forward one phase at a time so no phase is ever skipped
    fn enter(&mut self, to: Phase, entered: &mut Vec<Phase>) {
        while self.phase < to {
            let next = self.phase.next();
            debug!("preloader phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
            entered.push(next);
        }
    }
}
