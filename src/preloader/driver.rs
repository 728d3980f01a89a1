#[cfg(test)]
pub mod manual;

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use log::warn;
use thiserror::Error;

use super::{
    controller::{Outcome, Phase, PreloaderController, PreloaderView},
    Millis,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickError {
    #[error("animation frame request failed: {0}")]
    Frame(String),
    #[error("timer could not be scheduled: {0}")]
    Timer(String),
}

/// Clock, per-frame callbacks and fire-once timers supplied by the host.
/// Every request hands back a handle that can be cancelled on its own.
pub trait TickSource {
    type Frame;
    type Timer;

    fn now(&self) -> Millis;
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<Self::Frame, TickError>;
    fn cancel_frame(&self, frame: Self::Frame);
    fn set_timer(&self, delay: Millis, callback: Box<dyn FnOnce()>) -> Result<Self::Timer, TickError>;
    fn clear_timer(&self, timer: Self::Timer);
}

type Observer = Box<dyn FnMut(PreloaderView)>;
type OnDone = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Frame,
    Timer,
    Skip,
}

struct State<S: TickSource> {
    controller: PreloaderController,
    frame: Option<S::Frame>,
    timer: Option<(Millis, S::Timer)>,
    started: bool,
    stopped: bool,
}

struct Shared<S: TickSource> {
    ticks: S,
    state: RefCell<State<S>>,
    observer: RefCell<Option<Observer>>,
    on_done: Cell<Option<OnDone>>,
}

/// Runs a [`PreloaderController`] off a [`TickSource`].
///
/// At most one frame request and one timer are outstanding at any time. The
/// timer always targets the controller's next deadline. Callbacks into the
/// host (`observer`, `on_done`) run after internal state is released, so the
/// host may stop the driver from inside them.
pub struct PreloaderDriver<S: TickSource + 'static> {
    shared: Rc<Shared<S>>,
}

impl<S: TickSource + 'static> PreloaderDriver<S> {
    pub fn new(ticks: S, controller: PreloaderController) -> Self {
        Self {
            shared: Rc::new(Shared {
                ticks,
                state: RefCell::new(State {
                    controller,
                    frame: None,
                    timer: None,
                    started: false,
                    stopped: false,
                }),
                observer: RefCell::new(None),
                on_done: Cell::new(None),
            }),
        }
    }

    pub fn with_observer(self, observer: impl FnMut(PreloaderView) + 'static) -> Self {
        *self.shared.observer.borrow_mut() = Some(Box::new(observer));
        self
    }

    /// Subscribes to the tick source. `on_done` runs once, when the controller
    /// reaches `Done`, and never after [`stop`](Self::stop).
    pub fn start(self, on_done: impl FnOnce() + 'static) -> Self {
        self.shared.on_done.set(Some(Box::new(on_done)));
        let now = self.shared.ticks.now();
        {
            let mut state = self.shared.state.borrow_mut();
            if !state.started && !state.stopped {
                state.started = true;
                Self::request_frame(&self.shared, &mut state);
                Self::rearm_timer(&self.shared, &mut state, now);
            }
        }
        self
    }

    pub fn skip(&self) {
        Self::pump(&self.shared, Trigger::Skip);
    }

    /// Unsubscribes from the tick source. Pending callbacks are cancelled and
    /// `on_done` is dropped without running.
    pub fn stop(&self) {
        let Ok(mut state) = self.shared.state.try_borrow_mut() else {
            warn!("preloader stop requested while ticking; ignored");
            return;
        };
        if state.stopped {
            return;
        }
        state.stopped = true;
        state.controller.unmount();
        if let Some(frame) = state.frame.take() {
            self.shared.ticks.cancel_frame(frame);
        }
        if let Some((_, timer)) = state.timer.take() {
            self.shared.ticks.clear_timer(timer);
        }
        drop(state);
        drop(self.shared.on_done.take());
        if let Ok(mut observer) = self.shared.observer.try_borrow_mut() {
            observer.take();
        }
    }

    pub fn view(&self) -> PreloaderView {
        self.shared.state.borrow().controller.view()
    }

    pub fn outcome(&self) -> Outcome {
        self.shared.state.borrow().controller.outcome()
    }

    fn pump(shared: &Rc<Shared<S>>, trigger: Trigger) {
        let (entered, view) = {
            let mut state = shared.state.borrow_mut();
            if state.stopped || !state.started {
                return;
            }
            let now = shared.ticks.now();
            let entered = match trigger {
                Trigger::Frame => {
                    state.frame = None;
                    state.controller.on_frame(now)
                }
                Trigger::Timer => {
                    state.timer = None;
                    state.controller.advance(now)
                }
                Trigger::Skip => state.controller.skip(now),
            };
            if trigger == Trigger::Frame && state.controller.is_running() {
                Self::request_frame(shared, &mut state);
            }
            if !state.controller.is_running() {
                if let Some(frame) = state.frame.take() {
                    shared.ticks.cancel_frame(frame);
                }
            }
            Self::rearm_timer(shared, &mut state, now);
            (entered, state.controller.view())
        };

        if let Ok(mut observer) = shared.observer.try_borrow_mut() {
            if let Some(observer) = observer.as_mut() {
                observer(view);
            }
        }
        if entered.contains(&Phase::Done) {
            if let Some(on_done) = shared.on_done.take() {
                on_done();
            }
        }
    }

    fn request_frame(shared: &Rc<Shared<S>>, state: &mut State<S>) {
        let weak = Rc::downgrade(shared);
        match shared.ticks.request_frame(Box::new(move || Self::wake(&weak, Trigger::Frame))) {
            Ok(frame) => state.frame = Some(frame),
            // the timeout timer still guarantees termination
            Err(err) => warn!("preloader frame loop stalled: {err}"),
        }
    }

    fn rearm_timer(shared: &Rc<Shared<S>>, state: &mut State<S>, now: Millis) {
        let wanted = state.controller.next_deadline();
        if state.timer.as_ref().map(|(at, _)| *at) == wanted {
            return;
        }
        if let Some((_, timer)) = state.timer.take() {
            shared.ticks.clear_timer(timer);
        }
        let Some(at) = wanted else {
            return;
        };
        let weak = Rc::downgrade(shared);
        match shared
            .ticks
            .set_timer(at.saturating_sub(now), Box::new(move || Self::wake(&weak, Trigger::Timer)))
        {
            Ok(timer) => state.timer = Some((at, timer)),
            Err(err) => warn!("preloader timer for {at}ms not armed: {err}"),
        }
    }

    fn wake(weak: &Weak<Shared<S>>, trigger: Trigger) {
        if let Some(shared) = weak.upgrade() {
            Self::pump(&shared, trigger);
        }
    }
}

impl<S: TickSource + 'static> Drop for PreloaderDriver<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::{manual::ManualTicks, *};
    use crate::preloader::{
        config::PreloaderConfig,
        controller::ExitReason,
        schedule::{ProgressSchedule, ProgressStep},
        smoother::Smoother,
    };

    fn config() -> PreloaderConfig {
        PreloaderConfig::default()
            .with_min_duration(3000)
            .with_timeout(10_000)
            .with_extra_hold(800)
            .with_exit(360)
    }

    fn start(
        ticks: &ManualTicks,
        config: PreloaderConfig,
        schedule: ProgressSchedule,
    ) -> (PreloaderDriver<ManualTicks>, Rc<Cell<usize>>) {
        let done = Rc::new(Cell::new(0));
        let controller = PreloaderController::new(config, schedule, Smoother::default(), ticks.now());
        let counter = done.clone();
        let driver = PreloaderDriver::new(ticks.clone(), controller)
            .start(move || counter.set(counter.get() + 1));
        (driver, done)
    }

    #[test]
    fn test_exit_waits_for_min_duration() {
        let ticks = ManualTicks::new();
        let (driver, done) = start(&ticks, config(), ProgressSchedule::instant());

        ticks.advance_to(1000);
        assert_eq!(driver.view().phase, Phase::Showing);
        assert_eq!(driver.view().progress, 1.0);

        ticks.advance_to(3799);
        assert_eq!(driver.view().phase, Phase::Showing);
        ticks.advance_to(3800);
        assert_eq!(driver.view().phase, Phase::Exiting);

        ticks.advance_to(4159);
        assert_eq!(done.get(), 0);
        ticks.advance_to(4160);
        assert_eq!(driver.view().phase, Phase::Done);
        assert_eq!(done.get(), 1);
        assert_eq!(driver.outcome(), Outcome::Completed);

        // nothing left ticking once done
        assert_eq!(ticks.pending(), 0);
        let fired = ticks.fired();
        ticks.advance_to(20_000);
        assert_eq!(ticks.fired(), fired);
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn test_exit_follows_late_full_progress() {
        let ticks = ManualTicks::new();
        let full_at = Rc::new(Cell::new(None));
        let controller = PreloaderController::mount(config().with_min_duration(100), ticks.now());
        let driver = PreloaderDriver::new(ticks.clone(), controller)
            .with_observer({
                let ticks = ticks.clone();
                let full_at = full_at.clone();
                move |view| {
                    if view.progress >= 1.0 && full_at.get().is_none() {
                        full_at.set(Some(ticks.now()));
                    }
                }
            })
            .start(|| {});

        while full_at.get().is_none() {
            ticks.advance_by(1);
            assert!(ticks.now() < 10_000, "progress never reached 100%");
        }
        let full_at = full_at.get().expect("checked above");
        assert!(full_at > ProgressSchedule::default().ramp_ms());

        ticks.advance_to(full_at + 799);
        assert_eq!(driver.view().phase, Phase::Showing);
        ticks.advance_to(full_at + 800);
        assert_eq!(driver.view().phase, Phase::Exiting);
    }

    #[test]
    fn test_stalled_progress_times_out() {
        let ticks = ManualTicks::new();
        let stalled = ProgressSchedule::new(0, vec![ProgressStep::new(0.35, 600_000), ProgressStep::new(1.0, 0)])
            .expect("schedule should be valid");
        let (driver, done) = start(&ticks, config(), stalled);

        ticks.advance_to(9999);
        assert_eq!(driver.view().phase, Phase::Showing);
        ticks.advance_to(10_000);
        assert_eq!(driver.view().phase, Phase::Exiting);
        assert!(driver.view().progress < 1.0);
        assert_eq!(
            driver.shared.state.borrow().controller.exit_reason(),
            Some(ExitReason::TimedOut)
        );
        ticks.advance_to(11_000);
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn test_double_skip_completes_once() {
        let ticks = ManualTicks::new();
        let (driver, done) = start(&ticks, config(), ProgressSchedule::default());

        ticks.advance_to(500);
        driver.skip();
        ticks.advance_by(1);
        driver.skip();
        assert_eq!(driver.view().phase, Phase::Exiting);

        ticks.advance_to(5000);
        assert_eq!(done.get(), 1);
        driver.skip();
        ticks.advance_to(12_000);
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn test_stop_before_done_suppresses_everything() {
        for stop_at in [0, 5, 16, 700, 2500, 3805, 4100] {
            let ticks = ManualTicks::new();
            let (driver, done) = start(&ticks, config(), ProgressSchedule::instant());
            ticks.advance_to(stop_at);
            driver.stop();
            assert_eq!(driver.outcome(), Outcome::Cancelled);
            assert_eq!(ticks.pending(), 0, "stopped at {stop_at}");

            let fired = ticks.fired();
            ticks.advance_to(20_000);
            assert_eq!(ticks.fired(), fired, "stopped at {stop_at}");
            assert_eq!(done.get(), 0, "stopped at {stop_at}");
            driver.skip();
            assert_eq!(done.get(), 0);
        }
    }

    #[test]
    fn test_drop_stops_driver() {
        let ticks = ManualTicks::new();
        let (driver, done) = start(&ticks, config(), ProgressSchedule::instant());
        ticks.advance_to(100);
        drop(driver);
        assert_eq!(ticks.pending(), 0);
        ticks.advance_to(20_000);
        assert_eq!(done.get(), 0);
    }

    #[test]
    fn test_stop_from_on_done() {
        let ticks = ManualTicks::new();
        let slot = Rc::new(RefCell::new(None::<PreloaderDriver<ManualTicks>>));
        let controller = PreloaderController::new(config().with_exit(0), ProgressSchedule::instant(), Smoother::default(), 0);
        let driver = PreloaderDriver::new(ticks.clone(), controller).start({
            let slot = slot.clone();
            move || {
                // the host unmounts the overlay as soon as it is told
                if let Some(driver) = slot.borrow_mut().take() {
                    driver.stop();
                }
            }
        });
        *slot.borrow_mut() = Some(driver);
        ticks.advance_to(5000);
        assert!(slot.borrow().is_none());
        assert_eq!(ticks.pending(), 0);
    }
}
