use std::{cell::RefCell, rc::Rc};

use super::{TickError, TickSource};
use crate::preloader::Millis;

pub const FRAME_MS: Millis = 16;

type Callback = Box<dyn FnOnce()>;

#[derive(Default)]
struct Clock {
    now: Millis,
    next_id: u64,
    frames: Vec<(u64, Callback)>,
    timers: Vec<(Millis, u64, Callback)>,
    fired: usize,
}

/// Fake clock for tests. Time only moves through `advance_*`, one
/// millisecond at a time; timers fire on their exact deadline and frames on
/// every multiple of [`FRAME_MS`].
#[derive(Clone, Default)]
pub struct ManualTicks {
    clock: Rc<RefCell<Clock>>,
}

impl ManualTicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks run so far.
    pub fn fired(&self) -> usize {
        self.clock.borrow().fired
    }

    /// Frame requests and timers still waiting to fire.
    pub fn pending(&self) -> usize {
        let clock = self.clock.borrow();
        clock.frames.len() + clock.timers.len()
    }

    pub fn advance_by(&self, ms: Millis) {
        let target = self.now() + ms;
        self.advance_to(target);
    }

    pub fn advance_to(&self, target: Millis) {
        while self.now() < target {
            self.clock.borrow_mut().now += 1;
            self.run_due();
        }
    }

    fn run_due(&self) {
        // callbacks are taken out before running; they may schedule more work
        while let Some(callback) = self.take_due_timer() {
            callback();
        }
        let frames = {
            let mut clock = self.clock.borrow_mut();
            if clock.now % FRAME_MS != 0 {
                return;
            }
            let frames = std::mem::take(&mut clock.frames);
            clock.fired += frames.len();
            frames
        };
        for (_, callback) in frames {
            callback();
        }
    }

    fn take_due_timer(&self) -> Option<Callback> {
        let mut clock = self.clock.borrow_mut();
        let now = clock.now;
        let index = clock
            .timers
            .iter()
            .enumerate()
            .filter(|(_, (at, _, _))| *at <= now)
            .min_by_key(|(_, (at, id, _))| (*at, *id))
            .map(|(index, _)| index)?;
        clock.fired += 1;
        Some(clock.timers.remove(index).2)
    }

    fn next_id(&self) -> u64 {
        let mut clock = self.clock.borrow_mut();
        clock.next_id += 1;
        clock.next_id
    }
}

impl TickSource for ManualTicks {
    type Frame = u64;
    type Timer = u64;

    fn now(&self) -> Millis {
        self.clock.borrow().now
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<u64, TickError> {
        let id = self.next_id();
        self.clock.borrow_mut().frames.push((id, callback));
        Ok(id)
    }

    fn cancel_frame(&self, frame: u64) {
        self.clock.borrow_mut().frames.retain(|(id, _)| *id != frame);
    }

    fn set_timer(&self, delay: Millis, callback: Box<dyn FnOnce()>) -> Result<u64, TickError> {
        let id = self.next_id();
        let mut clock = self.clock.borrow_mut();
        let at = clock.now.saturating_add(delay);
        clock.timers.push((at, id, callback));
        Ok(id)
    }

    fn clear_timer(&self, timer: u64) {
        self.clock.borrow_mut().timers.retain(|(_, id, _)| *id != timer);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_manual_ticks() {
        let ticks = ManualTicks::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        ticks.set_timer(5, Box::new(move || h.set(h.get() + 1))).unwrap();
        let h = hits.clone();
        let cancelled = ticks.set_timer(6, Box::new(move || h.set(h.get() + 10))).unwrap();
        let h = hits.clone();
        ticks.request_frame(Box::new(move || h.set(h.get() + 100))).unwrap();
        ticks.clear_timer(cancelled);

        ticks.advance_to(4);
        assert_eq!(hits.get(), 0);
        ticks.advance_to(5);
        assert_eq!(hits.get(), 1);
        ticks.advance_to(16);
        assert_eq!(hits.get(), 101);
        assert_eq!(ticks.fired(), 2);
        assert_eq!(ticks.pending(), 0);
    }
}
