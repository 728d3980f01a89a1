/// Per-frame easing of the displayed progress toward the current target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoother {
    pub gain: f64,
    pub min_step: f64,
    pub max_step: f64,
    pub snap_epsilon: f64,
}

impl Default for Smoother {
    fn default() -> Self {
        Self {
            gain: 0.16,
            min_step: 0.008,
            max_step: 0.12,
            snap_epsilon: 0.001,
        }
    }
}

impl Smoother {
    /// Next displayed value. Never moves backwards, never passes the target,
    /// and lands on exactly 1.0 once close enough to a full target.
    pub fn step(&self, prev: f64, target: f64) -> f64 {
        let target = target.clamp(0.0, 1.0);
        let diff = target - prev;
        if diff <= 0.0 {
            return prev.min(1.0);
        }
        let delta = (diff * self.gain).clamp(self.min_step, self.max_step);
        let next = (prev + delta).min(target);
        if target >= 1.0 && 1.0 - next <= self.snap_epsilon {
            1.0
        } else {
            next
        }
    }

    /// Frames needed to go from `from` to a steady `target`.
    pub fn frames_to_reach(&self, from: f64, target: f64) -> usize {
        let mut value = from;
        let mut frames = 0;
        while value < target.clamp(0.0, 1.0) {
            value = self.step(value, target);
            frames += 1;
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain_is_bounded() {
        let s = Smoother::default();
        // large gap: capped by max_step
        assert!((s.step(0.0, 1.0) - 0.12).abs() < 1e-12);
        // mid gap: proportional
        assert!((s.step(0.5, 0.75) - (0.5 + 0.25 * 0.16)).abs() < 1e-12);
        // tiny gap: min_step, but clipped to the target
        assert!((s.step(0.149, 0.15) - 0.15).abs() < 1e-12);
        assert!((s.step(0.10, 0.15) - 0.108).abs() < 1e-12);
    }

    #[test]
    fn test_snaps_to_full() {
        let s = Smoother::default();
        assert_eq!(s.step(0.9995, 1.0), 1.0);
        assert_eq!(s.step(1.0, 1.0), 1.0);
        // a 0.9 target never snaps to 1.0
        let mut v = 0.0;
        for _ in 0..500 {
            v = s.step(v, 0.9);
        }
        assert_eq!(v, 0.9);
    }

    #[test]
    fn test_never_decreases_or_overshoots() {
        let s = Smoother::default();
        let targets = [0.15, 0.15, 0.35, 0.2, 0.55, 0.75, 0.9, 1.0, 1.0, 0.5, 1.0];
        let mut v = 0.0;
        for target in targets {
            for _ in 0..7 {
                let next = s.step(v, target);
                assert!(next >= v, "{next} < {v}");
                assert!(next <= 1.0);
                v = next;
            }
        }
        assert!(s.frames_to_reach(v, 1.0) < 100);
    }

    #[test]
    fn test_reaches_full_in_bounded_frames() {
        let s = Smoother::default();
        let frames = s.frames_to_reach(0.0, 1.0);
        assert!(frames > 0 && frames < 200, "{frames}");
        assert_eq!(s.frames_to_reach(0.3, 0.2), 0);
    }
}
