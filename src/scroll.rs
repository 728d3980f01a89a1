//! Scroll helpers shared by the navigation, progress bar and modal.

/// Fraction of the viewport height that marks a section as active once its
/// top scrolls above it.
pub const ACTIVATION_LINE: f64 = 0.35;

/// Inline style properties of the document body.
pub trait BodyStyle {
    fn get(&self, property: &str) -> String;
    fn set(&self, property: &str, value: &str);
    fn scroll_y(&self) -> f64;
}

const LOCKED_PROPERTIES: [&str; 6] = ["overflow", "overflow-y", "height", "position", "top", "width"];

/// Keeps the body from scrolling while alive. The page is pinned in place at
/// its current offset and every touched property is restored on drop.
pub struct ScrollLock<T: BodyStyle> {
    body: T,
    saved: Vec<(&'static str, String)>,
    scroll_y: f64,
}

impl<T: BodyStyle> ScrollLock<T> {
    pub fn acquire(body: T) -> Self {
        let scroll_y = body.scroll_y();
        let saved = LOCKED_PROPERTIES
            .iter()
            .map(|p| (*p, body.get(p)))
            .collect();
        body.set("overflow", "hidden");
        body.set("overflow-y", "hidden");
        body.set("height", "100%");
        body.set("position", "fixed");
        body.set("top", &format!("-{scroll_y}px"));
        body.set("width", "100%");
        Self { body, saved, scroll_y }
    }

    /// Offset the page was at when the lock was taken.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}

impl<T: BodyStyle> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        for (property, value) in self.saved.drain(..) {
            self.body.set(property, &value);
        }
    }
}

/// Page progress in `0..=1` for the top progress bar.
pub fn scroll_fraction(scroll_y: f64, doc_height: f64, viewport: f64) -> f64 {
    let scrollable = doc_height - viewport;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Index of the last section whose top has crossed the activation line.
/// `tops` are document offsets in page order.
pub fn active_section(tops: &[f64], scroll_y: f64, viewport: f64) -> usize {
    let line = scroll_y + viewport * ACTIVATION_LINE;
    tops.iter().rposition(|top| *top <= line).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    struct FakeBody {
        props: Rc<RefCell<HashMap<String, String>>>,
        y: f64,
    }

    impl BodyStyle for FakeBody {
        fn get(&self, property: &str) -> String {
            self.props.borrow().get(property).cloned().unwrap_or_default()
        }

        fn set(&self, property: &str, value: &str) {
            self.props.borrow_mut().insert(property.to_string(), value.to_string());
        }

        fn scroll_y(&self) -> f64 {
            self.y
        }
    }

    #[test]
    fn test_scroll_lock_restores() {
        let body = FakeBody { y: 420.0, ..Default::default() };
        body.set("overflow", "auto");
        {
            let lock = ScrollLock::acquire(body.clone());
            assert_eq!(lock.scroll_y(), 420.0);
            assert_eq!(body.get("overflow"), "hidden");
            assert_eq!(body.get("position"), "fixed");
            assert_eq!(body.get("top"), "-420px");
        }
        assert_eq!(body.get("overflow"), "auto");
        assert_eq!(body.get("position"), "");
        assert_eq!(body.get("top"), "");
    }

    #[test]
    fn test_scroll_fraction() {
        assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(100.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(600.0, 2000.0, 800.0), 0.5);
        assert_eq!(scroll_fraction(5000.0, 2000.0, 800.0), 1.0);
        assert_eq!(scroll_fraction(-10.0, 2000.0, 800.0), 0.0);
    }

    #[test]
    fn test_active_section() {
        let tops = [0.0, 900.0, 1800.0, 2700.0];
        assert_eq!(active_section(&tops, 0.0, 1000.0), 0);
        // line at 350 + 600 = 950
        assert_eq!(active_section(&tops, 600.0, 1000.0), 1);
        assert_eq!(active_section(&tops, 1440.0, 1000.0), 1);
        assert_eq!(active_section(&tops, 1460.0, 1000.0), 2);
        assert_eq!(active_section(&tops, 9000.0, 1000.0), 3);
        assert_eq!(active_section(&[], 100.0, 1000.0), 0);
    }
}
