use std::f64::consts::PI;

use super::Phase;

pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

/// One full turn of the progress arc.
pub const SPIN_MS: u64 = 1300;

/// Sizing of the radial progress indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    pub size_mobile: f64,
    pub size_desktop: f64,
    pub stroke_mobile: f64,
    pub stroke_desktop: f64,
    /// Logo size relative to the ring's inner diameter.
    pub logo_ratio: f64,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            size_mobile: 72.0,
            size_desktop: 88.0,
            stroke_mobile: 3.0,
            stroke_desktop: 4.0,
            logo_ratio: 1.5,
        }
    }
}

impl RingStyle {
    pub fn geometry(&self, viewport_width: f64) -> RingGeometry {
        if viewport_width >= DESKTOP_BREAKPOINT_PX {
            RingGeometry::new(self.size_desktop, self.stroke_desktop, self.logo_ratio)
        } else {
            RingGeometry::new(self.size_mobile, self.stroke_mobile, self.logo_ratio)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub size: f64,
    pub stroke: f64,
    pub radius: f64,
    pub circumference: f64,
    pub logo_size: f64,
}

impl RingGeometry {
    pub fn new(size: f64, stroke: f64, logo_ratio: f64) -> Self {
        let radius = (size - stroke) / 2.0;
        let inner_diameter = size - stroke * 2.0;
        Self {
            size,
            stroke,
            radius,
            circumference: 2.0 * PI * radius,
            logo_size: (inner_diameter * logo_ratio).floor().max(10.0),
        }
    }

    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    /// Stroke dash offset that reveals `progress` of the arc.
    pub fn dash_offset(&self, progress: f64) -> f64 {
        self.circumference * (1.0 - progress.clamp(0.0, 1.0))
    }
}

/// Overlay fade and zoom for each phase: it grows in from 95% and leaves
/// growing past 100%.
pub fn overlay_motion(phase: Phase) -> &'static str {
    match phase {
        Phase::Entering => "opacity-0 scale-[0.95]",
        Phase::Showing => "opacity-100 scale-100",
        Phase::Exiting | Phase::Done => "opacity-0 scale-[1.05] pointer-events-none",
    }
}

/// Inline style that keeps the arc turning around the ring's center.
pub fn spin_style() -> String {
    format!("transform-origin: 50% 50%; animation: preloader-rotate {SPIN_MS}ms linear infinite")
}

pub fn percent_label(progress: f64) -> String {
    format!("{}%", (progress.clamp(0.0, 1.0) * 100.0).round() as u32)
}
