use std::time::Duration;

use chrono::Utc;
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::preloader::{
    diagnostics::AssetReport,
    ring::{overlay_motion, percent_label, spin_style, RingStyle, DESKTOP_BREAKPOINT_PX},
    Millis, Phase, PreloaderConfig, PreloaderController, PreloaderDriver, PreloaderView, TickError,
    TickSource,
};

/// Largest delay `setTimeout` honours.
const MAX_TIMEOUT_MS: Millis = i32::MAX as Millis;

/// Browser clock, animation frames and timeouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTicks;

impl TickSource for BrowserTicks {
    type Frame = AnimationFrameRequestHandle;
    type Timer = TimeoutHandle;

    fn now(&self) -> Millis {
        Utc::now().timestamp_millis().max(0) as Millis
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<Self::Frame, TickError> {
        request_animation_frame_with_handle(callback).map_err(|e| TickError::Frame(format!("{e:?}")))
    }

    fn cancel_frame(&self, frame: Self::Frame) {
        frame.cancel();
    }

    fn set_timer(&self, delay: Millis, callback: Box<dyn FnOnce()>) -> Result<Self::Timer, TickError> {
        // browsers fire longer timeouts immediately; the driver re-arms on early wakes
        set_timeout_with_handle(callback, Duration::from_millis(delay.min(MAX_TIMEOUT_MS)))
            .map_err(|e| TickError::Timer(format!("{e:?}")))
    }

    fn clear_timer(&self, timer: Self::Timer) {
        timer.clear();
    }
}

#[cfg(feature = "hydrate")]
fn observe_assets(config: &PreloaderConfig) {
    use leptos::task::spawn_local;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let document = document();
    let images = document.images();
    let total = images.length();
    let complete = (0..total)
        .filter_map(|i| images.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlImageElement>().ok())
        .filter(|img| img.complete() && img.natural_width() > 0)
        .count() as u32;
    let mut report = AssetReport::default();
    report.record_images(total, complete);

    if !config.wait_fonts {
        report.log("at mount");
        return;
    }
    report.fonts_pending();
    report.log("at mount");
    let started = BrowserTicks.now();
    let ready = document.fonts().ready();
    spawn_local(async move {
        let ok = match ready {
            Ok(promise) => JsFuture::from(promise).await.is_ok(),
            Err(_) => false,
        };
        report.fonts_settled(ok, BrowserTicks.now().saturating_sub(started));
        report.log("fonts settled");
    });
}

#[cfg(not(feature = "hydrate"))]
fn observe_assets(_config: &PreloaderConfig) {}

#[component]
pub fn Preloader(
    config: PreloaderConfig,
    #[prop(into)] on_done: Callback<()>,
    #[prop(optional)] style: RingStyle,
    #[prop(default = "/laufie.svg")] logo_src: &'static str,
) -> impl IntoView {
    let (view, set_view) = signal(PreloaderView {
        phase: Phase::Entering,
        progress: 0.0,
    });
    let driver = StoredValue::new_local(None::<PreloaderDriver<BrowserTicks>>);
    let is_desktop = use_media_query(format!("(min-width: {DESKTOP_BREAKPOINT_PX}px)"));
    let geometry = move || style.geometry(if is_desktop.get() { DESKTOP_BREAKPOINT_PX } else { 0.0 });

    Effect::new(move |_| {
        if driver.with_value(Option::is_some) {
            return;
        }
        let config = match config.validate() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("invalid preloader config, using defaults: {err}");
                PreloaderConfig::default()
            }
        };
        observe_assets(&config);
        let controller = PreloaderController::mount(config, BrowserTicks.now());
        let running = PreloaderDriver::new(BrowserTicks, controller)
            .with_observer(move |v| set_view.set(v))
            .start(move || on_done.run(()));
        driver.set_value(Some(running));
    });

    on_cleanup(move || {
        if let Some(running) = driver.try_update_value(Option::take).flatten() {
            running.stop();
        }
    });

    let skip = move |_| {
        driver.with_value(|d| {
            if let Some(d) = d {
                d.skip();
            }
        })
    };

    let overlay_class = move || {
        format!(
            "fixed inset-0 z-[999] grid place-items-center bg-[#05060f] transition-[opacity,transform] {}",
            overlay_motion(view.get().phase)
        )
    };

    view! {
        <div
            class=overlay_class
            style=move || format!("transition-duration: {}ms", config.exit_ms)
            data-phase=move || view.get().phase.as_str()
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || (view.get().progress * 100.0).round()
        >
            <div class="flex flex-col items-center gap-4">
                <div class="relative">
                    <div
                        class="absolute inset-2 rounded-full opacity-20 blur-lg preloader-glow"
                        aria-hidden="true"
                    ></div>
                    {move || {
                        let g = geometry();
                        let c = g.center();
                        view! {
                            <svg
                                width=g.size
                                height=g.size
                                viewBox=format!("0 0 {} {}", g.size, g.size)
                                class="relative block drop-shadow-2xl"
                                aria-hidden="true"
                            >
                                <defs>
                                    <linearGradient id="progress-grad" x1="0" y1="0" x2="1" y2="1">
                                        <stop offset="0%" stop-color="#EEF4FF" />
                                        <stop offset="33%" stop-color="#60A5FA" />
                                        <stop offset="66%" stop-color="#0062FF" />
                                        <stop offset="100%" stop-color="#0013BE" />
                                    </linearGradient>
                                </defs>
                                <circle
                                    cx=c
                                    cy=c
                                    r=g.radius
                                    stroke="rgba(255,255,255,0.1)"
                                    stroke-width=g.stroke
                                    fill="none"
                                />
                                <g transform=format!("rotate(-90 {c} {c})")>
                                    <g class="preloader-spin" style=spin_style()>
                                        <circle
                                            cx=c
                                            cy=c
                                            r=g.radius
                                            stroke="url(#progress-grad)"
                                            stroke-width=g.stroke
                                            fill="none"
                                            stroke-linecap="round"
                                            stroke-dasharray=g.circumference
                                            stroke-dashoffset=move || g.dash_offset(view.get().progress)
                                        />
                                    </g>
                                </g>
                            </svg>
                            <div class="absolute inset-0 grid place-items-center">
                                <img
                                    src=logo_src
                                    alt="Logo"
                                    class="opacity-95 object-contain preloader-pulse"
                                    style=format!("width: {0}px; height: {0}px", g.logo_size)
                                />
                            </div>
                        }
                    }}
                </div>
                <div class="text-sm font-medium text-white/90 tabular-nums tracking-wide">
                    {move || percent_label(view.get().progress)}
                </div>
                <button
                    class="text-xs text-white/50 hover:text-white/80 transition-colors"
                    on:click=skip
                >
                    "Skip"
                </button>
            </div>
        </div>
    }
}
