mod achievements;
mod components;
mod footer;
mod homepage;
mod nav;
mod preloader;
mod projects;
mod skills;

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::preloader::{ring::RingStyle, PreloaderConfig};

use achievements::AchievementsSection;
use footer::FooterSection;
use homepage::{AboutSection, HomeSection};
use nav::{DockNav, MobileTabNav, TopProgressBar};
use preloader::Preloader;
use projects::ProjectsSection;
use skills::SkillsSection;

/// Delay between the overlay reporting done and the jump to `#home`.
const HOME_SCROLL_DELAY: Duration = Duration::from_millis(60);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-[#05060f] text-white antialiased">
                <App />
            </body>
        </html>
    }
}

fn page_preloader_config() -> PreloaderConfig {
    PreloaderConfig::default()
        .with_min_duration(700)
        .with_timeout(10_000)
        .with_wait_fonts(true)
}

fn page_ring_style() -> RingStyle {
    RingStyle {
        stroke_mobile: 2.8,
        stroke_desktop: 3.2,
        logo_ratio: 0.66,
        ..RingStyle::default()
    }
}

fn scroll_home() {
    let document = document();
    match document.get_element_by_id("home") {
        Some(el) => el.scroll_into_view(),
        None => window().scroll_to_with_x_and_y(0.0, 0.0),
    }
    if let Ok(history) = window().history() {
        if let Err(err) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some("#home")) {
            log::debug!("could not rewrite hash: {err:?}");
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (ready, set_ready) = signal(false);

    Effect::new(move |_| {
        if ready.get() {
            set_timeout(scroll_home, HOME_SCROLL_DELAY);
        }
    });

    view! {
        <Title formatter=|title| format!("Lovi Adiva Alexandria - {title}") />

        <Router>
            <Show when=move || !ready.get()>
                <Preloader
                    config=page_preloader_config()
                    style=page_ring_style()
                    on_done=move |_| set_ready(true)
                />
            </Show>
            <TopProgressBar />
            <div
                data-ready=move || if ready.get() { "true" } else { "false" }
                class=move || {
                    if ready.get() {
                        "transition-opacity duration-300 opacity-100"
                    } else {
                        "transition-opacity duration-300 opacity-0"
                    }
                }
                aria-hidden=move || (!ready.get()).then_some("true")
            >
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=move || view! { <Portfolio ready /> } />
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn Portfolio(ready: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <main>
            <HomeSection ready />
            <AboutSection />
            <SkillsSection />
            <ProjectsSection />
            <AchievementsSection />
            <FooterSection />
        </main>
        <MobileTabNav />
        <div class="hidden md:block">
            <DockNav />
        </div>
    }
}
