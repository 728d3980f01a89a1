use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::{
    content::{NavItem, NAV_ITEMS},
    scroll::{active_section, scroll_fraction},
};

#[cfg(feature = "hydrate")]
fn viewport_height() -> f64 {
    window().inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0)
}

#[cfg(feature = "hydrate")]
fn document_height() -> f64 {
    document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

#[cfg(feature = "hydrate")]
fn section_tops(scroll_y: f64) -> Vec<f64> {
    let document = document();
    NAV_ITEMS
        .iter()
        .map(|item| {
            document
                .get_element_by_id(item.id)
                .map(|el| el.get_bounding_client_rect().top() + scroll_y)
                .unwrap_or(f64::INFINITY)
        })
        .collect()
}

#[cfg(not(feature = "hydrate"))]
fn viewport_height() -> f64 {
    0.0
}

#[cfg(not(feature = "hydrate"))]
fn document_height() -> f64 {
    0.0
}

#[cfg(not(feature = "hydrate"))]
fn section_tops(_scroll_y: f64) -> Vec<f64> {
    Vec::new()
}

fn use_active_section() -> Memo<usize> {
    let (_, y) = use_window_scroll();
    Memo::new(move |_| {
        let y = y.get();
        active_section(&section_tops(y), y, viewport_height())
    })
}

#[component]
pub fn TopProgressBar() -> impl IntoView {
    let (_, y) = use_window_scroll();
    let fraction = move || scroll_fraction(y.get(), document_height(), viewport_height());

    view! {
        <div class="pointer-events-none fixed top-0 left-0 right-0 z-[998] h-1 bg-transparent">
            <div
                class="origin-left h-full w-full bg-gradient-to-r from-sky-300 via-blue-500 to-indigo-700"
                style=move || format!("transform: scaleX({})", fraction())
            ></div>
        </div>
    }
}

#[component]
fn NavLink(item: NavItem, active: Signal<bool>) -> impl IntoView {
    view! {
        <a
            href=item.href()
            aria-current=move || active.get().then_some("page")
            class=move || {
                if active.get() {
                    "relative rounded-lg px-3 py-2 text-white transition-colors"
                } else {
                    "relative rounded-lg px-3 py-2 text-white/80 hover:text-white transition-colors"
                }
            }
        >
            {item.label}
            <Show when=move || active.get()>
                <span class="absolute bottom-0 left-2 right-2 h-0.5 rounded bg-blue-500"></span>
            </Show>
        </a>
    }
}

#[component]
pub fn DockNav() -> impl IntoView {
    let active = use_active_section();

    view! {
        <nav
            class="fixed bottom-6 left-1/2 -translate-x-1/2 z-50 flex gap-1 rounded-2xl border border-white/10 bg-white/5 px-3 py-2 backdrop-blur"
            aria-label="Sections"
        >
            {NAV_ITEMS
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    view! { <NavLink item=*item active=Signal::derive(move || active.get() == i) /> }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn MobileTabNav() -> impl IntoView {
    let active = use_active_section();

    view! {
        <nav
            class="md:hidden fixed bottom-0 inset-x-0 z-50 grid grid-cols-6 border-t border-white/10 bg-[#05060f]/90 backdrop-blur text-xs"
            aria-label="Sections"
        >
            {NAV_ITEMS
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    view! {
                        <a
                            href=item.href()
                            class=move || {
                                if active.get() == i {
                                    "py-3 text-center text-white"
                                } else {
                                    "py-3 text-center text-white/60"
                                }
                            }
                        >
                            {item.label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
