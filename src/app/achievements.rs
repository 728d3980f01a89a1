use std::time::Duration;

use leptos::{ev, prelude::*};

use crate::{
    content::{
        achievements_in, certificate_path, Achievement, AchievementCategory, StatIcon,
        ACHIEVEMENT_STATS,
    },
    scroll::{BodyStyle, ScrollLock},
};

use super::components::{ImageWithFallback, SectionHeading};

/// Lets the modal's exit transition finish before jumping back.
const RESTORE_SCROLL_DELAY: Duration = Duration::from_millis(300);

struct DomBody(web_sys::HtmlElement);

impl BodyStyle for DomBody {
    fn get(&self, property: &str) -> String {
        self.0.style().get_property_value(property).unwrap_or_default()
    }

    fn set(&self, property: &str, value: &str) {
        let style = self.0.style();
        let res = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = res {
            log::debug!("body style {property} not applied: {err:?}");
        }
    }

    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or(0.0)
    }
}

fn stat_icon(icon: StatIcon) -> &'static str {
    match icon {
        StatIcon::Trophy => "🏆",
        StatIcon::Calendar => "📅",
        StatIcon::Building => "🏢",
        StatIcon::Medal => "🎖️",
        StatIcon::Award => "🏅",
    }
}

#[component]
fn AchievementCard(achievement: &'static Achievement, on_open: Callback<&'static Achievement>) -> impl IntoView {
    view! {
        <button
            class="group w-full text-left rounded-2xl border border-white/10 bg-white/[0.03] p-6 transition-all duration-300 hover:-translate-y-1 hover:border-blue-400/40 hover:shadow-[0_10px_40px_rgba(0,98,255,0.25)]"
            on:click=move |_| on_open.run(achievement)
        >
            <div class="flex items-start justify-between gap-3">
                <h3 class="text-lg font-semibold leading-snug">{achievement.title}</h3>
                {achievement
                    .badge
                    .map(|b| {
                        view! {
                            <span class="shrink-0 rounded-full border border-blue-400/30 bg-blue-500/15 px-3 py-1 text-xs text-blue-200">
                                {b}
                            </span>
                        }
                    })}
            </div>
            <p class="mt-2 text-white/70">{achievement.org}</p>
            <p class="mt-1 text-sm text-white/50">{achievement.year}</p>
        </button>
    }
}

#[component]
fn AchievementModal(selected: RwSignal<Option<&'static Achievement>>) -> impl IntoView {
    let close = move || selected.set(None);

    move || {
        selected.get().map(|a| {
            let certificate = certificate_path(a.certificate.unwrap_or_default());
            view! {
                <div
                    class="fixed inset-0 z-[100] bg-black/70 backdrop-blur-md"
                    aria-hidden="true"
                    on:click=move |_| close()
                ></div>
                <div class="fixed inset-0 z-[101] flex items-center justify-center p-4 pointer-events-none">
                    <div
                        class="relative w-full max-w-4xl max-h-[90vh] overflow-y-auto rounded-2xl border border-white/10 bg-[#0b1020]/95 shadow-[0_20px_60px_rgba(0,0,0,0.5)] pointer-events-auto"
                        role="dialog"
                        aria-modal="true"
                        aria-labelledby="achievement-modal-title"
                    >
                        <button
                            class="absolute right-4 top-4 rounded-full p-2 text-white/70 hover:bg-white/10 hover:text-white"
                            aria-label="Close"
                            on:click=move |_| close()
                        >
                            "✕"
                        </button>
                        <div class="p-6 md:p-8">
                            <h3 id="achievement-modal-title" class="pr-10 text-2xl font-semibold">
                                {a.title}
                            </h3>
                            <div class="mt-3 flex flex-wrap gap-4 text-sm text-white/70">
                                <span>"🏢 " {a.org}</span>
                                <span>"📅 " {a.year}</span>
                                {a.badge.map(|b| view! { <span>"🏅 " {b}</span> })}
                            </div>
                            {a
                                .description
                                .map(|d| view! { <p class="mt-4 text-white/80 leading-relaxed">{d}</p> })}
                            <div class="mt-6 overflow-hidden rounded-xl border border-white/10">
                                {match certificate {
                                    Some(path) => {
                                        view! {
                                            <ImageWithFallback
                                                src=Signal::stored(Some(path))
                                                alt="Certificate"
                                                class="w-full max-h-[60vh] object-contain bg-black/40"
                                            />
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! {
                                            <p class="p-8 text-center text-white/50">
                                                "Certificate not available"
                                            </p>
                                        }
                                            .into_any()
                                    }
                                }}
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
pub fn AchievementsSection() -> impl IntoView {
    let (category, set_category) = signal(AchievementCategory::Award);
    let selected = RwSignal::new(None::<&'static Achievement>);
    let lock = StoredValue::new_local(None::<ScrollLock<DomBody>>);

    Effect::new(move |_| {
        let open = selected.get().is_some();
        let held = lock.with_value(Option::is_some);
        if open && !held {
            if let Some(body) = document().body() {
                lock.set_value(Some(ScrollLock::acquire(DomBody(body))));
            }
        } else if !open && held {
            let restore_to = lock
                .try_update_value(Option::take)
                .flatten()
                .map(|released| released.scroll_y());
            if let Some(y) = restore_to {
                set_timeout(move || window().scroll_to_with_x_and_y(0.0, y), RESTORE_SCROLL_DELAY);
            }
        }
    });

    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && selected.get_untracked().is_some() {
            selected.set(None);
        }
    });
    on_cleanup(move || {
        escape.remove();
        drop(lock.try_update_value(Option::take));
    });

    let open = Callback::new(move |a: &'static Achievement| selected.set(Some(a)));

    view! {
        <section id="achievements" class="mx-auto max-w-6xl px-4 py-24">
            <SectionHeading
                title="Achievements"
                highlight="& Experience"
                subtitle="Milestones, competitions and programs that shaped how I learn and build."
            />
            <div class="mb-12 grid grid-cols-2 gap-4 md:grid-cols-4">
                {ACHIEVEMENT_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="rounded-2xl border border-white/10 bg-white/[0.03] p-5 text-center">
                                <div class="text-2xl">{stat_icon(stat.icon())}</div>
                                <div class="mt-2 text-3xl font-bold">{stat.value}</div>
                                <div class="mt-1 text-sm text-white/60">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mx-auto mb-8 w-max rounded-2xl border border-white/10 bg-white/[0.02] p-1">
                <div class="relative grid grid-cols-2 gap-1" role="tablist">
                    <span
                        class="pointer-events-none absolute top-1 bottom-1 rounded-xl bg-gradient-to-r from-blue-500/60 to-indigo-600/60 transition-all duration-300"
                        style=move || {
                            let index = AchievementCategory::ALL
                                .iter()
                                .position(|c| *c == category.get())
                                .unwrap_or(0);
                            format!("left: calc({index} * 50% + 4px); width: calc(50% - 8px)")
                        }
                    ></span>
                    {AchievementCategory::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || (category.get() == c).to_string()
                                    on:click=move |_| set_category(c)
                                    class="relative z-10 rounded-xl px-4 py-2 text-sm text-white/85"
                                >
                                    {c.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                let items = achievements_in(category.get()).collect::<Vec<_>>();
                if items.is_empty() {
                    view! {
                        <p class="py-16 text-center text-lg text-white/60">
                            "No achievements available for this category yet"
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="grid gap-6 md:grid-cols-2">
                            {items
                                .into_iter()
                                .map(|a| view! { <AchievementCard achievement=a on_open=open /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
            <AchievementModal selected />
        </section>
    }
}
