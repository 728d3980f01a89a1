use std::time::Duration;

use leptos::prelude::*;

use crate::{
    content::{OWNER, TAGLINE, TECH_STACK},
    typewriter::Typewriter,
};

use super::components::{SectionHeading, SocialButtons};

#[derive(Debug, Clone, Copy, PartialEq)]
struct TypedTitle {
    text: &'static str,
    icon: &'static str,
    vacant: bool,
}

impl From<&Typewriter> for TypedTitle {
    fn from(tw: &Typewriter) -> Self {
        Self {
            text: tw.text(),
            icon: tw.role().icon,
            vacant: tw.is_vacant(),
        }
    }
}

fn role_icon(icon: &str) -> &'static str {
    match icon {
        "code" => "</>",
        "brain" => "🧠",
        "pen-tool" => "✒️",
        "message" => "💬",
        "cpu" => "🤖",
        "rocket" => "🚀",
        _ => "✨",
    }
}

fn schedule_tick(
    machine: StoredValue<Typewriter>,
    set_title: WriteSignal<TypedTitle>,
    pending: StoredValue<Option<TimeoutHandle>>,
    delay: u64,
) {
    let fire = move || {
        // gone once the hero is unmounted
        let Some((title, next)) = machine.try_update_value(|tw| {
            let next = tw.tick();
            (TypedTitle::from(&*tw), next)
        }) else {
            return;
        };
        set_title.set(title);
        schedule_tick(machine, set_title, pending, next);
    };
    match set_timeout_with_handle(fire, Duration::from_millis(delay)) {
        Ok(handle) => {
            pending.try_update_value(|p| *p = Some(handle));
        }
        Err(err) => log::warn!("typewriter stopped: {err:?}"),
    }
}

#[component]
fn TypewriterTitle(ready: ReadSignal<bool>) -> impl IntoView {
    let machine = StoredValue::new(Typewriter::default());
    let (title, set_title) = signal(machine.with_value(|tw| TypedTitle::from(tw)));
    let pending = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if !ready.get() {
            return false;
        }
        schedule_tick(machine, set_title, pending, machine.with_value(Typewriter::delay));
        true
    });
    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_get_value() {
            handle.clear();
        }
    });

    view! {
        <span class="inline-flex items-center leading-tight h-[2.0em] md:h-[2.1em]">
            <span class="whitespace-pre">{move || title.get().text}</span>
            <span class="ml-2 inline-block align-middle h-[1.2em] w-[2px] bg-white/90 animate-pulse"></span>
            <span
                class=move || {
                    if title.get().vacant {
                        "ml-3 text-blue-400/90 opacity-0 transition-opacity"
                    } else {
                        "ml-3 text-blue-400/90 opacity-100 transition-opacity"
                    }
                }
                aria-hidden="true"
            >
                {move || role_icon(title.get().icon)}
            </span>
        </span>
    }
}

#[component]
pub fn HomeSection(ready: ReadSignal<bool>) -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center">
            <div class="mx-auto max-w-6xl px-4 py-24">
                <p class="text-white/70 text-lg">"Hi, I'm"</p>
                <h1 class="mt-2 text-5xl md:text-7xl font-bold tracking-tight bg-gradient-to-r from-sky-200 via-blue-400 to-indigo-600 bg-clip-text text-transparent">
                    {OWNER}
                </h1>
                <div class="mt-4 text-2xl md:text-4xl font-semibold">
                    <TypewriterTitle ready />
                </div>
                <p class="mt-6 max-w-2xl text-white/70 text-lg leading-relaxed">{TAGLINE}</p>
                <div class="mt-8 flex flex-wrap gap-4">
                    <a
                        href="#projects"
                        class="rounded-xl bg-blue-600 px-6 py-3 font-medium hover:bg-blue-500 transition-colors"
                    >
                        "View Projects"
                    </a>
                    <a
                        href="#contact"
                        class="rounded-xl border border-white/15 px-6 py-3 font-medium hover:bg-white/10 transition-colors"
                    >
                        "Get In Touch"
                    </a>
                </div>
                <div class="mt-10">
                    <SocialButtons />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="mx-auto max-w-6xl px-4 py-24">
            <SectionHeading title="About" highlight="Me" />
            <div class="grid gap-10 md:grid-cols-2">
                <div class="space-y-4 text-white/80 text-lg leading-relaxed">
                    <p>
                        "I'm a student developer who enjoys the space where data, design and code meet. "
                        "Most of my work starts as a question about data and ends as something people can click on."
                    </p>
                    <p>
                        "Competitions and bootcamps taught me to ship under pressure, and design work taught me "
                        "that the details people notice are rarely the ones engineers argue about."
                    </p>
                </div>
                <div>
                    <h3 class="text-xl font-semibold mb-4">"Tech Stack"</h3>
                    <ul class="flex flex-wrap gap-3">
                        {TECH_STACK
                            .iter()
                            .map(|t| {
                                view! {
                                    <li class="rounded-xl border border-white/10 bg-white/5 px-4 py-2 text-sm">
                                        {*t}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
