use leptos::prelude::*;

use crate::content::{FALLBACK_IMAGE, SOCIALS};

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] highlight: Option<&'static str>,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    let text = match highlight {
        Some(h) => format!("{title} {h}"),
        None => title.to_string(),
    };
    view! {
        <div class="mb-10 text-center">
            <h2 class="text-4xl sm:text-5xl md:text-6xl font-semibold tracking-tight leading-tight">
                <span class="bg-gradient-to-r from-sky-200 via-blue-400 to-indigo-600 bg-clip-text text-transparent">
                    {text}
                </span>
            </h2>
            <div class="mt-3 flex justify-center">
                <div class="h-[4px] w-[160px] rounded-full bg-gradient-to-r from-sky-200 via-blue-400 to-indigo-600 opacity-90"></div>
            </div>
            {subtitle
                .map(|s| view! { <p class="mt-4 text-white/70 max-w-3xl mx-auto leading-relaxed">{s}</p> })}
        </div>
    }
}

/// `<img>` that swaps to the site icon once loading fails. A new `src`
/// clears the failure.
#[component]
pub fn ImageWithFallback(
    #[prop(into)] src: Signal<Option<String>>,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    Effect::watch(move || src.get(), move |_, _, _| set_failed(false), false);

    let shown = move || {
        if failed.get() {
            return FALLBACK_IMAGE.to_string();
        }
        src.get().unwrap_or_else(|| FALLBACK_IMAGE.to_string())
    };

    view! {
        <img
            src=shown
            alt=alt
            loading="lazy"
            decoding="async"
            on:error=move |_| set_failed(true)
            class=format!("object-cover {class}")
        />
    }
}

#[component]
pub fn SocialButtons() -> impl IntoView {
    view! {
        <div class="flex items-center gap-3.5">
            {SOCIALS
                .iter()
                .map(|social| {
                    view! {
                        <a
                            href=social.url
                            target="_blank"
                            rel="noreferrer"
                            aria-label=social.label
                            class="group grid h-[52px] w-[52px] md:h-[56px] md:w-[56px] place-items-center rounded-2xl border border-white/10 bg-white/5 text-2xl transition-transform duration-200 hover:rotate-45"
                        >
                            <i class=format!(
                                "{} transition-transform duration-200 group-hover:-rotate-45",
                                social.icon,
                            )></i>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
