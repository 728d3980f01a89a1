use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::content::{CONTACT, NAV_ITEMS, OWNER, TAGLINE};

use super::components::SocialButtons;

const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_label() -> String {
    match DateTime::parse_from_rfc3339(BUILD_TIME) {
        Ok(t) => format!("Built {}", t.with_timezone(&Utc).format("%Y-%m-%d %H:%M UTC")),
        Err(_) => String::new(),
    }
}

fn build_year() -> String {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.format("%Y").to_string())
        .unwrap_or_else(|_| "2025".to_string())
}

#[component]
pub fn FooterSection() -> impl IntoView {
    view! {
        <footer id="contact" class="mx-auto max-w-6xl px-4 pt-10 pb-32 md:pb-28">
            <div class="border-t border-white/10 pt-10">
                <div class="grid gap-8 md:grid-cols-3">
                    <div>
                        <div class="text-2xl font-bold bg-gradient-to-r from-sky-200 via-blue-400 to-indigo-600 bg-clip-text text-transparent">
                            {OWNER}
                        </div>
                        <p class="mt-3 text-white/70">{TAGLINE}</p>
                        <div class="mt-4">
                            <SocialButtons />
                        </div>
                    </div>
                    <div>
                        <div class="font-semibold">"Quick Links"</div>
                        <ul class="mt-3 space-y-2 text-white/70">
                            {NAV_ITEMS
                                .iter()
                                .skip(1)
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a href=item.href() class="hover:text-white">
                                                {item.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <div class="font-semibold">"Get In Touch"</div>
                        <ul class="mt-3 space-y-2 text-white/70">
                            <li>{CONTACT.location}</li>
                            <li>
                                <a href=format!("mailto:{}", CONTACT.email) class="hover:text-white">
                                    {CONTACT.email}
                                </a>
                            </li>
                            <li>{CONTACT.phone}</li>
                        </ul>
                    </div>
                </div>
                <div class="mt-10 flex flex-wrap items-center justify-between gap-3 text-sm text-white/50">
                    <span>{format!("© {} {OWNER}.", build_year())}</span>
                    <span class="text-xs">{build_label()}</span>
                    <a href="#home" class="inline-flex items-center gap-2 hover:text-white" aria-label="Back to top">
                        "Back to top ↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
