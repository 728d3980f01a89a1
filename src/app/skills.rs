use leptos::prelude::*;

use crate::content::{SkillGroup, SKILL_GROUPS};

use super::components::SectionHeading;

fn group_icon(icon: &str) -> &'static str {
    match icon {
        "backend" => "📊",
        "frontend" => "💻",
        "design" => "🎨",
        _ => "🧩",
    }
}

#[component]
fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-white/10 bg-white/[0.03] p-6">
            <div class="flex items-center gap-3">
                <span class="text-2xl" aria-hidden="true">{group_icon(group.icon)}</span>
                <h3 class="text-xl font-semibold">{group.title}</h3>
            </div>
            <ul class="mt-5 space-y-4">
                {group
                    .items
                    .iter()
                    .map(|skill| {
                        view! {
                            <li>
                                <div class="flex justify-between text-sm">
                                    <span>{skill.name}</span>
                                    <span class="tabular-nums text-white/60">{format!("{}%", skill.level)}</span>
                                </div>
                                <div class="mt-1.5 h-2 rounded-full bg-white/10 overflow-hidden">
                                    <div
                                        class="h-full rounded-full bg-gradient-to-r from-sky-300 via-blue-500 to-indigo-600"
                                        style=format!("width: {}%", skill.level.min(100))
                                    ></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="mx-auto max-w-6xl px-4 py-24">
            <SectionHeading
                title="My"
                highlight="Skills"
                subtitle="What I reach for when turning data and ideas into something usable."
            />
            <div class="grid gap-6 md:grid-cols-2">
                {SKILL_GROUPS.iter().map(|group| view! { <SkillCard group /> }).collect_view()}
            </div>
        </section>
    }
}
