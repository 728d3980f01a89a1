use std::time::Duration;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::content::{Project, ProjectStatus, ProjectTab};

use super::components::{ImageWithFallback, SectionHeading};

const TOAST_DURATION: Duration = Duration::from_millis(2500);

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "bg-emerald-500/15 text-emerald-300 border-emerald-400/30",
        ProjectStatus::InProgress => "bg-amber-500/15 text-amber-300 border-amber-400/30",
        ProjectStatus::ComingSoon => "bg-sky-500/15 text-sky-300 border-sky-400/30",
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_unavailable: Callback<()>) -> impl IntoView {
    let demo = project.demo_url();
    let repo = project.repo_url();
    let link = |url: Option<String>, label: &'static str| match url {
        Some(url) => view! {
            <a
                href=url
                target="_blank"
                rel="noreferrer"
                class="rounded-xl border border-white/15 px-4 py-2 text-sm hover:bg-white/10 transition-colors"
            >
                {label}
            </a>
        }
        .into_any(),
        None => view! {
            <button
                class="rounded-xl border border-white/10 px-4 py-2 text-sm text-white/50 cursor-not-allowed"
                on:click=move |_| on_unavailable.run(())
            >
                {label}
            </button>
        }
        .into_any(),
    };

    view! {
        <article class="group overflow-hidden rounded-2xl border border-white/10 bg-white/[0.03] transition-transform duration-300 hover:-translate-y-1">
            <div class="aspect-video overflow-hidden">
                <ImageWithFallback
                    src=Signal::stored(project.cover_image())
                    alt=project.image_alt
                    class="h-full w-full transition-transform duration-500 group-hover:scale-105"
                />
            </div>
            <div class="p-6">
                <div class="flex items-start justify-between gap-3">
                    <h3 class="text-xl font-semibold">{project.title}</h3>
                    <span class=format!(
                        "shrink-0 rounded-full border px-3 py-1 text-xs {}",
                        status_class(project.status),
                    )>{project.status.label()}</span>
                </div>
                <p class="mt-3 text-white/70 leading-relaxed">{project.description}</p>
                <ul class="mt-4 flex flex-wrap gap-2">
                    {project
                        .techs
                        .iter()
                        .map(|t| {
                            view! {
                                <li class="rounded-lg bg-white/5 px-2.5 py-1 text-xs text-white/80">
                                    {*t}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="mt-6 flex gap-3">{link(demo, "Live Demo")} {link(repo, "Source")}</div>
            </div>
        </article>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (tab, set_tab, _) = use_local_storage::<ProjectTab, JsonSerdeWasmCodec>("projects_tab");
    #[cfg(not(feature = "hydrate"))]
    let (tab, set_tab) = {
        let (tab, set_tab) = signal(ProjectTab::All);
        (Signal::from(tab), set_tab)
    };

    let (toast, set_toast) = signal(None::<&'static str>);
    let toast_timer = StoredValue::new(None::<TimeoutHandle>);
    let show_unavailable = Callback::new(move |_: ()| {
        set_toast(Some("This project is not available."));
        if let Some(previous) = toast_timer.get_value() {
            previous.clear();
        }
        let handle = set_timeout_with_handle(move || set_toast(None), TOAST_DURATION).ok();
        toast_timer.set_value(handle);
    });

    let pill_style = move || {
        let index = ProjectTab::ALL.iter().position(|t| *t == tab.get()).unwrap_or(0);
        format!("left: calc({index} * 100% / 3 + 4px); width: calc(100% / 3 - 8px)")
    };

    view! {
        <section id="projects" class="mx-auto max-w-6xl px-4 py-24">
            <SectionHeading
                title="Featured"
                highlight="Projects"
                subtitle="A collection of projects that showcase my skills in full‑stack development, UI/UX design, and modern web technologies."
            />
            <div class="mx-auto mb-8 w-max rounded-2xl border border-white/10 bg-white/[0.02] p-1 backdrop-blur-sm">
                <div class="relative grid grid-cols-3 gap-1" role="tablist">
                    <span
                        class="pointer-events-none absolute top-1 bottom-1 rounded-xl bg-gradient-to-r from-blue-500/60 to-indigo-600/60 transition-all duration-300"
                        style=pill_style
                    ></span>
                    {ProjectTab::ALL
                        .into_iter()
                        .map(|t| {
                            let is_active = move || tab.get() == t;
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || is_active().to_string()
                                    on:click=move |_| set_tab.set(t)
                                    class="relative rounded-xl px-4 py-2 text-sm text-white/85 transition-colors"
                                >
                                    <span class=move || {
                                        if is_active() {
                                            "relative z-10 font-semibold text-white"
                                        } else {
                                            "relative z-10 hover:text-white"
                                        }
                                    }>{t.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                let projects = tab.get().filter().collect::<Vec<_>>();
                if projects.is_empty() {
                    view! {
                        <div class="flex flex-col items-center justify-center py-16 text-center">
                            <p class="text-lg text-white/60">
                                "No projects available for this category yet"
                            </p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="grid gap-6 md:grid-cols-2">
                            {projects
                                .into_iter()
                                .map(|p| view! { <ProjectCard project=p on_unavailable=show_unavailable /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
            {move || {
                toast
                    .get()
                    .map(|msg| {
                        view! {
                            <div
                                class="fixed bottom-24 left-1/2 -translate-x-1/2 z-[1000] rounded-xl border border-white/10 bg-[#0b1020]/95 px-4 py-3 text-sm shadow-lg"
                                role="status"
                            >
                                {msg}
                            </div>
                        }
                    })
            }}
        </section>
    }
}
