use folio_core::{Portfolio, RevealItem, SectionId};
use leptos::html;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::reveal::{reveal_style, use_reveal};

#[component]
pub fn Projects() -> impl IntoView {
    let projects = expect_context::<Portfolio>().projects;
    let node = NodeRef::<html::Section>::new();
    let revealed = use_reveal(node);
    let id = SectionId::Projects;

    view! {
        <section id=id.as_str() node_ref=node class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    heading=id.heading()
                    subtitle=id.subtitle().unwrap_or_default()
                    revealed=revealed
                />

                <div class="grid md:grid-cols-2 gap-8">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let monogram = project.monogram();
                            view! {
                                <article
                                    class="flex flex-col rounded-2xl overflow-hidden bg-slate-900 border border-slate-800 hover:border-indigo-500/50 transition-colors"
                                    style=move || reveal_style(RevealItem::ProjectCard(i), revealed.get())
                                >
                                    <div class="h-40 flex items-center justify-center bg-gradient-to-br from-indigo-600/30 to-violet-600/20">
                                        <span class="text-6xl font-black text-white/80">{monogram}</span>
                                    </div>
                                    <div class="p-6 flex-1 flex flex-col">
                                        <h3 class="text-xl font-semibold text-white mb-2">{project.title}</h3>
                                        <p class="text-slate-400 mb-4">{project.description}</p>
                                        <div class="flex flex-wrap gap-2 mb-4">
                                            {project
                                                .stack
                                                .into_iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="px-2 py-0.5 text-xs rounded border bg-indigo-900/30 text-indigo-300 border-indigo-800">
                                                            {tech}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <ul class="space-y-1 text-sm text-emerald-400 mb-3">
                                            {project
                                                .impact
                                                .into_iter()
                                                .map(|line| view! { <li>"\u{2714} " {line}</li> })
                                                .collect_view()}
                                        </ul>
                                        <ul class="space-y-1 text-sm text-slate-400 mt-auto">
                                            {project
                                                .highlights
                                                .into_iter()
                                                .map(|line| view! { <li>"\u{2022} " {line}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
