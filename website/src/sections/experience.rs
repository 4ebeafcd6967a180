use folio_core::{Portfolio, RevealItem, SectionId};
use leptos::html;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::reveal::{reveal_style, use_reveal};

#[component]
pub fn Experience() -> impl IntoView {
    let experience = expect_context::<Portfolio>().experience;
    let node = NodeRef::<html::Section>::new();
    let revealed = use_reveal(node);
    let id = SectionId::Experience;

    view! {
        <section id=id.as_str() node_ref=node class="py-24 px-6 bg-slate-900/30">
            <div class="max-w-4xl mx-auto">
                <SectionHeader
                    heading=id.heading()
                    subtitle=id.subtitle().unwrap_or_default()
                    revealed=revealed
                />

                <div class="relative border-l-2 border-slate-800 ml-4 space-y-12">
                    {experience
                        .into_iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            let achievements = entry.shown_achievements().to_vec();
                            view! {
                                <div class="relative pl-10">
                                    <span
                                        class="absolute -left-[9px] top-2 w-4 h-4 rounded-full bg-indigo-500 ring-4 ring-slate-950"
                                        style=move || reveal_style(RevealItem::TimelineDot(i), revealed.get())
                                    ></span>
                                    <div
                                        class="p-6 rounded-2xl bg-slate-900 border border-slate-800 hover:border-indigo-500/50 transition-colors"
                                        style=move || reveal_style(RevealItem::ExperienceEntry(i), revealed.get())
                                    >
                                        <h3 class="text-xl font-semibold text-white">{entry.role}</h3>
                                        <div class="flex flex-wrap items-center gap-x-3 text-sm mt-1 mb-4">
                                            <span class="text-indigo-400 font-medium">{entry.company}</span>
                                            <span class="text-slate-500">{entry.duration}</span>
                                        </div>
                                        <p class="text-slate-300 mb-4">{entry.description}</p>
                                        <ul class="space-y-2 text-sm text-slate-400">
                                            {achievements
                                                .into_iter()
                                                .map(|a| view! { <li>"\u{25B9} " {a}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
