use folio_core::{Portfolio, RevealItem, SectionId, SkillCategory, SKILL_HIGHLIGHTS};
use leptos::html;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::reveal::{reveal_style, use_reveal};

#[component]
pub fn Skills() -> impl IntoView {
    let skills = expect_context::<Portfolio>().skills;
    let node = NodeRef::<html::Section>::new();
    let revealed = use_reveal(node);
    let id = SectionId::Skills;

    view! {
        <section id=id.as_str() node_ref=node class="py-24 px-6 bg-slate-900/30">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    heading=id.heading()
                    subtitle=id.subtitle().unwrap_or_default()
                    revealed=revealed
                />

                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SkillCategory::ALL
                        .into_iter()
                        .enumerate()
                        .map(|(category, kind)| {
                            let tags = skills.tags(kind).to_vec();
                            view! {
                                <div
                                    class="p-6 rounded-2xl bg-slate-900 border border-slate-800"
                                    style=move || reveal_style(RevealItem::SkillCategory(category), revealed.get())
                                >
                                    <h3 class="text-lg font-semibold text-white mb-4">{kind.label()}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {tags
                                            .into_iter()
                                            .enumerate()
                                            .map(|(tag, name)| {
                                                let item = RevealItem::SkillTag { category, tag };
                                                view! {
                                                    <span
                                                        class="px-3 py-1 text-sm rounded-full bg-slate-800 text-slate-300 hover:bg-indigo-600/40 transition-colors"
                                                        style=move || reveal_style(item, revealed.get())
                                                    >
                                                        {name}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div
                    class="mt-16 p-8 rounded-2xl bg-gradient-to-r from-indigo-600/10 to-violet-600/10 border border-slate-800"
                    style=move || reveal_style(RevealItem::SkillHighlights, revealed.get())
                >
                    <h3 class="text-2xl font-semibold text-white text-center mb-8">
                        "What I Bring to the Table"
                    </h3>
                    <div class="grid md:grid-cols-3 gap-6 text-center">
                        {SKILL_HIGHLIGHTS
                            .iter()
                            .map(|highlight| {
                                view! {
                                    <div>
                                        <h4 class="font-semibold text-indigo-300 mb-2">{highlight.title}</h4>
                                        <p class="text-sm text-slate-400">{highlight.desc}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
