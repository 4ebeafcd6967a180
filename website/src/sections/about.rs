use folio_core::{Portfolio, RevealItem, SectionId};
use leptos::html;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::reveal::{reveal_style, use_reveal};

#[component]
pub fn About() -> impl IntoView {
    let about = expect_context::<Portfolio>().about;
    let node = NodeRef::<html::Section>::new();
    let revealed = use_reveal(node);
    let id = SectionId::About;

    view! {
        <section id=id.as_str() node_ref=node class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    heading=id.heading()
                    subtitle=id.subtitle().unwrap_or_default()
                    revealed=revealed
                />

                <div class="grid md:grid-cols-2 gap-12 items-start">
                    <div
                        class="space-y-8"
                        style=move || reveal_style(RevealItem::Staggered(1), revealed.get())
                    >
                        <p class="text-lg text-slate-300 leading-relaxed p-6 rounded-2xl bg-slate-900/60 border border-slate-800">
                            {about.bio.clone()}
                        </p>

                        <div class="grid grid-cols-2 gap-4">
                            {about
                                .stats
                                .iter()
                                .enumerate()
                                .map(|(i, stat)| {
                                    view! {
                                        <div
                                            class="p-5 rounded-xl bg-slate-900 border border-slate-800 text-center"
                                            style=move || reveal_style(RevealItem::Stat(i), revealed.get())
                                        >
                                            <div class="text-3xl font-bold text-indigo-400">
                                                {stat.value.clone()}
                                            </div>
                                            <div class="text-sm text-slate-400 mt-1">
                                                {stat.label.clone()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div style=move || reveal_style(RevealItem::Staggered(2), revealed.get())>
                        <h3 class="text-2xl font-semibold text-white mb-6">"Key Strengths"</h3>
                        <ul class="space-y-4">
                            {about
                                .strengths
                                .iter()
                                .enumerate()
                                .map(|(i, strength)| {
                                    view! {
                                        <li
                                            class="flex items-start text-slate-300"
                                            style=move || reveal_style(RevealItem::Strength(i), revealed.get())
                                        >
                                            <span class="text-violet-400 mr-3">"\u{25C6}"</span>
                                            {strength.clone()}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
