use folio_core::RevealItem;
use leptos::prelude::*;

use crate::reveal::reveal_style;

/// Heading, accent rule and subtitle at the top of every section
#[component]
pub fn SectionHeader(
    heading: &'static str,
    #[prop(into)] subtitle: String,
    revealed: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div
            class="text-center mb-16"
            style=move || reveal_style(RevealItem::Header, revealed.get())
        >
            <h2 class="text-4xl font-bold text-white mb-4">{heading}</h2>
            <div class="w-20 h-1 mx-auto mb-6 rounded-full bg-gradient-to-r from-indigo-500 to-violet-500"></div>
            <p class="text-lg text-slate-400 max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}
