use folio_core::{current_year, Portfolio, SectionId};
use leptos::prelude::*;

use crate::dom;

#[component]
pub fn Footer() -> impl IntoView {
    let portfolio = expect_context::<Portfolio>();
    let copyright = portfolio.copyright(current_year());

    view! {
        <footer class="border-t border-slate-900 bg-slate-950 py-12">
            <div class="max-w-6xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-6 text-slate-500 text-sm">
                <div class="flex items-center space-x-4">
                    <span class="text-xl font-black text-indigo-400">
                        {portfolio.personal.initials.clone()}
                    </span>
                    <p>{copyright}</p>
                </div>

                <nav class="flex flex-wrap justify-center gap-x-6 gap-y-2">
                    {SectionId::ALL
                        .into_iter()
                        .map(|id| {
                            view! {
                                <a
                                    href=id.href()
                                    class="hover:text-white transition-colors"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        dom::scroll_to_section(id);
                                    }
                                >
                                    {id.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <button
                    class="px-4 py-2 rounded-full border border-slate-700 hover:border-indigo-500 hover:text-white transition-colors"
                    aria-label="Back to top"
                    on:click=move |_| dom::scroll_to_top()
                >
                    "\u{2191} Back to top"
                </button>
            </div>
        </footer>
    }
}
