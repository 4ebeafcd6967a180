use folio_core::{NavigationConfig, NavigationState, Portfolio, RevealItem, SectionId};
use leptos::ev;
use leptos::prelude::*;

use crate::dom::{self, DomLayout};
use crate::reveal::{reveal_style, use_entrance};

const LINK_BASE: &str = "px-3 py-2 rounded-lg text-sm font-medium transition-colors";

fn link_class(active: bool) -> String {
    if active {
        format!("{} text-white bg-white/10", LINK_BASE)
    } else {
        format!("{} text-slate-400 hover:text-white", LINK_BASE)
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let portfolio = expect_context::<Portfolio>();
    let config = NavigationConfig::default();

    let nav = RwSignal::new(NavigationState::default());
    let (is_menu_open, set_is_menu_open) = signal(false);
    let entered = use_entrance();

    let resolve = move || {
        let scroll_y = dom::scroll_y();
        nav.maybe_update(|state| state.update_from(scroll_y, &DomLayout, &config));
    };

    // Initial state for pages loaded mid-scroll
    Effect::new(move |_| resolve());

    let handle = window_event_listener(ev::scroll, move |_| resolve());
    on_cleanup(move || handle.remove());

    let go_to = move |id: SectionId| {
        set_is_menu_open.set(false);
        dom::scroll_to_section(id);
    };

    let header_class = move || {
        if nav.with(|state| state.scrolled_past_threshold) {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-slate-950/90 backdrop-blur-md border-b border-slate-800 shadow-lg"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
        }
    };

    let links = move || {
        SectionId::ALL
            .into_iter()
            .map(|id| {
                view! {
                    <a
                        href=id.href()
                        class=move || link_class(nav.with(|state| state.is_active(id)))
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to(id);
                        }
                    >
                        {id.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header
            class=header_class
            style=move || reveal_style(RevealItem::NavBar, entered.get())
        >
            <div class="max-w-6xl mx-auto px-6 h-16 flex items-center justify-between">
                <a
                    href="#"
                    class="text-2xl font-black text-transparent bg-clip-text bg-gradient-to-r from-indigo-400 to-violet-400"
                    on:click=move |ev| {
                        ev.prevent_default();
                        dom::scroll_to_top();
                    }
                >
                    {portfolio.personal.initials.clone()}
                </a>

                <nav class="hidden md:flex items-center space-x-2">{links}</nav>

                <button
                    class="md:hidden text-slate-300 hover:text-white"
                    aria-label="Toggle menu"
                    on:click=move |_| set_is_menu_open.update(|v| *v = !*v)
                >
                    {move || if is_menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=move || is_menu_open.get()>
                <MobileMenu nav=nav on_select=Callback::new(go_to) />
            </Show>
        </header>
    }
}

/// Menu links for small screens, staggered in each time the menu opens
#[component]
fn MobileMenu(nav: RwSignal<NavigationState>, on_select: Callback<SectionId>) -> impl IntoView {
    let entered = use_entrance();

    view! {
        <nav class="md:hidden flex flex-col px-6 pb-4 space-y-1 bg-slate-950/95 border-b border-slate-800">
            {SectionId::ALL
                .into_iter()
                .enumerate()
                .map(|(index, id)| {
                    view! {
                        <a
                            href=id.href()
                            class=move || link_class(nav.with(|state| state.is_active(id)))
                            style=move || reveal_style(RevealItem::MenuLink(index), entered.get())
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_select.run(id);
                            }
                        >
                            {id.label()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
