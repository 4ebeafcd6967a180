pub mod components;
pub mod dom;
pub mod reveal;
pub mod sections;

use components::footer::Footer;
use components::navbar::Navbar;
use folio_core::Portfolio;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use sections::{About, Contact, Experience, Projects, Skills};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let portfolio = Portfolio::sample();
    let title = format!("{} | {}", portfolio.personal.name, portfolio.personal.title);
    provide_context(portfolio);

    view! {
        <Title text=title />
        <div class="min-h-screen bg-slate-950 text-slate-200 selection:bg-indigo-500/30 font-sans">
            <Navbar />
            <main class="pt-16">
                <About />
                <Experience />
                <Projects />
                <Skills />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
