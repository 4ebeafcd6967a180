use std::time::Duration;

use folio_core::{ContactField, ContactFormState, Portfolio, RevealItem, SectionId, SubmitStatus};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::dom;
use crate::reveal::{reveal_style, use_reveal};

/// Simulated delivery time
const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// How long the outcome banner stays up
const STATUS_DISPLAY: Duration = Duration::from_millis(5000);

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-slate-950 border text-white placeholder-slate-600 focus:outline-none focus:ring-2 focus:ring-indigo-500 transition-colors";

/// Form state shared by the inputs and the submit handler
#[derive(Clone, Copy)]
struct FormSignals {
    state: RwSignal<ContactFormState>,
}

impl FormSignals {
    fn new() -> Self {
        Self {
            state: RwSignal::new(ContactFormState::new()),
        }
    }

    fn edit(self, field: ContactField, value: String) {
        self.state.update(|state| state.set_field(field, value));
    }

    fn submit(self) {
        let Some(form) = self.state.try_update(|state| state.begin_submit()).flatten() else {
            let rejected = self.state.with_untracked(|state| state.errors.len());
            if rejected > 0 {
                log::debug!("Contact form rejected with {} field error(s)", rejected);
            }
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = match dom::sleep(SUBMIT_DELAY).await {
                Ok(()) => {
                    log::info!(
                        "Contact message from {} <{}> ({} chars)",
                        form.name,
                        form.email,
                        form.message.chars().count()
                    );
                    SubmitStatus::Success
                }
                Err(err) => {
                    log::error!("Contact form delivery failed: {:?}", err);
                    SubmitStatus::Failed
                }
            };

            let Some(token) = self.state.try_update(|state| state.finish_submit(outcome)) else {
                return;
            };

            match dom::sleep(STATUS_DISPLAY).await {
                Ok(()) => self.state.update(|state| {
                    state.clear_status(token);
                }),
                Err(err) => log::warn!("Status banner timer failed: {:?}", err),
            }
        });
    }

    fn submitting(self) -> bool {
        self.state.with(|state| state.submitting)
    }
}

#[component]
fn Field(field: ContactField, signals: FormSignals) -> impl IntoView {
    let value = move || signals.state.with(|state| state.form.field(field).to_string());
    let error = move || signals.state.with(|state| state.errors.for_field(field));
    let class = move || {
        if error().is_some() {
            format!("{} border-rose-500", INPUT_CLASS)
        } else {
            format!("{} border-slate-800", INPUT_CLASS)
        }
    };
    let on_input = move |ev: ev::Event| signals.edit(field, event_target_value(&ev));

    let input = if field == ContactField::Message {
        view! {
            <textarea
                rows="5"
                name=field.label()
                class=class
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=if field == ContactField::Email { "email" } else { "text" }
                name=field.label()
                class=class
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <label class="block">
            <span class="block text-sm font-medium text-slate-300 mb-2">{field.label()}</span>
            {input}
            <Show when=move || error().is_some()>
                <p class="mt-1 text-sm text-rose-400">
                    {move || error().map(|e| e.to_string()).unwrap_or_default()}
                </p>
            </Show>
        </label>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let portfolio = expect_context::<Portfolio>();
    let personal = portfolio.personal;
    let node = NodeRef::<html::Section>::new();
    let revealed = use_reveal(node);
    let id = SectionId::Contact;

    let signals = FormSignals::new();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        signals.submit();
    };

    let email_href = format!("mailto:{}", personal.email);
    let socials = [("LinkedIn", personal.linkedin), ("GitHub", personal.github)];

    view! {
        <section id=id.as_str() node_ref=node class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeader heading=id.heading() subtitle=portfolio.cta revealed=revealed />

                <div class="grid md:grid-cols-2 gap-12">
                    <div
                        class="space-y-8"
                        style=move || reveal_style(RevealItem::ContactInfo, revealed.get())
                    >
                        <h3 class="text-2xl font-semibold text-white">"Contact Information"</h3>
                        <div class="space-y-4 text-slate-300">
                            <p>
                                <span class="block text-sm text-slate-500">"Email"</span>
                                <a href=email_href class="hover:text-indigo-400 transition-colors">
                                    {personal.email}
                                </a>
                            </p>
                            <p>
                                <span class="block text-sm text-slate-500">"Location"</span>
                                {personal.location}
                            </p>
                        </div>
                        <div>
                            <h4 class="text-lg font-medium text-white mb-4">"Connect with me"</h4>
                            <div class="flex space-x-4">
                                {socials
                                    .into_iter()
                                    .filter(|(_, url)| !url.is_empty())
                                    .map(|(label, url)| {
                                        view! {
                                            <a
                                                href=url
                                                target="_blank"
                                                rel="noreferrer"
                                                class="px-4 py-2 rounded-lg bg-slate-900 border border-slate-800 text-slate-300 hover:text-white hover:border-indigo-500 transition-colors"
                                            >
                                                {label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <form
                        class="space-y-6 p-8 rounded-2xl bg-slate-900 border border-slate-800"
                        style=move || reveal_style(RevealItem::ContactForm, revealed.get())
                        novalidate=true
                        on:submit=on_submit
                    >
                        <h3 class="text-2xl font-semibold text-white">"Send a Message"</h3>
                        {ContactField::ALL
                            .into_iter()
                            .map(|field| view! { <Field field=field signals=signals /> })
                            .collect_view()}

                        <button
                            type="submit"
                            class="w-full py-3 rounded-lg font-semibold text-white bg-gradient-to-r from-indigo-600 to-violet-600 hover:opacity-90 disabled:opacity-50 transition-opacity"
                            disabled=move || signals.submitting()
                        >
                            {move || if signals.submitting() { "Sending..." } else { "Send Message" }}
                        </button>

                        {move || {
                            signals
                                .state
                                .with(|state| state.status)
                                .map(|status| {
                                    let class = match status {
                                        SubmitStatus::Success => "p-4 rounded-lg bg-emerald-900/30 border border-emerald-800 text-emerald-300",
                                        SubmitStatus::Failed => "p-4 rounded-lg bg-rose-900/30 border border-rose-800 text-rose-300",
                                    };
                                    view! { <p class=class>{status.message()}</p> }
                                })
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}
