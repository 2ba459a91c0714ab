//! Contact page: a project enquiry form handed off to the user's mail client.

use leptos::prelude::*;

use crate::state::contact::{CONTACT_ADDRESS, ContactForm};
use crate::state::notice::NoticeState;
use crate::util::browser;

const TIMELINES: &[&str] = &["ASAP", "1-3 months", "3-6 months", "6+ months"];
const BUDGETS: &[&str] = &["< $10k", "$10k - $25k", "$25k - $50k", "$50k+"];

#[component]
pub fn ContactPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let href = form.with_untracked(ContactForm::mailto_url);
        browser::open_href(&href);
        form.update(|f| f.submitted = true);
        notices.update(|n| {
            n.info("Opening your email client...");
        });
    };

    view! {
        <div class="page contact-page">
            <header class="page__header">
                <h2>"Get in touch"</h2>
                <p class="page__subtitle">
                    "Tell us about your project. Messages go to "
                    <a href=format!("mailto:{CONTACT_ADDRESS}")>{CONTACT_ADDRESS}</a>
                </p>
            </header>

            <Show
                when=move || form.with(|f| f.submitted)
                fallback=move || {
                    view! {
                        <form class="card form" on:submit=on_submit>
                            <div class="form__row">
                                <ContactInput label="Name *" kind="text" required=true form=form read=|f| f.name.clone() write=|f, v| f.name = v/>
                                <ContactInput label="Email *" kind="email" required=true form=form read=|f| f.email.clone() write=|f, v| f.email = v/>
                            </div>
                            <div class="form__row">
                                <ContactInput label="Company" kind="text" required=false form=form read=|f| f.company.clone() write=|f, v| f.company = v/>
                                <ContactInput label="Phone" kind="tel" required=false form=form read=|f| f.phone.clone() write=|f, v| f.phone = v/>
                            </div>
                            <div class="form__row">
                                <ContactSelect label="Timeline" options=TIMELINES form=form read=|f| f.timeline.clone() write=|f, v| f.timeline = v/>
                                <ContactSelect label="Budget" options=BUDGETS form=form read=|f| f.budget.clone() write=|f, v| f.budget = v/>
                            </div>
                            <label class="field">
                                <span class="field__label">"Message *"</span>
                                <textarea
                                    class="input"
                                    rows="6"
                                    required=true
                                    prop:value=move || form.with(|f| f.message.clone())
                                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                                ></textarea>
                            </label>
                            <div class="form__actions">
                                <button class="btn btn--primary" type="submit">
                                    "Send Message"
                                </button>
                            </div>
                        </form>
                    }
                }
            >
                <section class="card contact-thanks">
                    <h3>"Thank you!"</h3>
                    <p>"Your email client should open with your message. We'll get back to you within 24 hours."</p>
                    <button class="btn" on:click=move |_| form.update(ContactForm::start_over)>
                        "Send Another Message"
                    </button>
                </section>
            </Show>
        </div>
    }
}

#[component]
fn ContactInput(
    label: &'static str,
    kind: &'static str,
    required: bool,
    form: RwSignal<ContactForm>,
    read: fn(&ContactForm) -> String,
    write: fn(&mut ContactForm, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="input"
                type=kind
                required=required
                prop:value=move || form.with(read)
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn ContactSelect(
    label: &'static str,
    options: &'static [&'static str],
    form: RwSignal<ContactForm>,
    read: fn(&ContactForm) -> String,
    write: fn(&mut ContactForm, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="input"
                prop:value=move || form.with(read)
                on:change=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            >
                <option value="">"Select..."</option>
                {options.iter().map(|option| view! { <option value=*option>{*option}</option> }).collect_view()}
            </select>
        </label>
    }
}
