//! Forms showcase: a sign-up form with inline validation.

use leptos::prelude::*;

use crate::state::forms::{FormField, SignupForm};
use crate::state::notice::NoticeState;

const ROLES: &[(&str, &str)] = &[
    ("developer", "Developer"),
    ("designer", "Designer"),
    ("manager", "Manager"),
    ("other", "Other"),
];

#[component]
pub fn FormsPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let form = RwSignal::new(SignupForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(SignupForm::submit) {
            Some(Ok(message)) => {
                leptos::logging::log!("signup form accepted");
                notices.update(|n| {
                    n.success(message);
                });
            }
            Some(Err(message)) => notices.update(|n| {
                n.error(message);
            }),
            None => {}
        }
    };

    let field_class = move |field: FormField| {
        if form.with(|f| f.error(field).is_some()) { "input input--invalid" } else { "input" }
    };

    view! {
        <div class="page forms-page">
            <header class="page__header">
                <h2>"Forms"</h2>
                <p class="page__subtitle">"Form inputs with validation"</p>
            </header>

            <form class="card form" novalidate=true on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Name *"</span>
                    <input
                        class=move || field_class(FormField::Name)
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldError form=form field=FormField::Name/>
                </label>
                <label class="field">
                    <span class="field__label">"Email *"</span>
                    <input
                        class=move || field_class(FormField::Email)
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <FieldError form=form field=FormField::Email/>
                </label>
                <label class="field">
                    <span class="field__label">"Company"</span>
                    <input
                        class="input"
                        type="text"
                        prop:value=move || form.with(|f| f.company.clone())
                        on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Role"</span>
                    <select
                        class="input"
                        prop:value=move || form.with(|f| f.role.clone())
                        on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                    >
                        <option value="">"Select a role"</option>
                        {ROLES
                            .iter()
                            .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Bio"</span>
                    <textarea
                        class="input"
                        rows="4"
                        prop:value=move || form.with(|f| f.bio.clone())
                        on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="field field--toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.notifications)
                        on:change=move |_| form.update(|f| f.notifications = !f.notifications)
                    />
                    <span class="field__label">"Enable notifications"</span>
                </label>
                <label class="field field--toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.newsletter)
                        on:change=move |_| form.update(|f| f.newsletter = !f.newsletter)
                    />
                    <span class="field__label">"Subscribe to newsletter"</span>
                </label>
                <div class="form__actions">
                    <button class="btn" type="button" on:click=move |_| form.set(SignupForm::default())>
                        "Reset"
                    </button>
                    <button class="btn btn--primary" type="submit">
                        "Submit"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn FieldError(form: RwSignal<SignupForm>, field: FormField) -> impl IntoView {
    move || form.with(|f| f.error(field)).map(|message| view! { <span class="field__error">{message}</span> })
}
