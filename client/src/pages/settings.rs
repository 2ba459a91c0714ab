//! Account settings page persisted to browser localStorage.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page restores the last saved blob, if any. Edits stay in the
//! draft until "Save Changes"; "Cancel" reverts to the saved copy and
//! "Reset to defaults" wipes the stored key after confirmation.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::state::notice::NoticeState;
use crate::state::settings::{SETTINGS_STORAGE_KEY, Settings, SettingsState, relative_time};
use crate::util::browser;
use crate::util::ui_persistence::{remove, save_json};

const TIMEZONES: &[(&str, &str)] = &[
    ("America/Los_Angeles", "Pacific Time"),
    ("America/Denver", "Mountain Time"),
    ("America/Chicago", "Central Time"),
    ("America/New_York", "Eastern Time"),
    ("Europe/London", "London"),
    ("Europe/Berlin", "Berlin"),
    ("Asia/Tokyo", "Tokyo"),
];

const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("es", "Español"), ("fr", "Français"), ("de", "Deutsch")];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let settings = RwSignal::new(SettingsState::default());
    let confirm_reset = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::state::settings::StoredSettings;
        if let Some(stored) = crate::util::ui_persistence::load_json::<StoredSettings>(SETTINGS_STORAGE_KEY) {
            settings.set(SettingsState::from_stored(stored));
            notices.update(|n| {
                n.success("Settings loaded from previous session");
            });
        }
    });

    let on_save = move |_| {
        let Some(stored) = settings.try_update(|s| s.save(browser::now_ms())) else {
            return;
        };
        match save_json(SETTINGS_STORAGE_KEY, &stored) {
            Ok(()) => notices.update(|n| {
                n.success("Settings saved successfully!");
            }),
            Err(e) => {
                leptos::logging::warn!("settings save failed: {e}");
                notices.update(|n| {
                    n.error("Failed to save settings. Storage might be full.");
                });
            }
        }
    };

    let on_cancel = move |_| {
        settings.update(SettingsState::cancel);
        notices.update(|n| {
            n.info("Changes discarded");
        });
    };

    let on_reset_confirm = Callback::new(move |()| {
        confirm_reset.set(false);
        settings.update(SettingsState::reset);
        match remove(SETTINGS_STORAGE_KEY) {
            Ok(()) => notices.update(|n| {
                n.success("Settings reset to defaults");
            }),
            Err(e) => {
                leptos::logging::warn!("settings reset failed: {e}");
                notices.update(|n| {
                    n.error("Failed to reset settings");
                });
            }
        }
    });
    let on_reset_cancel = Callback::new(move |()| confirm_reset.set(false));

    let on_two_factor = move |_| {
        let enabled = settings.try_update(|s| {
            s.draft.two_factor = !s.draft.two_factor;
            s.draft.two_factor
        });
        notices.update(|n| {
            if enabled == Some(true) {
                n.success("Two-factor authentication enabled");
            } else {
                n.info("Two-factor authentication disabled");
            }
        });
    };

    let last_saved_label = move || {
        settings
            .with(|s| s.last_saved)
            .map(|at| format!("Last saved {}", relative_time(at, browser::now_ms())))
    };

    view! {
        <div class="page settings-page">
            <header class="page__header">
                <h2>"Settings"</h2>
                <p class="page__subtitle">"Manage your account settings and preferences"</p>
                <p class="page__meta">{last_saved_label}</p>
            </header>

            <Show when=move || settings.with(SettingsState::has_unsaved_changes)>
                <div class="unsaved-bar" role="status">"You have unsaved changes"</div>
            </Show>

            <section class="card">
                <h3>"Profile"</h3>
                <ProfileImage settings=settings notices=notices/>
                <TextField label="Full Name" settings=settings read=|s| s.name.clone() write=|s, v| s.name = v/>
                <TextField label="Email" settings=settings read=|s| s.email.clone() write=|s, v| s.email = v/>
                <TextField label="Company" settings=settings read=|s| s.company.clone() write=|s, v| s.company = v/>
                <TextField
                    label="Location"
                    settings=settings
                    read=|s| s.location.clone()
                    write=|s, v| s.location = v
                />
                <label class="field">
                    <span class="field__label">"Bio"</span>
                    <textarea
                        class="input"
                        rows="3"
                        prop:value=move || settings.with(|s| s.draft.bio.clone())
                        on:input=move |ev| settings.update(|s| s.draft.bio = event_target_value(&ev))
                    ></textarea>
                </label>
                <SelectField
                    label="Timezone"
                    options=TIMEZONES
                    settings=settings
                    read=|s| s.timezone.clone()
                    write=|s, v| s.timezone = v
                />
                <SelectField
                    label="Language"
                    options=LANGUAGES
                    settings=settings
                    read=|s| s.language.clone()
                    write=|s, v| s.language = v
                />
            </section>

            <section class="card">
                <h3>"Notifications"</h3>
                <ToggleField
                    label="Email notifications"
                    settings=settings
                    read=|s| s.email_notifications
                    flip=|s| s.email_notifications = !s.email_notifications
                />
                <ToggleField
                    label="Push notifications"
                    settings=settings
                    read=|s| s.push_notifications
                    flip=|s| s.push_notifications = !s.push_notifications
                />
                <ToggleField
                    label="Marketing emails"
                    settings=settings
                    read=|s| s.marketing_emails
                    flip=|s| s.marketing_emails = !s.marketing_emails
                />
                <ToggleField
                    label="Security alerts"
                    settings=settings
                    read=|s| s.security_alerts
                    flip=|s| s.security_alerts = !s.security_alerts
                />
            </section>

            <section class="card">
                <h3>"Security"</h3>
                <label class="field field--toggle">
                    <span class="field__label">"Two-factor authentication"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || settings.with(|s| s.draft.two_factor)
                        on:change=on_two_factor
                    />
                </label>
            </section>

            <div class="page__actions">
                <button class="btn btn--danger" on:click=move |_| confirm_reset.set(true)>
                    "Reset to defaults"
                </button>
                <span class="page__spacer"></span>
                <button
                    class="btn"
                    disabled=move || !settings.with(SettingsState::has_unsaved_changes)
                    on:click=on_cancel
                >
                    "Cancel"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || !settings.with(SettingsState::has_unsaved_changes)
                    on:click=on_save
                >
                    "Save Changes"
                </button>
            </div>

            <Show when=move || confirm_reset.get()>
                <ConfirmDialog
                    title="Reset Settings".to_owned()
                    message="Are you sure you want to reset all settings to default values? This cannot be undone."
                        .to_owned()
                    confirm_label="Reset"
                    on_confirm=on_reset_confirm
                    on_cancel=on_reset_cancel
                />
            </Show>
        </div>
    }
}

#[component]
fn TextField(
    label: &'static str,
    settings: RwSignal<SettingsState>,
    read: fn(&Settings) -> String,
    write: fn(&mut Settings, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="input"
                type="text"
                prop:value=move || settings.with(|s| read(&s.draft))
                on:input=move |ev| settings.update(|s| write(&mut s.draft, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn SelectField(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    settings: RwSignal<SettingsState>,
    read: fn(&Settings) -> String,
    write: fn(&mut Settings, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="input"
                prop:value=move || settings.with(|s| read(&s.draft))
                on:change=move |ev| settings.update(|s| write(&mut s.draft, event_target_value(&ev)))
            >
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
fn ToggleField(
    label: &'static str,
    settings: RwSignal<SettingsState>,
    read: fn(&Settings) -> bool,
    flip: fn(&mut Settings),
) -> impl IntoView {
    view! {
        <label class="field field--toggle">
            <span class="field__label">{label}</span>
            <input
                type="checkbox"
                prop:checked=move || settings.with(|s| read(&s.draft))
                on:change=move |_| settings.update(|s| flip(&mut s.draft))
            />
        </label>
    }
}

/// Avatar preview with upload and remove controls.
#[component]
fn ProfileImage(settings: RwSignal<SettingsState>, notices: RwSignal<NoticeState>) -> impl IntoView {
    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        crate::util::browser::read_picked_image(
            &ev,
            crate::state::settings::validate_profile_image,
            move |e| {
                notices.update(|n| {
                    n.error(e.to_string());
                });
            },
            move |data_url| {
                settings.update(|s| s.set_image(data_url));
                notices.update(|n| {
                    n.success("Image uploaded! Click \"Save Changes\" to apply");
                });
            },
        );
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_remove = move |_| {
        let reverted = settings.try_update(SettingsState::remove_image).unwrap_or(false);
        notices.update(|n| {
            if reverted {
                n.info("Reverted to saved profile image");
            } else {
                n.info("Profile image removed. Click \"Save Changes\" to apply");
            }
        });
    };

    view! {
        <div class="avatar-field">
            {move || match settings.with(|s| s.draft_image.clone()) {
                Some(src) => view! { <img class="avatar avatar--large" src=src alt="Profile"/> }.into_any(),
                None => {
                    view! { <span class="avatar avatar--large avatar--fallback">{settings.with(SettingsState::initials)}</span> }
                        .into_any()
                }
            }}
            <div class="avatar-field__actions">
                <label class="btn btn--small">
                    "Upload"
                    <input class="visually-hidden" type="file" accept="image/jpeg,image/png,image/gif" on:change=on_pick/>
                </label>
                <button class="btn btn--small" on:click=on_remove>
                    "Remove"
                </button>
                <p class="field__hint">"JPG, PNG or GIF. Max size 2MB."</p>
            </div>
        </div>
    }
}
