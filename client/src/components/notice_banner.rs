//! Banner showing the most recent page notice.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// How long a notice stays up before it dismisses itself.
#[cfg(feature = "hydrate")]
const NOTICE_TTL: std::time::Duration = std::time::Duration::from_secs(4);

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(id) = notices.with(|n| n.current.as_ref().map(|c| c.id)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(NOTICE_TTL).await;
            notices.update(|n| n.dismiss(id));
        });
    });

    move || {
        notices.get().current.map(|notice| {
            let id = notice.id;
            view! {
                <div class=format!("notice {}", notice.level.css_modifier()) role="status">
                    <span class="notice__message">{notice.message}</span>
                    <button
                        class="notice__close"
                        title="Dismiss"
                        on:click=move |_| notices.update(|n| n.dismiss(id))
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
