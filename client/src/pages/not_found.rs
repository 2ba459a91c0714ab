//! Fallback view for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="page not-found">
            <h2>"404"</h2>
            <p>"Oops! Page not found"</p>
            <A href="/" attr:class="btn btn--primary">
                "Return to Home"
            </A>
        </div>
    }
}
