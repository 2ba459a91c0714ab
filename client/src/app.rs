//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{notice_banner::NoticeBanner, sidebar::Sidebar};
use crate::pages::{
    contact::ContactPage, dashboard::DashboardPage, forms::FormsPage, iot::IotPage, not_found::NotFoundPage,
    pricing::PricingPage, settings::SettingsPage, tables::TablesPage,
};
use crate::state::notice::NoticeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared notice context; every other piece of state is owned
/// by the page that renders it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notices = RwSignal::new(NoticeState::default());
    provide_context(notices);

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-pro.css"/>
        <Title text="Admin Pro"/>

        <Router>
            <div class="layout">
                <Sidebar/>
                <main class="layout__main">
                    <NoticeBanner/>
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=TablesPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("tables") view=TablesPage/>
                        <Route path=StaticSegment("iot") view=IotPage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                        <Route path=StaticSegment("forms") view=FormsPage/>
                        <Route path=StaticSegment("pricing") view=PricingPage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
