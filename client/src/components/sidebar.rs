//! Left navigation rail linking the dashboard pages.

use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy)]
struct NavItem {
    href: &'static str,
    label: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/dashboard", label: "Dashboard" },
    NavItem { href: "/tables", label: "Tables" },
    NavItem { href: "/iot", label: "IoT" },
    NavItem { href: "/forms", label: "Forms" },
    NavItem { href: "/settings", label: "Settings" },
    NavItem { href: "/pricing", label: "Pricing" },
    NavItem { href: "/contact", label: "Contact" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar" aria-label="Main">
            <div class="sidebar__brand">
                <span class="sidebar__logo" aria-hidden="true">"▦"</span>
                <span class="sidebar__name">"Admin Pro"</span>
            </div>
            <ul class="sidebar__list">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="sidebar__item">
                                <A href=item.href attr:class="sidebar__link">
                                    {item.label}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
