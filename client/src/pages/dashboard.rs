//! E-commerce overview: KPI cards, a flippable profit card, regional orders,
//! monthly targets, recent orders and the activity feed.

use leptos::prelude::*;

use crate::components::flippable_card::FlippableCard;
use crate::state::dashboard::{
    ACTIVITIES, COUNTRY_ORDERS, KPIS, Kpi, MONTHLY_TARGETS, PROFIT_OVERVIEW, RECENT_ORDERS,
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h2>"E-Commerce Dashboard"</h2>
                <p class="page__subtitle">"Welcome back! Here's what's happening with your store today."</p>
            </header>

            <div class="kpi-grid">
                {KPIS.iter().map(|kpi| view! { <KpiCard kpi=kpi/> }).collect_view()}
            </div>

            <div class="two-col">
                <FlippableCard metric=&PROFIT_OVERVIEW>
                    <p class="page__subtitle">"Detailed chart view"</p>
                </FlippableCard>

                <section class="card">
                    <h3>"Orders by Country"</h3>
                    <p class="page__subtitle">"Top performing regions this month"</p>
                    <ul class="stat-list">
                        {COUNTRY_ORDERS
                            .iter()
                            .map(|c| {
                                view! {
                                    <li class="stat-list__item">
                                        <div class="stat-list__row">
                                            <span>{c.flag} " " {c.country}</span>
                                            <span>{format!("{}%", c.percentage)}</span>
                                        </div>
                                        <span class="field__hint">{c.orders_label()}</span>
                                        <div class="progress">
                                            <div class="progress__bar" style=format!("width: {}%", c.percentage)></div>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>

            <div class="two-col">
                <section class="card">
                    <h3>"Monthly Targets"</h3>
                    <p class="page__subtitle">"Progress towards monthly goals"</p>
                    {MONTHLY_TARGETS
                        .iter()
                        .map(|t| {
                            view! {
                                <div class="target">
                                    <div class="stat-list__row">
                                        <span class="field__label">{t.label}</span>
                                        <span>
                                            {t.current} " "
                                            <span class=format!("badge {}", t.status.css_modifier())>{t.status.label()}</span>
                                        </span>
                                    </div>
                                    <div class="progress">
                                        <div class="progress__bar" style=t.bar_width()></div>
                                    </div>
                                    <p class="field__hint">{t.caption()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="card">
                    <h3>"Recent Orders"</h3>
                    <p class="page__subtitle">"Latest transactions from your store"</p>
                    <ul class="stat-list">
                        {RECENT_ORDERS
                            .iter()
                            .map(|o| {
                                view! {
                                    <li class="stat-list__item stat-list__row">
                                        <div>
                                            <strong>{o.id}</strong>
                                            " "
                                            <span class=format!("badge badge--{}", o.status.as_str())>{o.status.as_str()}</span>
                                            <div class="field__hint">{o.customer}</div>
                                        </div>
                                        <div class="stat-list__end">
                                            <strong>{o.amount}</strong>
                                            <div class="field__hint">{o.time}</div>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>

            <section class="card">
                <h3>"Activity Feed"</h3>
                <p class="page__subtitle">"Recent system events and notifications"</p>
                <ul class="stat-list">
                    {ACTIVITIES
                        .iter()
                        .map(|a| {
                            view! {
                                <li class="stat-list__item">
                                    <p>{a.message}</p>
                                    <span class="field__hint">{a.time}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}

#[component]
fn KpiCard(kpi: &'static Kpi) -> impl IntoView {
    view! {
        <section class="card kpi">
            <p class="kpi__title">{kpi.title}</p>
            <p class="kpi__value">{kpi.value}</p>
            <span class=if kpi.is_positive() { "kpi__delta kpi__delta--up" } else { "kpi__delta kpi__delta--down" }>
                {kpi.delta_text()}
                " "
                {kpi.delta_label}
            </span>
        </section>
    }
}
