//! Two-sided metric card: summary on the front, details behind it.

use leptos::prelude::*;

use crate::state::dashboard::{FlipState, Kpi};

#[component]
pub fn FlippableCard(metric: &'static Kpi, children: ChildrenFn) -> impl IntoView {
    let flip = RwSignal::new(FlipState::default());
    let children = StoredValue::new(children);

    view! {
        <div class=move || flip.get().css_class()>
            <Show
                when=move || flip.get().flipped
                fallback=move || {
                    view! {
                        <section class="card flip-card__face">
                            <h4 class="kpi__title">{metric.title}</h4>
                            <p class="kpi__value">{metric.value}</p>
                            <span class=if metric.is_positive() { "kpi__delta kpi__delta--up" } else { "kpi__delta kpi__delta--down" }>
                                {metric.delta_text()}
                                " "
                                {metric.delta_label}
                            </span>
                            <button class="btn btn--block flip-card__toggle" on:click=move |_| flip.update(FlipState::show_details)>
                                "View details ›"
                            </button>
                        </section>
                    }
                }
            >
                <section class="card flip-card__face flip-card__face--back">
                    <div class="card__toolbar">
                        <h4>{format!("{} - Details", metric.title)}</h4>
                        <button class="btn btn--icon" title="Back" on:click=move |_| flip.update(FlipState::show_summary)>
                            "←"
                        </button>
                    </div>
                    {children.with_value(|c| c())}
                </section>
            </Show>
        </div>
    }
}
