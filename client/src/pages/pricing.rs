//! Pricing page with a monthly/yearly billing toggle.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;

use crate::state::pricing::{BillingCycle, PRICING_TIERS, PricingTier};

/// Caption under a tier's headline price.
fn price_caption(tier: &PricingTier, cycle: BillingCycle) -> Option<String> {
    if tier.is_free() || cycle == BillingCycle::Monthly {
        return None;
    }
    Some(format!(
        "${}/month billed yearly, save {}%",
        tier.effective_monthly(),
        tier.yearly_savings_percent()
    ))
}

#[component]
pub fn PricingPage() -> impl IntoView {
    let cycle = RwSignal::new(BillingCycle::Monthly);

    view! {
        <div class="page pricing-page">
            <header class="page__header page__header--center">
                <h2>"Simple, transparent pricing"</h2>
                <p class="page__subtitle">"Choose the plan that fits your team"</p>
                <div class="billing-toggle" role="group" aria-label="Billing cycle">
                    <span class=move || {
                        if cycle.get() == BillingCycle::Monthly { "billing-toggle__label is-active" } else { "billing-toggle__label" }
                    }>"Monthly"</span>
                    <button
                        class="billing-toggle__switch"
                        aria-pressed=move || { (cycle.get() == BillingCycle::Yearly).to_string() }
                        on:click=move |_| cycle.update(|c| *c = c.toggled())
                    >
                        <span class="billing-toggle__knob"></span>
                    </button>
                    <span class=move || {
                        if cycle.get() == BillingCycle::Yearly { "billing-toggle__label is-active" } else { "billing-toggle__label" }
                    }>"Yearly"</span>
                </div>
            </header>

            <div class="pricing-grid">
                {PRICING_TIERS.iter().map(|tier| view! { <TierCard tier=tier cycle=cycle/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TierCard(tier: &'static PricingTier, cycle: RwSignal<BillingCycle>) -> impl IntoView {
    view! {
        <section class=if tier.highlighted { "card pricing-card pricing-card--highlighted" } else { "card pricing-card" }>
            {tier.highlighted.then(|| view! { <span class="badge pricing-card__badge">"Most Popular"</span> })}
            <h3>{tier.name}</h3>
            <p class="pricing-card__description">{tier.description}</p>
            <p class="pricing-card__price">
                <span class="pricing-card__amount">{move || format!("${}", tier.price(cycle.get()))}</span>
                <span class="pricing-card__period">{move || format!("/{}", cycle.get().period_label())}</span>
            </p>
            <p class="pricing-card__caption">{move || price_caption(tier, cycle.get())}</p>
            <ul class="pricing-card__features">
                {tier.features.iter().map(|feature| view! { <li>"✓ " {*feature}</li> }).collect_view()}
            </ul>
            <button class=if tier.highlighted { "btn btn--primary btn--block" } else { "btn btn--block" }>{tier.cta}</button>
        </section>
    }
}
