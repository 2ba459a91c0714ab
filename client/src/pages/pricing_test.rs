use super::*;

fn tier(name: &str) -> &'static PricingTier {
    PRICING_TIERS.iter().find(|t| t.name == name).expect("tier exists")
}

#[test]
fn monthly_prices_have_no_caption() {
    assert_eq!(price_caption(tier("Pro"), BillingCycle::Monthly), None);
}

#[test]
fn free_tier_has_no_caption_even_yearly() {
    assert_eq!(price_caption(tier("Free"), BillingCycle::Yearly), None);
}

#[test]
fn yearly_caption_shows_effective_monthly_and_saving() {
    let caption = price_caption(tier("Pro"), BillingCycle::Yearly).expect("caption");
    assert_eq!(caption, "$39.17/month billed yearly, save 20%");
}
