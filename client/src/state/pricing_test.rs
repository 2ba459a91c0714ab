use super::*;

fn tier(name: &str) -> PricingTier {
    PRICING_TIERS.iter().copied().find(|t| t.name == name).unwrap()
}

#[test]
fn billing_cycle_defaults_to_monthly_and_toggles() {
    assert_eq!(BillingCycle::default(), BillingCycle::Monthly);
    assert_eq!(BillingCycle::Monthly.toggled(), BillingCycle::Yearly);
    assert_eq!(BillingCycle::Yearly.toggled(), BillingCycle::Monthly);
    assert_eq!(BillingCycle::Yearly.period_label(), "year");
}

#[test]
fn only_pro_is_highlighted() {
    let highlighted: Vec<&str> = PRICING_TIERS.iter().filter(|t| t.highlighted).map(|t| t.name).collect();
    assert_eq!(highlighted, vec!["Pro"]);
}

#[test]
fn price_follows_cycle() {
    let pro = tier("Pro");
    assert_eq!(pro.price(BillingCycle::Monthly), 49);
    assert_eq!(pro.price(BillingCycle::Yearly), 470);
}

#[test]
fn effective_monthly_has_two_decimals() {
    assert_eq!(tier("Pro").effective_monthly(), "39.17");
    assert_eq!(tier("Enterprise").effective_monthly(), "159.17");
}

#[test]
fn yearly_savings_are_about_twenty_percent() {
    assert_eq!(tier("Pro").yearly_savings_percent(), 20);
    assert_eq!(tier("Enterprise").yearly_savings_percent(), 20);
    assert_eq!(tier("Free").yearly_savings_percent(), 0);
    assert!(tier("Free").is_free());
}
