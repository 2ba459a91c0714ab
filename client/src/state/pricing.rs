//! Pricing tiers and the monthly/yearly billing toggle.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    pub fn period_label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "month",
            BillingCycle::Yearly => "year",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub description: &'static str,
    pub monthly_price: u32,
    pub yearly_price: u32,
    pub features: &'static [&'static str],
    pub highlighted: bool,
    pub cta: &'static str,
}

pub static PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Free",
        description: "Perfect for trying out our platform",
        monthly_price: 0,
        yearly_price: 0,
        features: &[
            "Up to 1,000 monthly visits",
            "Basic analytics",
            "5 team members",
            "Community support",
            "Basic integrations",
        ],
        highlighted: false,
        cta: "Get Started",
    },
    PricingTier {
        name: "Pro",
        description: "Best for growing businesses",
        monthly_price: 49,
        yearly_price: 470,
        features: &[
            "Up to 100,000 monthly visits",
            "Advanced analytics",
            "Unlimited team members",
            "Priority support",
            "All integrations",
            "Custom domains",
            "API access",
            "Advanced security",
        ],
        highlighted: true,
        cta: "Start Free Trial",
    },
    PricingTier {
        name: "Enterprise",
        description: "For large-scale operations",
        monthly_price: 199,
        yearly_price: 1910,
        features: &[
            "Unlimited monthly visits",
            "Enterprise analytics",
            "Unlimited team members",
            "Dedicated support",
            "All integrations",
            "Custom domains",
            "API access",
            "Advanced security",
            "SLA guarantee",
            "Custom contracts",
            "On-premise deployment",
        ],
        highlighted: false,
        cta: "Talk to Sales",
    },
];

impl PricingTier {
    pub fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    pub fn is_free(&self) -> bool {
        self.monthly_price == 0
    }

    /// Yearly price spread over twelve months, as shown under yearly plans.
    pub fn effective_monthly(&self) -> String {
        format!("{:.2}", f64::from(self.yearly_price) / 12.0)
    }

    /// Whole-percent saving of yearly billing over twelve monthly payments.
    pub fn yearly_savings_percent(&self) -> u32 {
        let twelve_months = self.monthly_price * 12;
        if twelve_months == 0 || self.yearly_price >= twelve_months {
            return 0;
        }
        (twelve_months - self.yearly_price) * 100 / twelve_months
    }
}
