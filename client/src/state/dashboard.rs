//! E-commerce overview figures and the flip state of detail cards.
//!
//! DESIGN
//! ======
//! The dashboard shows fixed demonstration numbers, so the tables below are
//! `static` and the only mutable state is whether a card shows its back.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::util::number::{group_thousands, signed_percent};

/// Headline metric card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kpi {
    pub title: &'static str,
    pub value: &'static str,
    pub delta: f64,
    pub delta_label: &'static str,
}

impl Kpi {
    pub fn is_positive(&self) -> bool {
        self.delta >= 0.0
    }

    pub fn delta_text(&self) -> String {
        signed_percent(self.delta)
    }
}

pub static KPIS: [Kpi; 4] = [
    Kpi { title: "Total Revenue", value: "$45,231", delta: 12.5, delta_label: "vs last week" },
    Kpi { title: "Orders", value: "2,145", delta: 8.2, delta_label: "vs last week" },
    Kpi { title: "Average Order Value", value: "$89.50", delta: -2.1, delta_label: "vs last week" },
    Kpi { title: "Conversion Rate", value: "3.8%", delta: 5.7, delta_label: "vs last week" },
];

/// Front face of the flippable profit card.
pub static PROFIT_OVERVIEW: Kpi =
    Kpi { title: "Profit Overview", value: "$32,450", delta: 15.3, delta_label: "vs last period" };

/// Two-sided card: summary on the front, details on the back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipState {
    pub flipped: bool,
}

impl FlipState {
    /// "View details".
    pub fn show_details(&mut self) {
        self.flipped = true;
    }

    /// Back arrow.
    pub fn show_summary(&mut self) {
        self.flipped = false;
    }

    pub fn css_class(self) -> &'static str {
        if self.flipped { "flip-card flip-card--flipped" } else { "flip-card" }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryOrders {
    pub country: &'static str,
    pub flag: &'static str,
    pub orders: u64,
    pub percentage: u8,
}

impl CountryOrders {
    pub fn orders_label(&self) -> String {
        format!("{} orders", group_thousands(self.orders))
    }
}

pub static COUNTRY_ORDERS: [CountryOrders; 6] = [
    CountryOrders { country: "United States", flag: "🇺🇸", orders: 1842, percentage: 32 },
    CountryOrders { country: "United Kingdom", flag: "🇬🇧", orders: 1234, percentage: 21 },
    CountryOrders { country: "Germany", flag: "🇩🇪", orders: 987, percentage: 17 },
    CountryOrders { country: "France", flag: "🇫🇷", orders: 756, percentage: 13 },
    CountryOrders { country: "Canada", flag: "🇨🇦", orders: 654, percentage: 11 },
    CountryOrders { country: "Others", flag: "🌍", orders: 387, percentage: 6 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetStatus {
    OnTrack,
    AtRisk,
    Excellent,
}

impl TargetStatus {
    pub fn label(self) -> &'static str {
        match self {
            TargetStatus::OnTrack => "On Track",
            TargetStatus::AtRisk => "At Risk",
            TargetStatus::Excellent => "Excellent",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            TargetStatus::OnTrack | TargetStatus::Excellent => "badge--active",
            TargetStatus::AtRisk => "badge--pending",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthlyTarget {
    pub label: &'static str,
    pub current: &'static str,
    pub progress: f64,
    pub goal: &'static str,
    pub status: TargetStatus,
}

impl MonthlyTarget {
    /// Width for the progress bar, capped at 100%.
    pub fn bar_width(&self) -> String {
        format!("width: {}%", self.progress.clamp(0.0, 100.0))
    }

    pub fn caption(&self) -> String {
        format!("{}% of {} target", self.progress, self.goal)
    }
}

pub static MONTHLY_TARGETS: [MonthlyTarget; 3] = [
    MonthlyTarget {
        label: "Total Sales",
        current: "$45,231",
        progress: 75.0,
        goal: "$60,000",
        status: TargetStatus::OnTrack,
    },
    MonthlyTarget { label: "New Customers", current: "487", progress: 58.0, goal: "840", status: TargetStatus::AtRisk },
    MonthlyTarget {
        label: "Order Fulfillment",
        current: "98.5%",
        progress: 98.5,
        goal: "95%",
        status: TargetStatus::Excellent,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Completed,
    Processing,
    Pending,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Completed => "completed",
            OrderStatus::Processing => "processing",
            OrderStatus::Pending => "pending",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecentOrder {
    pub id: &'static str,
    pub customer: &'static str,
    pub amount: &'static str,
    pub status: OrderStatus,
    pub time: &'static str,
}

pub static RECENT_ORDERS: [RecentOrder; 4] = [
    RecentOrder {
        id: "#ORD-2847",
        customer: "Sarah Johnson",
        amount: "$234.50",
        status: OrderStatus::Completed,
        time: "2 min ago",
    },
    RecentOrder {
        id: "#ORD-2846",
        customer: "Michael Chen",
        amount: "$189.99",
        status: OrderStatus::Processing,
        time: "5 min ago",
    },
    RecentOrder {
        id: "#ORD-2845",
        customer: "Emma Wilson",
        amount: "$456.00",
        status: OrderStatus::Completed,
        time: "12 min ago",
    },
    RecentOrder {
        id: "#ORD-2844",
        customer: "James Brown",
        amount: "$99.99",
        status: OrderStatus::Pending,
        time: "18 min ago",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    pub message: &'static str,
    pub time: &'static str,
}

pub static ACTIVITIES: [Activity; 4] = [
    Activity { message: "New order received from Premium Plan", time: "2 minutes ago" },
    Activity { message: "Server response time increased by 15%", time: "1 hour ago" },
    Activity { message: "Summer campaign launched successfully", time: "3 hours ago" },
    Activity { message: "12 new conversions from email campaign", time: "5 hours ago" },
];
