use super::*;

#[test]
fn kpi_delta_text_is_signed() {
    assert_eq!(KPIS[0].delta_text(), "+12.5%");
    assert!(KPIS[0].is_positive());
    assert_eq!(KPIS[2].delta_text(), "-2.1%");
    assert!(!KPIS[2].is_positive());
}

#[test]
fn kpi_titles_are_in_display_order() {
    let titles: Vec<&str> = KPIS.iter().map(|k| k.title).collect();
    assert_eq!(titles, ["Total Revenue", "Orders", "Average Order Value", "Conversion Rate"]);
}

#[test]
fn flip_state_starts_on_summary() {
    let state = FlipState::default();
    assert!(!state.flipped);
    assert_eq!(state.css_class(), "flip-card");
}

#[test]
fn flip_state_round_trips() {
    let mut state = FlipState::default();
    state.show_details();
    assert!(state.flipped);
    assert_eq!(state.css_class(), "flip-card flip-card--flipped");
    state.show_details();
    assert!(state.flipped);
    state.show_summary();
    assert_eq!(state, FlipState::default());
}

#[test]
fn country_shares_add_up_to_whole() {
    let total: u32 = COUNTRY_ORDERS.iter().map(|c| u32::from(c.percentage)).sum();
    assert_eq!(total, 100);
    assert_eq!(COUNTRY_ORDERS[0].orders_label(), "1,842 orders");
    assert_eq!(COUNTRY_ORDERS[5].orders_label(), "387 orders");
}

#[test]
fn monthly_target_caption_and_bar() {
    let sales = MONTHLY_TARGETS[0];
    assert_eq!(sales.caption(), "75% of $60,000 target");
    assert_eq!(sales.bar_width(), "width: 75%");
    assert_eq!(MONTHLY_TARGETS[2].caption(), "98.5% of 95% target");
    assert_eq!(MONTHLY_TARGETS[1].status.label(), "At Risk");
}

#[test]
fn bar_width_is_capped() {
    let over = MonthlyTarget { progress: 140.0, ..MONTHLY_TARGETS[0] };
    assert_eq!(over.bar_width(), "width: 100%");
}

#[test]
fn order_status_strings() {
    let statuses: Vec<&str> = RECENT_ORDERS.iter().map(|o| o.status.as_str()).collect();
    assert_eq!(statuses, ["completed", "processing", "completed", "pending"]);
}
