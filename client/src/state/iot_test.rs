use super::*;

#[test]
fn default_devices_match_initial_panel() {
    let state = IotState::default();
    assert!(state.is_on(Device::Lights));
    assert!(state.is_on(Device::Hvac));
    assert!(state.is_on(Device::Security));
    assert!(!state.is_on(Device::Appliances));
    assert_eq!(state.active_devices(), 3);
    assert_eq!(state.setpoint_c, 22);
    assert_eq!(state.climate_mode, ClimateMode::Temperature);
}

#[test]
fn toggle_flips_only_the_named_device() {
    let mut state = IotState::default();
    assert!(state.toggle(Device::Appliances));
    assert!(state.is_on(Device::Appliances));
    assert_eq!(state.active_devices(), 4);

    assert!(!state.toggle(Device::Lights));
    assert!(!state.is_on(Device::Lights));
    assert!(state.is_on(Device::Hvac));
    assert!(state.is_on(Device::Security));
}

#[test]
fn double_toggle_restores_state() {
    let mut state = IotState::default();
    for device in Device::ALL {
        state.toggle(device);
        state.toggle(device);
    }
    assert_eq!(state, IotState::default());
}

#[test]
fn metric_hidden_while_device_is_off() {
    let mut state = IotState::default();
    assert_eq!(state.visible_metric(Device::Lights), Some("12 lights active"));
    assert_eq!(state.visible_metric(Device::Appliances), None);
    state.toggle(Device::Lights);
    assert_eq!(state.visible_metric(Device::Lights), None);
}

#[test]
fn setpoint_is_clamped_to_thermostat_range() {
    let mut state = IotState::default();
    assert_eq!(state.set_setpoint(25), 25);
    assert_eq!(state.set_setpoint(5), MIN_SETPOINT_C);
    assert_eq!(state.set_setpoint(99), MAX_SETPOINT_C);
    assert_eq!(state.setpoint_c, 30);
}

#[test]
fn setpoint_from_input_parses_and_ignores_garbage() {
    let mut state = IotState::default();
    assert_eq!(state.set_setpoint_from_input("18"), 18);
    assert_eq!(state.set_setpoint_from_input(" 27.6 "), 28);
    assert_eq!(state.set_setpoint_from_input("warm"), 28);
    assert_eq!(state.set_setpoint_from_input("-40"), MIN_SETPOINT_C);
}

#[test]
fn climate_mode_switches_without_touching_setpoint() {
    let mut state = IotState::default();
    state.set_setpoint(19);
    state.set_climate_mode(ClimateMode::Humidity);
    assert_eq!(state.climate_mode.label(), "Humidity");
    assert_eq!(state.setpoint_c, 19);
    state.set_climate_mode(ClimateMode::Temperature);
    assert_eq!(state.climate_mode, ClimateMode::Temperature);
}

#[test]
fn energy_change_label_keeps_sign() {
    assert_eq!(ENERGY_SUMMARY.change_label(), "-12% vs yesterday");
    let up = EnergySummary { change_vs_yesterday_percent: 4, ..ENERGY_SUMMARY };
    assert_eq!(up.change_label(), "+4% vs yesterday");
}
