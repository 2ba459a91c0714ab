//! Smart-home panel: device switches, thermostat and energy summary.

use leptos::prelude::*;

use crate::state::iot::{
    CURRENT_HUMIDITY_PERCENT, ClimateMode, Device, ENERGY_SUMMARY, IotState, MAX_SETPOINT_C, MIN_SETPOINT_C,
};

#[component]
pub fn IotPage() -> impl IntoView {
    let iot = RwSignal::new(IotState::default());

    view! {
        <div class="page iot-page">
            <header class="page__header">
                <h2>"IoT Dashboard"</h2>
                <p class="page__subtitle">"Monitor and control your smart home devices"</p>
                <p class="page__meta">{move || format!("{} of {} devices on", iot.with(IotState::active_devices), Device::ALL.len())}</p>
            </header>

            <div class="kpi-grid">
                {Device::ALL.into_iter().map(|device| view! { <DeviceCard device=device iot=iot/> }).collect_view()}
            </div>

            <div class="two-col">
                <section class="card">
                    <h3>"Climate Control"</h3>
                    <div class="tabs" role="tablist">
                        <ModeTab mode=ClimateMode::Temperature iot=iot/>
                        <ModeTab mode=ClimateMode::Humidity iot=iot/>
                    </div>
                    <Show
                        when=move || iot.with(|s| s.climate_mode == ClimateMode::Temperature)
                        fallback=|| {
                            view! {
                                <div class="gauge">
                                    <span class="gauge__value">{format!("{CURRENT_HUMIDITY_PERCENT}%")}</span>
                                    <span class="field__hint">"Current Humidity"</span>
                                    <span class="badge badge--active">"Optimal Range"</span>
                                </div>
                            }
                        }
                    >
                        <div class="gauge">
                            <span class="gauge__value">{move || format!("{}°C", iot.with(|s| s.setpoint_c))}</span>
                            <span class="field__hint">"Target Temperature"</span>
                        </div>
                        <input
                            class="slider"
                            type="range"
                            min=MIN_SETPOINT_C.to_string()
                            max=MAX_SETPOINT_C.to_string()
                            step="1"
                            aria-label="Target temperature"
                            prop:value=move || iot.with(|s| s.setpoint_c.to_string())
                            on:input=move |ev| {
                                iot.update(|s| {
                                    s.set_setpoint_from_input(&event_target_value(&ev));
                                });
                            }
                        />
                        <div class="stat-list__row field__hint">
                            <span>{format!("{MIN_SETPOINT_C}°C")}</span>
                            <span>{format!("{MAX_SETPOINT_C}°C")}</span>
                        </div>
                    </Show>
                </section>

                <section class="card">
                    <h3>"Energy Usage"</h3>
                    <p class="kpi__value">{format!("{} kWh today", ENERGY_SUMMARY.today_kwh)}</p>
                    <span class="badge badge--active">{ENERGY_SUMMARY.change_label()}</span>
                    <div class="stat-list__row energy-figures">
                        <div>
                            <p class="field__hint">"Peak Usage"</p>
                            <p>{format!("{} kWh", ENERGY_SUMMARY.peak_kwh)}</p>
                        </div>
                        <div>
                            <p class="field__hint">"Avg. Usage"</p>
                            <p>{format!("{} kWh", ENERGY_SUMMARY.average_kwh)}</p>
                        </div>
                    </div>
                </section>
            </div>
        </div>
    }
}

#[component]
fn DeviceCard(device: Device, iot: RwSignal<IotState>) -> impl IntoView {
    let is_on = move || iot.with(|s| s.is_on(device));

    view! {
        <section class="card device-card">
            <div class="stat-list__row">
                <div>
                    <h4>{device.title()}</h4>
                    <span class=move || if is_on() { "badge badge--active" } else { "badge badge--outline" }>
                        {move || if is_on() { "On" } else { "Off" }}
                    </span>
                </div>
                <input
                    type="checkbox"
                    role="switch"
                    aria-label=format!("Toggle {}", device.title())
                    prop:checked=is_on
                    on:change=move |_| {
                        let on = iot.try_update(|s| s.toggle(device));
                        leptos::logging::log!("{} switched {}", device.title(), if on == Some(true) { "on" } else { "off" });
                    }
                />
            </div>
            <p class="field__hint">{move || iot.with(|s| s.visible_metric(device))}</p>
        </section>
    }
}

#[component]
fn ModeTab(mode: ClimateMode, iot: RwSignal<IotState>) -> impl IntoView {
    view! {
        <button
            class=move || if iot.with(|s| s.climate_mode == mode) { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
            role="tab"
            on:click=move |_| iot.update(|s| s.set_climate_mode(mode))
        >
            {mode.label()}
        </button>
    }
}
