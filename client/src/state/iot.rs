//! Smart-home controls: device power switches and the climate panel.
//!
//! Everything here is local mock state; toggling a device never talks to
//! hardware. The setpoint is kept inside the thermostat range no matter what
//! the slider or a typed value hands us.

#[cfg(test)]
#[path = "iot_test.rs"]
mod iot_test;

pub const MIN_SETPOINT_C: i32 = 16;
pub const MAX_SETPOINT_C: i32 = 30;
pub const DEFAULT_SETPOINT_C: i32 = 22;

/// Reading shown on the humidity tab.
pub const CURRENT_HUMIDITY_PERCENT: u8 = 45;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Device {
    Lights,
    Hvac,
    Security,
    Appliances,
}

impl Device {
    pub const ALL: [Device; 4] = [Device::Lights, Device::Hvac, Device::Security, Device::Appliances];

    pub fn title(self) -> &'static str {
        match self {
            Device::Lights => "Smart Lights",
            Device::Hvac => "HVAC System",
            Device::Security => "Security",
            Device::Appliances => "Appliances",
        }
    }

    /// Detail line shown under a powered device.
    pub fn metric(self) -> &'static str {
        match self {
            Device::Lights => "12 lights active",
            Device::Hvac => "Climate control active",
            Device::Security => "All cameras online",
            Device::Appliances => "3 devices connected",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClimateMode {
    #[default]
    Temperature,
    Humidity,
}

impl ClimateMode {
    pub fn label(self) -> &'static str {
        match self {
            ClimateMode::Temperature => "Temperature",
            ClimateMode::Humidity => "Humidity",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IotState {
    pub lights: bool,
    pub hvac: bool,
    pub security: bool,
    pub appliances: bool,
    pub setpoint_c: i32,
    pub climate_mode: ClimateMode,
}

impl Default for IotState {
    fn default() -> Self {
        Self {
            lights: true,
            hvac: true,
            security: true,
            appliances: false,
            setpoint_c: DEFAULT_SETPOINT_C,
            climate_mode: ClimateMode::Temperature,
        }
    }
}

impl IotState {
    fn slot(&mut self, device: Device) -> &mut bool {
        match device {
            Device::Lights => &mut self.lights,
            Device::Hvac => &mut self.hvac,
            Device::Security => &mut self.security,
            Device::Appliances => &mut self.appliances,
        }
    }

    pub fn is_on(&self, device: Device) -> bool {
        match device {
            Device::Lights => self.lights,
            Device::Hvac => self.hvac,
            Device::Security => self.security,
            Device::Appliances => self.appliances,
        }
    }

    /// Flip one device. Returns its new power state.
    pub fn toggle(&mut self, device: Device) -> bool {
        let slot = self.slot(device);
        *slot = !*slot;
        *slot
    }

    pub fn active_devices(&self) -> usize {
        Device::ALL.into_iter().filter(|d| self.is_on(*d)).count()
    }

    /// `Some(metric)` only while the device is powered.
    pub fn visible_metric(&self, device: Device) -> Option<&'static str> {
        self.is_on(device).then(|| device.metric())
    }

    /// Store a new target temperature, clamped to the thermostat range.
    /// Returns the value actually stored.
    pub fn set_setpoint(&mut self, celsius: i32) -> i32 {
        self.setpoint_c = celsius.clamp(MIN_SETPOINT_C, MAX_SETPOINT_C);
        self.setpoint_c
    }

    /// Slider input. Unparsable text leaves the setpoint unchanged.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_setpoint_from_input(&mut self, raw: &str) -> i32 {
        match raw.trim().parse::<f64>() {
            // `as` saturates, so out-of-range input still lands on a bound.
            Ok(value) => self.set_setpoint(value.round() as i32),
            Err(_) => self.setpoint_c,
        }
    }

    pub fn set_climate_mode(&mut self, mode: ClimateMode) {
        self.climate_mode = mode;
    }
}

/// Fixed energy figures for the usage card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergySummary {
    pub today_kwh: f64,
    pub change_vs_yesterday_percent: i32,
    pub peak_kwh: f64,
    pub average_kwh: f64,
}

pub const ENERGY_SUMMARY: EnergySummary =
    EnergySummary { today_kwh: 24.5, change_vs_yesterday_percent: -12, peak_kwh: 5.1, average_kwh: 3.2 };

impl EnergySummary {
    pub fn change_label(&self) -> String {
        let sign = if self.change_vs_yesterday_percent > 0 { "+" } else { "" };
        format!("{sign}{}% vs yesterday", self.change_vs_yesterday_percent)
    }
}
