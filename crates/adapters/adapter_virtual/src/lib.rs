//! # growlight-adapter-virtual
//!
//! Virtual/demo host that provides a simulated UV sensor and grow-light
//! switches, for testing and for running the daemon without a real
//! home-automation server.
//!
//! ## Provided devices
//!
//! | Device | Behaviour |
//! |--------|-----------|
//! | UV sensor | Returns whatever reading was last set (or "unavailable") |
//! | Switches | Remember the last state they were set to; start off |
//!
//! ## Dependency rule
//!
//! Depends on `growlight-app` (port traits) and `growlight-domain` only.

mod devices;

use std::collections::HashMap;
use std::future::Future;

use growlight_app::ports::{SensorReader, SwitchActuator};
use growlight_domain::error::GrowLightError;
use growlight_domain::id::EntityId;
use growlight_domain::settings::Settings;
use growlight_domain::state::{SwitchState, UvReading};

pub use devices::{VirtualSwitch, VirtualUvSensor};

/// Virtual host owning one UV sensor and any number of switches.
pub struct VirtualIntegration {
    sensor: VirtualUvSensor,
    switches: HashMap<EntityId, VirtualSwitch>,
}

impl VirtualIntegration {
    /// Create the devices named in `settings`, with `reading` as the initial
    /// sensor value.
    #[must_use]
    pub fn new(settings: &Settings, reading: UvReading) -> Self {
        let sensor = VirtualUvSensor::new(settings.uv_index_sensor.clone(), reading);
        let switches = settings
            .switches
            .iter()
            .map(|id| (id.clone(), VirtualSwitch::new()))
            .collect();
        Self { sensor, switches }
    }

    /// Change the simulated UV reading.
    pub fn set_uv_index(&self, reading: UvReading) {
        self.sensor.set_reading(reading);
    }

    /// Current state of a switch, if this integration owns it.
    #[must_use]
    pub fn switch_state(&self, entity_id: &EntityId) -> Option<SwitchState> {
        self.switches.get(entity_id).map(VirtualSwitch::state)
    }
}

impl SensorReader for VirtualIntegration {
    fn read_sensor(
        &self,
        entity_id: &EntityId,
    ) -> impl Future<Output = Result<UvReading, GrowLightError>> + Send {
        let result = if self.sensor.entity_id() == entity_id {
            Ok(self.sensor.reading())
        } else {
            Err(GrowLightError::UnknownEntity(entity_id.clone()))
        };
        async { result }
    }
}

impl SwitchActuator for VirtualIntegration {
    fn set_switch(
        &self,
        entity_id: &EntityId,
        state: SwitchState,
    ) -> impl Future<Output = Result<(), GrowLightError>> + Send {
        let result = match self.switches.get(entity_id) {
            Some(switch) => {
                let previous = switch.set(state);
                if previous != state {
                    tracing::info!(switch = %entity_id, from = %previous, to = %state, "virtual switch changed");
                }
                Ok(())
            }
            None => Err(GrowLightError::UnknownEntity(entity_id.clone())),
        };
        async { result }
    }
}
