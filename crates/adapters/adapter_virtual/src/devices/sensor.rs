//! Virtual UV-index sensor — holds a reading that tests or the demo set.

use std::sync::Mutex;

use growlight_domain::id::EntityId;
use growlight_domain::state::UvReading;

/// A simulated UV-index sensor.
pub struct VirtualUvSensor {
    entity_id: EntityId,
    reading: Mutex<UvReading>,
}

impl VirtualUvSensor {
    #[must_use]
    pub fn new(entity_id: EntityId, reading: UvReading) -> Self {
        Self {
            entity_id,
            reading: Mutex::new(reading),
        }
    }

    #[must_use]
    pub fn entity_id(&self) -> &EntityId {
        &self.entity_id
    }

    #[must_use]
    pub fn reading(&self) -> UvReading {
        *self
            .reading
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn set_reading(&self, reading: UvReading) {
        *self
            .reading
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = reading;
    }
}
