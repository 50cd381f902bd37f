//! Sensor port — reads the UV-index sensor from the host.

use std::future::Future;

use growlight_domain::error::GrowLightError;
use growlight_domain::id::EntityId;
use growlight_domain::state::UvReading;

/// Reads the current numeric state of a sensor entity.
pub trait SensorReader {
    /// Return the sensor's current value, or [`UvReading::Unavailable`] when
    /// the host reports it as unavailable.
    ///
    /// An `Err` means the read itself failed (transport error, unknown
    /// entity, non-numeric state).
    fn read_sensor(
        &self,
        entity_id: &EntityId,
    ) -> impl Future<Output = Result<UvReading, GrowLightError>> + Send;
}

impl<T: SensorReader + Send + Sync> SensorReader for std::sync::Arc<T> {
    fn read_sensor(
        &self,
        entity_id: &EntityId,
    ) -> impl Future<Output = Result<UvReading, GrowLightError>> + Send {
        (**self).read_sensor(entity_id)
    }
}
