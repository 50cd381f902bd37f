//! Switch port — puts a switch entity into the requested state.

use std::future::Future;

use growlight_domain::error::GrowLightError;
use growlight_domain::id::EntityId;
use growlight_domain::state::SwitchState;

/// Applies an on/off state to a switch owned by the host.
///
/// Setting a switch that is already in `state` must succeed.
pub trait SwitchActuator {
    fn set_switch(
        &self,
        entity_id: &EntityId,
        state: SwitchState,
    ) -> impl Future<Output = Result<(), GrowLightError>> + Send;
}

impl<T: SwitchActuator + Send + Sync> SwitchActuator for std::sync::Arc<T> {
    fn set_switch(
        &self,
        entity_id: &EntityId,
        state: SwitchState,
    ) -> impl Future<Output = Result<(), GrowLightError>> + Send {
        (**self).set_switch(entity_id, state)
    }
}
