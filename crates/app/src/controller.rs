//! Light controller — one evaluation of the grow-light rule.
//!
//! Each [`tick`](LightController::tick) reads the clock, decides the desired
//! switch state and applies it to every configured switch. Nothing escapes a
//! tick: sensor failures fall back to "on", actuation failures are logged per
//! switch and the remaining switches are still attempted.

use growlight_domain::id::EntityId;
use growlight_domain::policy::Decision;
use growlight_domain::settings::Settings;
use growlight_domain::state::{SwitchState, UvReading};
use growlight_domain::time::Timestamp;

use crate::ports::{Clock, SensorReader, SwitchActuator};

/// What a single tick decided and which switches it managed to set.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub at: Timestamp,
    pub decision: Decision,
    pub applied: Vec<EntityId>,
    pub failed: Vec<EntityId>,
}

impl TickOutcome {
    #[must_use]
    pub fn desired_state(&self) -> SwitchState {
        self.decision.desired_state()
    }
}

/// Drives the grow-light rule against the host ports.
pub struct LightController<C, S, A> {
    settings: Settings,
    clock: C,
    sensor: S,
    actuator: A,
}

impl<C, S, A> LightController<C, S, A>
where
    C: Clock,
    S: SensorReader,
    A: SwitchActuator,
{
    /// Create a new controller.
    pub fn new(settings: Settings, clock: C, sensor: S, actuator: A) -> Self {
        Self {
            settings,
            clock,
            sensor,
            actuator,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current time according to the injected clock.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Evaluate the rule once and apply the result to every switch.
    pub async fn tick(&self) -> TickOutcome {
        self.tick_at(self.clock.now()).await
    }

    /// Same as [`tick`](Self::tick) for an instant the caller already read.
    pub async fn tick_at(&self, at: Timestamp) -> TickOutcome {
        let decision = self.evaluate(at).await;
        let state = decision.desired_state();

        tracing::info!(%decision, %state, "turning lights {state}");
        let (applied, failed) = self.apply(state).await;

        TickOutcome {
            at,
            decision,
            applied,
            failed,
        }
    }

    /// Decide without touching the switches. The sensor is only read inside
    /// active hours.
    pub async fn evaluate(&self, at: Timestamp) -> Decision {
        if !self.settings.is_active(at) {
            tracing::debug!(%at, "outside active hours, sensor not read");
            return Decision::OutsideActiveHours;
        }
        let reading = self.read_uv_index().await;
        self.settings.decide(at, reading)
    }

    async fn read_uv_index(&self) -> UvReading {
        let sensor = &self.settings.uv_index_sensor;
        match self.sensor.read_sensor(sensor).await {
            Ok(UvReading::Value(uv_index)) if !uv_index.is_finite() => {
                tracing::error!(%sensor, uv_index, "UV sensor reported a non-finite value");
                UvReading::Unavailable
            }
            Ok(UvReading::Unavailable) => {
                tracing::warn!(%sensor, "UV sensor {sensor} is unavailable");
                UvReading::Unavailable
            }
            Ok(reading) => reading,
            Err(err) => {
                tracing::error!(%sensor, error = ?err, "failed to read UV index");
                UvReading::Unavailable
            }
        }
    }

    async fn apply(&self, state: SwitchState) -> (Vec<EntityId>, Vec<EntityId>) {
        let mut applied = Vec::with_capacity(self.settings.switches.len());
        let mut failed = Vec::new();

        for switch in &self.settings.switches {
            match self.actuator.set_switch(switch, state).await {
                Ok(()) => {
                    tracing::debug!(%switch, %state, "set {switch} to {state}");
                    applied.push(switch.clone());
                }
                Err(err) => {
                    tracing::error!(%switch, %state, error = ?err, "error controlling switch {switch}");
                    failed.push(switch.clone());
                }
            }
        }

        (applied, failed)
    }
}
