//! In-memory port fakes shared by the unit tests of this crate.

use std::collections::HashSet;
use std::future::Future;
use std::io;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use growlight_domain::error::GrowLightError;
use growlight_domain::id::EntityId;
use growlight_domain::settings::Settings;
use growlight_domain::state::{SwitchState, UvReading};
use growlight_domain::time::Timestamp;

use tracing_subscriber::fmt::MakeWriter;

use crate::ports::{Clock, SensorReader, SwitchActuator};

pub fn at(month: u32, hour: u32, minute: u32) -> Timestamp {
    NaiveDate::from_ymd_opt(2025, month, 12)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn settings() -> Settings {
    Settings::builder()
        .uv_index_sensor("sensor.uv_index")
        .switches(["switch.grow_light_1", "switch.grow_light_2", "switch.grow_light_3"])
        .build()
        .unwrap()
}

// ── Clock ──────────────────────────────────────────────────────────

pub struct FixedClock(pub Mutex<Timestamp>);

impl FixedClock {
    pub fn at(ts: Timestamp) -> Self {
        Self(Mutex::new(ts))
    }

    pub fn set(&self, ts: Timestamp) {
        *self.0.lock().unwrap() = ts;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.0.lock().unwrap()
    }
}

// ── Sensor ─────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
pub enum SensorResponse {
    Reading(UvReading),
    Garbage,
}

pub struct FakeSensor {
    response: Mutex<SensorResponse>,
    reads: AtomicUsize,
}

impl FakeSensor {
    pub fn returning(response: SensorResponse) -> Self {
        Self {
            response: Mutex::new(response),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn value(uv_index: f64) -> Self {
        Self::returning(SensorResponse::Reading(UvReading::Value(uv_index)))
    }

    pub fn unavailable() -> Self {
        Self::returning(SensorResponse::Reading(UvReading::Unavailable))
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl SensorReader for FakeSensor {
    fn read_sensor(
        &self,
        entity_id: &EntityId,
    ) -> impl Future<Output = Result<UvReading, GrowLightError>> + Send {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let result = match *self.response.lock().unwrap() {
            SensorResponse::Reading(reading) => Ok(reading),
            SensorResponse::Garbage => Err(GrowLightError::InvalidReading {
                entity_id: entity_id.clone(),
                state: "garbage".to_string(),
            }),
        };
        async { result }
    }
}

// ── Actuator ───────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingActuator {
    calls: Mutex<Vec<(EntityId, SwitchState)>>,
    failing: HashSet<String>,
}

impl RecordingActuator {
    pub fn failing_on(entity_ids: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: entity_ids.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn calls(&self) -> Vec<(EntityId, SwitchState)> {
        self.calls.lock().unwrap().clone()
    }
}

impl SwitchActuator for RecordingActuator {
    fn set_switch(
        &self,
        entity_id: &EntityId,
        state: SwitchState,
    ) -> impl Future<Output = Result<(), GrowLightError>> + Send {
        self.calls.lock().unwrap().push((entity_id.clone(), state));
        let result = if self.failing.contains(entity_id.as_str()) {
            Err(GrowLightError::UnknownEntity(entity_id.clone()))
        } else {
            Ok(())
        };
        async { result }
    }
}

// ── Logs ───────────────────────────────────────────────────────────

/// Captures formatted log output for the current thread.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
