//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the host that
//! owns the sensor and the switches. They are defined here (in `app`) so that
//! both the use-case layer and the adapter layer can depend on them without
//! creating circular dependencies.

pub mod clock;
pub mod sensor;
pub mod switch;

pub use clock::{Clock, SystemClock};
pub use sensor::SensorReader;
pub use switch::SwitchActuator;
