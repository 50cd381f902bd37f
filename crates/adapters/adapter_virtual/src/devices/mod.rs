//! Virtual device implementations — UV sensor and switch.
//!
//! Each device keeps its state behind a `Mutex` so the integration can be
//! shared between the controller and whoever drives the simulation.

mod sensor;
mod switch;

pub use sensor::VirtualUvSensor;
pub use switch::VirtualSwitch;
