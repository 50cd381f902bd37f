//! # growlight-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Clock` — current local time
//!   - `SensorReader` — current UV-index reading
//!   - `SwitchActuator` — set a switch on or off
//! - Define the **driving** side:
//!   - `LightController` — one tick: decide, then apply to every switch
//!   - `Scheduler` — run ticks at a fixed interval until shutdown
//!
//! ## Dependency rule
//! Depends on `growlight-domain` only (plus `tokio::time` for the scheduler).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod controller;
pub mod ports;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod testing;
