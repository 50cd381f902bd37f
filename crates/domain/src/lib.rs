//! # growlight-domain
//!
//! Pure domain model for the growlight controller.
//!
//! ## Responsibilities
//! - Foundational types: entity ids, error conventions, timestamps
//! - Define the **seasonal schedule** (summer / off-season time windows)
//! - Define **switch states** and **UV readings**
//! - Validate the rule **settings** once at startup
//! - Decide the desired switch state from a timestamp and a UV reading
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod policy;
pub mod schedule;
pub mod settings;
pub mod state;
