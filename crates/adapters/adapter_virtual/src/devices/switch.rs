//! Virtual switch — remembers the last state it was set to.

use std::sync::Mutex;

use growlight_domain::state::SwitchState;

/// A simulated switch that can be turned on and off.
pub struct VirtualSwitch {
    state: Mutex<SwitchState>,
}

impl VirtualSwitch {
    /// Create a switch that starts off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SwitchState::Off),
        }
    }

    #[must_use]
    pub fn state(&self) -> SwitchState {
        *self.lock()
    }

    /// Set the switch. Setting it to its current state is a no-op that
    /// still succeeds. Returns the previous state.
    pub fn set(&self, state: SwitchState) -> SwitchState {
        std::mem::replace(&mut *self.lock(), state)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SwitchState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for VirtualSwitch {
    fn default() -> Self {
        Self::new()
    }
}
