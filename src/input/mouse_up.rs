//! Pointer release handling - finalize the active interaction.

use crate::target::Target;
use tracing::trace;

impl Target {
    /// Release always returns the target to `Idle`, whatever was in progress.
    pub fn on_pointer_released(&mut self) {
        if !self.input.is_idle() {
            trace!(target_id = %self.id(), state = ?self.input, "Interaction finished");
        }
        self.input.reset();
    }
}
