//! Keyboard handling - nudge, fixed-step scaling and delete requests.
//!
//! | Keys               | Effect                                   |
//! |--------------------|------------------------------------------|
//! | Arrow              | Move one unit                            |
//! | Shift+Left / Up    | Grow that axis by one unit               |
//! | Shift+Right / Down | Shrink that axis by one unit             |
//! | + Control          | Scale the other axis by the same fraction |
//! | Delete / Backspace | Request removal (user-deletable only)    |

use crate::constants::{MOVEMENT_DELTA, SCALE_DELTA};
use crate::geometry::is_valid_scale;
use crate::input::{Key, KeyOutcome, Modifiers};
use crate::settings::Settings;
use crate::target::Target;
use crate::types::Size;
use tracing::trace;

impl Target {
    pub fn on_key_pressed(&mut self, key: Key, modifiers: Modifiers, settings: &Settings) -> KeyOutcome {
        let extent = settings.extent();
        match key {
            Key::Delete | Key::Backspace => {
                if self.is_user_deletable() {
                    KeyOutcome::RemoveRequested
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Left | Key::Right | Key::Up | Key::Down if modifiers.shift => {
                let horizontal = matches!(key, Key::Left | Key::Right);
                let grow = matches!(key, Key::Left | Key::Up);
                self.key_scale(horizontal, grow, modifiers.control, extent);
                KeyOutcome::Handled
            }
            Key::Left => {
                self.nudge(-MOVEMENT_DELTA, 0.0, extent);
                KeyOutcome::Handled
            }
            Key::Right => {
                self.nudge(MOVEMENT_DELTA, 0.0, extent);
                KeyOutcome::Handled
            }
            Key::Up => {
                self.nudge(0.0, -MOVEMENT_DELTA, extent);
                KeyOutcome::Handled
            }
            Key::Down => {
                self.nudge(0.0, MOVEMENT_DELTA, extent);
                KeyOutcome::Handled
            }
            Key::Other => KeyOutcome::Ignored,
        }
    }

    fn nudge(&mut self, dx: f64, dy: f64, extent: Size) {
        // Only the axis being moved has to stay inside the display
        let b = self.bounds_in_parent();
        let fits_x = dx == 0.0 || (b.min_x() + dx >= 0.0 && b.max_x() + dx <= extent.width);
        let fits_y = dy == 0.0 || (b.min_y() + dy >= 0.0 && b.max_y() + dy <= extent.height);
        let fits = fits_x && fits_y;

        if self.keep_in_bounds() && !fits {
            trace!(target_id = %self.id(), dx, dy, "Nudge held at display bounds");
            return;
        }

        let p = self.position();
        self.set_position(p.x + dx, p.y + dy);
    }

    fn key_scale(&mut self, horizontal: bool, grow: bool, companion: bool, extent: Size) {
        let current = self.dimension();
        let primary = if horizontal { current.width } else { current.height };
        let step = if grow { -SCALE_DELTA } else { SCALE_DELTA };
        let scale_delta = step / primary;
        let factor = 1.0 - scale_delta;

        let saved = self.geometry;
        let (mut scale_x, mut scale_y) = (saved.scale_x, saved.scale_y);
        if horizontal || companion {
            scale_x *= factor;
        }
        if !horizontal || companion {
            scale_y *= factor;
        }

        if !is_valid_scale(scale_x) || !is_valid_scale(scale_y) {
            trace!(target_id = %self.id(), scale_x, scale_y, "Rejected degenerate keyboard scale");
            return;
        }

        self.geometry.scale_x = scale_x;
        self.geometry.scale_y = scale_y;

        let b = self.bounds_in_parent();
        let outside = b.min_x() < 0.0 || b.max_x() > extent.width || b.min_y() < 0.0 || b.max_y() > extent.height;
        if self.keep_in_bounds() && outside {
            trace!(target_id = %self.id(), "Keyboard scale reverted at display bounds");
            self.geometry = saved;
            return;
        }

        self.compensate_unresizable_x();
        self.compensate_unresizable_y();
        self.record_resized();
    }
}
