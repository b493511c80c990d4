//! Pointer and keyboard handling for targets.
//!
//! Handlers are `impl Target` blocks that take positions in parent
//! (container) space and read `Settings` by reference.
//!
//! ## Architecture
//!
//! Each target tracks its interaction in an explicit state machine
//! (`InputState`): a press picks `Moving` or `Resizing` from the edge zone
//! under the pointer, drags act on that state, release returns to `Idle`.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and resize edge set
//! - `events` - Modifiers, keys, cursors and key outcomes
//! - `mouse_down` - Press, hover and click handling (zone detection)
//! - `drag` - Drag handling (move, resize, aspect lock, bounds clamping)
//! - `mouse_up` - Release handling
//! - `keyboard` - Arrow nudge, keyboard scaling, delete requests

mod drag;
mod events;
mod keyboard;
mod mouse_down;
mod mouse_up;
mod state;

pub use events::{Key, KeyOutcome, Modifiers, ResizeCursor};
pub use mouse_down::cursor_for;
pub use state::{InputState, ResizeEdges};
