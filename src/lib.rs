//! Shotboard - interactive shooting targets over a live backdrop.
//!
//! Targets are groups of shape and image regions that a user moves and
//! resizes with the pointer or keyboard, while a detection pipeline on
//! another thread asks which region (if any) a detected shot struck.
//!
//! ## Modules
//!
//! - `types` - Ids and plain geometry values (`Point`, `Size`, `Bounds`, `Color`)
//! - `region` - Region primitives, tags and pixel sampling
//! - `geometry` - Position/scale ledger and coordinate transforms
//! - `target` - Target aggregate and geometry mutations
//! - `selection` - Selection outline and resize anchors
//! - `input` - Pointer/keyboard state machine and handlers
//! - `hit` - Shot classification
//! - `backdrop` - Target container, locking and input routing
//! - `recorder` - Session recording hooks
//! - `settings` - Interaction settings
//! - `error` - Error types
//! - `perf` - Scope timing for the hot paths
//! - `constants` - Tunables

pub mod backdrop;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod perf;
pub mod recorder;
pub mod region;
pub mod selection;
pub mod settings;
pub mod target;
pub mod types;

pub use backdrop::{Backdrop, TargetHandle};
pub use error::{TargetError, TargetResult};
pub use hit::Hit;
pub use settings::Settings;
pub use target::{Target, TargetDefinition};
