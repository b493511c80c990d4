//! Performance instrumentation for the hot paths.
//!
//! Shot classification runs on the detection thread for every detected shot
//! and drag handling runs for every pointer move, so both are wrapped in
//! `profile_scope!`. A scope without a threshold compiles to nothing unless
//! the `profiling` feature is on. A scope with a threshold always reports
//! operations slower than it.
//!
//! ```ignore
//! fn classify(&self, point: Point) -> Option<Hit> {
//!     profile_scope!("classify", CLASSIFY_WARN_MS);
//!     // ...
//! }
//! ```

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Default threshold for scopes that do not pass one
const DEFAULT_THRESHOLD_MS: f64 = 1.0;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

thread_local! {
    static CURRENT_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Time a scope. Reports the scope if it exceeds the threshold.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Enable or disable verbose scope tracing at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer; logs on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    depth: usize,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        let depth = CURRENT_DEPTH.with(|d| {
            let depth = d.get();
            d.set(depth + 1);
            depth
        });
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            depth,
        }
    }

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, DEFAULT_THRESHOLD_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Nesting depth of this timer on the current thread.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        CURRENT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));

        #[cfg(feature = "profiling")]
        if is_profiling_enabled() {
            let indent = "  ".repeat(self.depth);
            trace!("{}[PERF] {}: {:.2}ms", indent, self.name, elapsed_ms);
        }

        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}
