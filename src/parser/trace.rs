//! Opt-in BEGIN/END tracing of the recursive descent.
//!
//! Each traced call logs `BEGIN <name>` on entry and `END <name>` on exit,
//! indented one tab per nesting level. The END line is emitted by an RAII
//! guard, so it fires on every exit path. Lines go through `log::trace!`;
//! run with `RUST_LOG=trace` to see them.

use std::cell::Cell;
use std::rc::Rc;

const PLACEHOLDER: &str = "\t";

/// Owns the shared indent level. Disabled tracers hand out inert guards.
#[derive(Debug, Clone, Default)]
pub struct Tracer {
    enabled: bool,
    level: Rc<Cell<usize>>,
}

impl Tracer {
    pub fn new(enabled: bool) -> Self {
        Tracer {
            enabled,
            level: Rc::default(),
        }
    }

    /// Logs `BEGIN name` and returns the guard that logs the matching
    /// `END name` when dropped.
    pub fn begin(&self, name: &'static str) -> TraceSpan {
        if self.enabled {
            let level = self.level.get() + 1;
            self.level.set(level);
            log::trace!("{}BEGIN {}", PLACEHOLDER.repeat(level - 1), name);
        }
        TraceSpan {
            enabled: self.enabled,
            level: Rc::clone(&self.level),
            name,
        }
    }
}

/// Guard returned by [`Tracer::begin`]; releases the indent level on drop.
#[must_use]
pub struct TraceSpan {
    enabled: bool,
    level: Rc<Cell<usize>>,
    name: &'static str,
}

impl Drop for TraceSpan {
    fn drop(&mut self) {
        if self.enabled {
            let level = self.level.get();
            log::trace!("{}END {}", PLACEHOLDER.repeat(level - 1), self.name);
            self.level.set(level.saturating_sub(1));
        }
    }
}
