//! Conditional tracing macro (zero-cost when the feature is disabled).
//!
//! `trace_event!` emits a `tracing` debug event when the `tracing` cargo
//! feature is enabled. When disabled it evaluates its value expressions (to
//! keep call sites warning-free) and discards them, compiling to nothing.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
