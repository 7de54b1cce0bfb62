//! Internal logging shim.
//!
//! With the `tracing` feature enabled, `trace_event!` forwards to
//! [`tracing::trace!`]; otherwise it expands to nothing.

#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ::tracing::trace!(target: "pho", $($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}
