//! Log macros that cost nothing unless the `tracing` feature is on.
//!
//! With the feature enabled these are the `tracing` macros; without it they
//! swallow their arguments at compile time, so call sites stay free of
//! feature cfgs.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
