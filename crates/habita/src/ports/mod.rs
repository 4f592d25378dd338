//! Ports (Interfaces)
//!
//! Abstract interfaces between the engine and its environment. The only
//! ambient dependency of the analytics math is "today", so the clock is
//! the only port.

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
