//! Runtime seams
//!
//! Time and randomness are injected so the timed and randomized commands can
//! be driven deterministically.

pub mod clock;
pub mod random;

pub use clock::{Clock, SystemClock};
pub use random::{RandomSource, RngSource};
