//! # practica-core
//!
//! Core library for the practica coursework toolkit: clock-phrase
//! formatting, iterative Fibonacci, and trial-division primality.
//! All functions are pure; no I/O happens in this crate.

pub mod clock;
pub mod constants;
pub mod fibonacci;
pub(crate) mod numerals;
pub mod prime;

// Re-exports
pub use clock::{times, ClockError};
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64};
pub use fibonacci::fibonacci;
pub use prime::{is_prime, smallest_factor};
