//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random draws.
//! CRITICAL: All randomness in the simulator MUST go through this module.
//! Each patient owns its own stream; streams are never shared.

mod xorshift;

pub use xorshift::RngStream;
