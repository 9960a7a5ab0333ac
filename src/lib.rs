//! Nordics progression core: level curves, tiered achievements and the
//! one-time claim transition that awards XP.
//!
//! The subcrates are re-exported here; [`Progression`] wires them together
//! for hosts that want a single entry point.

pub use achievements;
pub use error;
pub use leveling;
pub use store;

pub mod progression;

pub use progression::Progression;
