//! Type-safe wrappers for Survivor identity values.

pub mod ids;

pub use ids::{Identity, LegacyUserId, PlayerToken};
